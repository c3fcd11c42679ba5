//! Top-level page components.

pub mod chat;
