//! # agrichat-client
//!
//! Leptos + WASM frontend for the Agri-Chatbot application. Replaces the
//! hand-rolled DOM scripting layer with a Rust-native UI crate: pages,
//! components, reactive state, and the REST wire types/helpers for the chat
//! backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
