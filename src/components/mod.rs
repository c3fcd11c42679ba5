//! UI components for the chat page.

pub mod chat_box;
pub mod chat_item;
pub mod chat_sidebar;
