#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::HistoryMessage;

/// Greeting shown in a fresh message box.
pub const WELCOME_TEXT: &str =
    "Welcome to Agri-Chatbot! How can I help you with your farming today?";

/// Who authored a message line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single rendered line in the message box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub sender: Sender,
    pub text: String,
}

/// Message box contents for the conversation currently on screen.
///
/// Lines are transient and never persisted client-side; the backend owns
/// history.
#[derive(Clone, Debug)]
pub struct MessagesState {
    pub lines: Vec<ChatLine>,
}

impl Default for MessagesState {
    fn default() -> Self {
        Self {
            lines: vec![ChatLine {
                sender: Sender::Bot,
                text: WELCOME_TEXT.to_owned(),
            }],
        }
    }
}

impl MessagesState {
    pub fn push_user(&mut self, text: &str) {
        self.lines.push(ChatLine {
            sender: Sender::User,
            text: text.to_owned(),
        });
    }

    pub fn push_bot(&mut self, text: &str) {
        self.lines.push(ChatLine {
            sender: Sender::Bot,
            text: text.to_owned(),
        });
    }

    /// Reset to the single welcome line (new-chat flow).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the box with a loaded history, in server order. A sender of
    /// `"user"` renders as the user; anything else renders as the bot.
    pub fn replace_with_history(&mut self, history: &[HistoryMessage]) {
        self.lines = history
            .iter()
            .map(|m| ChatLine {
                sender: if m.sender == "user" { Sender::User } else { Sender::Bot },
                text: m.message.clone(),
            })
            .collect();
    }
}

/// Trim a draft for sending. Whitespace-only drafts produce no message.
pub fn outgoing_text(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
