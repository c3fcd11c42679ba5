#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Which chat the message box is showing, plus a generation counter for
/// in-flight history loads.
///
/// The active marker in the sidebar is derived from `active_chat`, so at
/// most one item can ever carry it. `load_seq` increases on every active-chat
/// transition; a history response is applied only if the token captured when
/// the load began still matches.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub active_chat: Option<String>,
    load_seq: u64,
}

impl SessionState {
    /// Mark `chat_id` active and start a new load generation.
    ///
    /// Returns the token the caller must present when applying the response;
    /// a response whose token is no longer current is stale and must be
    /// discarded.
    pub fn begin_load(&mut self, chat_id: String) -> u64 {
        self.active_chat = Some(chat_id);
        self.load_seq += 1;
        self.load_seq
    }

    /// Clear the active chat (new-chat reset). Outstanding load tokens are
    /// invalidated.
    pub fn clear_active(&mut self) {
        self.active_chat = None;
        self.load_seq += 1;
    }

    /// Whether a load begun with `token` is still the current one.
    pub fn is_current(&self, token: u64) -> bool {
        self.load_seq == token
    }

    pub fn is_active(&self, chat_id: &str) -> bool {
        self.active_chat.as_deref() == Some(chat_id)
    }
}
