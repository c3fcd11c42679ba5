#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

/// A chat summary for the sidebar history list.
///
/// `chat_id` is the chat's identity and never changes; only the title is
/// mutated on rename.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatSummary {
    pub chat_id: String,
    pub title: String,
}

/// Sidebar chat list, newest first.
#[derive(Clone, Debug, Default)]
pub struct ChatListState {
    pub items: Vec<ChatSummary>,
    pub loaded: bool,
}

impl ChatListState {
    /// Insert a freshly created chat at the head of the list.
    pub fn prepend(&mut self, summary: ChatSummary) {
        self.items.insert(0, summary);
    }

    pub fn contains(&self, chat_id: &str) -> bool {
        self.items.iter().any(|c| c.chat_id == chat_id)
    }

    /// Retitle a chat in place, returning the previous title so a failed
    /// remote commit can apply the compensating rename.
    ///
    /// Returns `None` if no chat with `chat_id` exists.
    pub fn rename(&mut self, chat_id: &str, new_title: &str) -> Option<String> {
        let item = self.items.iter_mut().find(|c| c.chat_id == chat_id)?;
        Some(std::mem::replace(&mut item.title, new_title.to_owned()))
    }

    /// Whether the "No chats yet" placeholder should be shown. An empty list
    /// counts only once the initial fetch has finished.
    pub fn show_placeholder(&self) -> bool {
        self.loaded && self.items.is_empty()
    }
}
