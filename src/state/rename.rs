#[cfg(test)]
#[path = "rename_test.rs"]
mod rename_test;

/// An in-progress title edit for one chat-list item.
///
/// The edit lives in an `Option` slot on the item; finishing the edit takes
/// it out of the slot, so a second finish (Enter followed by the blur it
/// causes) is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameEdit {
    pub chat_id: String,
    pub original: String,
    pub draft: String,
}

/// What a finished edit should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveDecision {
    /// Leave the title as it was; no network call.
    Cancel,
    /// Show `new_title` immediately and persist it.
    Commit { new_title: String },
}

impl RenameEdit {
    /// Start editing with the draft pre-filled from the current title.
    pub fn begin(chat_id: String, current_title: String) -> Self {
        Self {
            chat_id,
            draft: current_title.clone(),
            original: current_title,
        }
    }

    /// Save policy: a trimmed draft that is empty or unchanged cancels.
    pub fn decision(&self) -> SaveDecision {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() || trimmed == self.original {
            SaveDecision::Cancel
        } else {
            SaveDecision::Commit {
                new_title: trimmed.to_owned(),
            }
        }
    }
}
