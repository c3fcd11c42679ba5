use super::*;

fn summary(id: &str, title: &str) -> ChatSummary {
    ChatSummary {
        chat_id: id.to_owned(),
        title: title.to_owned(),
    }
}

#[test]
fn defaults_show_no_placeholder_until_loaded() {
    let s = ChatListState::default();
    assert!(s.items.is_empty());
    assert!(!s.loaded);
    assert!(!s.show_placeholder());
}

#[test]
fn placeholder_only_when_loaded_and_empty() {
    let mut s = ChatListState {
        loaded: true,
        ..Default::default()
    };
    assert!(s.show_placeholder());

    s.prepend(summary("c1", "Rice fertilizer"));
    assert!(!s.show_placeholder());
}

#[test]
fn prepend_puts_newest_first_and_round_trips_title() {
    let mut s = ChatListState::default();
    s.prepend(summary("c1", "Rice fertilizer"));
    s.prepend(summary("c42", "Aphid treatment"));

    assert_eq!(s.items[0], summary("c42", "Aphid treatment"));
    assert_eq!(s.items[0].title, "Aphid treatment");
    assert_eq!(s.items[1].chat_id, "c1");
}

#[test]
fn rename_updates_title_and_returns_previous() {
    let mut s = ChatListState::default();
    s.prepend(summary("c1", "Old title"));

    let previous = s.rename("c1", "New title");
    assert_eq!(previous.as_deref(), Some("Old title"));
    assert_eq!(s.items[0].title, "New title");
    assert_eq!(s.items[0].chat_id, "c1");
}

#[test]
fn rename_unknown_chat_changes_nothing() {
    let mut s = ChatListState::default();
    s.prepend(summary("c1", "Old title"));

    assert_eq!(s.rename("c404", "New title"), None);
    assert_eq!(s.items[0].title, "Old title");
}

#[test]
fn rename_revert_restores_previous_title() {
    let mut s = ChatListState::default();
    s.prepend(summary("c1", "Old title"));

    let previous = s.rename("c1", "New title").expect("chat exists");
    s.rename("c1", &previous);
    assert_eq!(s.items[0].title, "Old title");
}

#[test]
fn contains_matches_by_id() {
    let mut s = ChatListState::default();
    s.prepend(summary("c1", "Rice fertilizer"));

    assert!(s.contains("c1"));
    assert!(!s.contains("c2"));
}
