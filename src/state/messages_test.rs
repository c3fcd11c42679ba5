use super::*;

fn history(sender: &str, message: &str) -> HistoryMessage {
    HistoryMessage {
        sender: sender.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn starts_with_the_welcome_line() {
    let m = MessagesState::default();
    assert_eq!(m.lines.len(), 1);
    assert_eq!(m.lines[0].sender, Sender::Bot);
    assert_eq!(m.lines[0].text, WELCOME_TEXT);
}

#[test]
fn outgoing_text_rejects_whitespace_only_drafts() {
    assert_eq!(outgoing_text(""), None);
    assert_eq!(outgoing_text("   \n\t"), None);
}

#[test]
fn outgoing_text_trims_the_draft() {
    assert_eq!(
        outgoing_text("  How do I treat aphids?  ").as_deref(),
        Some("How do I treat aphids?")
    );
}

#[test]
fn send_flow_appends_user_then_bot() {
    let mut m = MessagesState::default();
    m.push_user("How do I treat aphids?");
    m.push_bot("Use neem oil weekly.");

    assert_eq!(m.lines.len(), 3);
    assert_eq!(
        m.lines[1],
        ChatLine {
            sender: Sender::User,
            text: "How do I treat aphids?".to_owned(),
        }
    );
    assert_eq!(
        m.lines[2],
        ChatLine {
            sender: Sender::Bot,
            text: "Use neem oil weekly.".to_owned(),
        }
    );
}

#[test]
fn reset_returns_to_the_single_welcome_line() {
    let mut m = MessagesState::default();
    m.push_user("hi");
    m.push_bot("hello");

    m.reset();
    assert_eq!(m.lines.len(), 1);
    assert_eq!(m.lines[0].text, WELCOME_TEXT);
}

#[test]
fn history_replaces_lines_in_server_order() {
    let mut m = MessagesState::default();
    m.push_user("stale");

    m.replace_with_history(&[history("user", "hi"), history("bot", "hello")]);
    assert_eq!(
        m.lines,
        vec![
            ChatLine {
                sender: Sender::User,
                text: "hi".to_owned(),
            },
            ChatLine {
                sender: Sender::Bot,
                text: "hello".to_owned(),
            },
        ]
    );
}

#[test]
fn unknown_senders_render_as_bot() {
    let mut m = MessagesState::default();
    m.replace_with_history(&[history("assistant", "a"), history("system", "b")]);
    assert!(m.lines.iter().all(|l| l.sender == Sender::Bot));
}
