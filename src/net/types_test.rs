use super::*;

#[test]
fn send_response_parses_without_optional_fields() {
    let data: SendMessageResponse =
        serde_json::from_str(r#"{"response":"Use neem oil."}"#).expect("parse");
    assert_eq!(data.response, "Use neem oil.");
    assert!(data.new_chat.is_none());
    assert!(data.error.is_none());
}

#[test]
fn send_response_parses_new_chat_summary() {
    let data: SendMessageResponse = serde_json::from_str(
        r#"{"response":"ok","new_chat":{"chat_id":"c42","title":"Aphid treatment"}}"#,
    )
    .expect("parse");
    let new_chat = data.new_chat.expect("new chat");
    assert_eq!(new_chat.chat_id, "c42");
    assert_eq!(new_chat.title, "Aphid treatment");
}

#[test]
fn send_response_carries_backend_error() {
    let data: SendMessageResponse =
        serde_json::from_str(r#"{"error":"model unavailable"}"#).expect("parse");
    assert_eq!(data.error.as_deref(), Some("model unavailable"));
    assert!(data.response.is_empty());
}

#[test]
fn load_response_parses_messages_in_order() {
    let data: LoadChatResponse = serde_json::from_str(
        r#"{"messages":[{"sender":"user","message":"hi"},{"sender":"bot","message":"hello"}]}"#,
    )
    .expect("parse");
    assert_eq!(
        data.messages,
        vec![
            HistoryMessage {
                sender: "user".to_owned(),
                message: "hi".to_owned(),
            },
            HistoryMessage {
                sender: "bot".to_owned(),
                message: "hello".to_owned(),
            },
        ]
    );
    assert!(data.error.is_none());
}

#[test]
fn load_response_defaults_to_no_messages() {
    let data: LoadChatResponse =
        serde_json::from_str(r#"{"error":"chat not found"}"#).expect("parse");
    assert!(data.messages.is_empty());
    assert_eq!(data.error.as_deref(), Some("chat not found"));
}

#[test]
fn request_bodies_serialize_expected_fields() {
    let body = serde_json::to_value(RenameChatRequest {
        chat_id: "c1".to_owned(),
        new_title: "Pest control".to_owned(),
    })
    .expect("serialize");
    assert_eq!(
        body,
        serde_json::json!({"chat_id":"c1","new_title":"Pest control"})
    );

    let body = serde_json::to_value(SendMessageRequest {
        message: "How do I treat aphids?".to_owned(),
    })
    .expect("serialize");
    assert_eq!(body, serde_json::json!({"message":"How do I treat aphids?"}));
}
