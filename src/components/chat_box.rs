//! Message box and composer for the active conversation.

use leptos::prelude::*;

use crate::state::chats::ChatListState;
use crate::state::messages::{self, MessagesState, Sender};

/// Line appended when the backend cannot be reached or reports an error.
const SEND_ERROR_TEXT: &str = "Error: Could not reach Agri-Chatbot. Please try again.";

/// Message box showing the conversation plus the input row.
///
/// The user's line is rendered optimistically before the request goes out;
/// the backend's reply (or the fixed error line) is appended when it lands.
#[component]
pub fn ChatBox(input: RwSignal<String>) -> impl IntoView {
    let chats = expect_context::<RwSignal<ChatListState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let box_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line visible.
    Effect::new(move || {
        let _ = messages.get().lines.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = box_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(text) = messages::outgoing_text(&input.get()) else {
            return;
        };
        messages.update(|m| m.push_user(&text));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&text).await {
                Ok(reply) => {
                    if let Some(summary) = reply.new_chat {
                        chats.update(|c| c.prepend(summary));
                    }
                    messages.update(|m| m.push_bot(&reply.response));
                }
                Err(e) => {
                    leptos::logging::warn!("message send failed: {e}");
                    messages.update(|m| m.push_bot(SEND_ERROR_TEXT));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (chats, text);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="chat-area">
            <div class="chat-box" node_ref=box_ref>
                {move || {
                    messages
                        .get()
                        .lines
                        .iter()
                        .map(|line| {
                            let is_user = line.sender == Sender::User;
                            let text = line.text.clone();
                            view! {
                                <div
                                    class="chat-box__message"
                                    class:chat-box__message--user=is_user
                                    class:chat-box__message--bot=!is_user
                                >
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-box__input-row">
                <input
                    class="chat-box__input"
                    type="text"
                    placeholder="Ask about your crops..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-box__send" on:click=on_click>
                    "Send"
                </button>
            </div>
        </section>
    }
}
