//! One sidebar chat entry: clickable title, active marker, inline rename.

use leptos::prelude::*;

use crate::state::chats::ChatListState;
use crate::state::messages::MessagesState;
use crate::state::rename::{RenameEdit, SaveDecision};
use crate::state::session::SessionState;

/// Line appended to the message box when loading a stored chat fails.
const LOAD_ERROR_TEXT: &str = "Error: Could not load chat history.";

/// A chat-history entry. Clicking the item loads that chat into the message
/// box; the pencil affordance switches the title to an inline editor.
///
/// Rename is optimistic: the new title shows immediately and a failed
/// persist applies the compensating rename back, plus a blocking alert.
#[component]
pub fn ChatItem(chat_id: String, title: String) -> impl IntoView {
    let chats = expect_context::<RwSignal<ChatListState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let editing = RwSignal::new(None::<RenameEdit>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_active = {
        let chat_id = chat_id.clone();
        move || session.get().is_active(&chat_id)
    };

    // Focus and select the input when an edit begins.
    Effect::new(move || {
        if editing.get().is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
            el.select();
        }
    });

    let do_load = {
        let chat_id = chat_id.clone();
        move || {
            let chat_id = chat_id.clone();
            if !chats.get_untracked().contains(&chat_id) {
                leptos::logging::warn!("load requested for unknown chat {chat_id}");
                messages.update(|m| m.push_bot(LOAD_ERROR_TEXT));
                return;
            }

            let mut token = 0;
            session.update(|s| token = s.begin_load(chat_id.clone()));

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::load_chat(&chat_id).await {
                    Ok(history) => {
                        if !session.get_untracked().is_current(token) {
                            return;
                        }
                        messages.update(|m| m.replace_with_history(&history));

                        // Fire-and-forget; a failure here lands in the same
                        // generic error line as a failed load.
                        if let Err(e) = crate::net::api::set_active_chat(&chat_id).await {
                            leptos::logging::warn!("set-active-chat failed: {e}");
                            messages.update(|m| m.push_bot(LOAD_ERROR_TEXT));
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("chat load failed: {e}");
                        if session.get_untracked().is_current(token) {
                            messages.update(|m| m.push_bot(LOAD_ERROR_TEXT));
                        }
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (chat_id, token);
        }
    };

    let start_edit = {
        let chat_id = chat_id.clone();
        let title = title.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            editing.set(Some(RenameEdit::begin(chat_id.clone(), title.clone())));
        }
    };

    let finish_edit = move || {
        let mut taken = None;
        editing.update(|slot| taken = slot.take());
        let Some(mut edit) = taken else {
            return;
        };

        // The input is uncontrolled; read the draft back at save time.
        if let Some(value) = current_input_value(input_ref) {
            edit.draft = value;
        }

        match edit.decision() {
            SaveDecision::Cancel => {}
            SaveDecision::Commit { new_title } => {
                let chat_id = edit.chat_id;
                let mut previous = None;
                chats.update(|c| previous = c.rename(&chat_id, &new_title));
                let Some(previous) = previous else {
                    return;
                };

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::rename_chat(&chat_id, &new_title).await {
                        leptos::logging::warn!("chat rename failed: {e}");
                        chats.update(|c| {
                            c.rename(&chat_id, &previous);
                        });
                        alert_rename_failed();
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (chat_id, new_title, previous);
            }
        }
    };

    let on_edit_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            finish_edit();
        }
        if ev.key() == "Escape" {
            editing.set(None);
        }
    };

    let display_title = title.clone();

    view! {
        <div class="chat-item" class:chat-item--active=is_active on:click=move |_| do_load()>
            <div class="chat-item__title-wrapper">
                {move || match editing.get() {
                    Some(edit) => {
                        view! {
                            <input
                                class="chat-item__title-input"
                                type="text"
                                node_ref=input_ref
                                value=edit.draft
                                on:keydown=on_edit_keydown
                                on:blur=move |_| finish_edit()
                                on:click=move |ev| ev.stop_propagation()
                            />
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <span class="chat-item__title">{display_title.clone()}</span>
                        }
                            .into_any()
                    }
                }}
            </div>
            <button class="chat-item__edit" on:click=start_edit title="Rename chat">
                "\u{270F}\u{FE0F}"
            </button>
        </div>
    }
}

/// Current text of the rename input, if it is mounted.
fn current_input_value(input_ref: NodeRef<leptos::html::Input>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        input_ref.get_untracked().map(|el| el.value())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_ref;
        None
    }
}

/// Blocking failure notice for a rename that did not persist.
#[cfg(feature = "hydrate")]
fn alert_rename_failed() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Could not rename chat.");
    }
}
