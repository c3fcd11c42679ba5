//! Sidebar with the new-chat button and the stored chat history list.

use leptos::prelude::*;

use crate::components::chat_item::ChatItem;
use crate::state::chats::ChatListState;

/// Chat history sidebar. Fetches the stored list once on mount; shows a
/// placeholder once the fetch has finished and no chats exist.
#[component]
pub fn ChatSidebar(on_new_chat: Callback<()>) -> impl IntoView {
    let chats = expect_context::<RwSignal<ChatListState>>();

    // Populate the list once on mount; the server owns ordering.
    Effect::new(move || {
        if chats.get_untracked().loaded {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_chat_list().await {
                Some(items) => chats.update(|c| {
                    c.items = items;
                    c.loaded = true;
                }),
                None => {
                    leptos::logging::warn!("chat list fetch failed");
                    chats.update(|c| c.loaded = true);
                }
            }
        });
    });

    view! {
        <aside class="chat-sidebar">
            <button class="btn btn--primary chat-sidebar__new" on:click=move |_| on_new_chat.run(())>
                "+ New Chat"
            </button>

            <div class="chat-sidebar__history">
                {move || {
                    let state = chats.get();
                    if state.show_placeholder() {
                        return view! {
                            <div class="chat-sidebar__empty">"No chats yet"</div>
                        }
                            .into_any();
                    }

                    state
                        .items
                        .iter()
                        .map(|c| {
                            view! { <ChatItem chat_id=c.chat_id.clone() title=c.title.clone()/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </aside>
    }
}
