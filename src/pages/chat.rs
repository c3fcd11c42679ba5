//! Chat page: history sidebar plus the active conversation.

use leptos::prelude::*;

use crate::components::chat_box::ChatBox;
use crate::components::chat_sidebar::ChatSidebar;
use crate::state::messages::MessagesState;
use crate::state::session::SessionState;

/// Main (only) page: chat history sidebar and the message box.
///
/// Owns the composer draft so the new-chat flow can clear it along with the
/// message box and the active marker.
#[component]
pub fn ChatPage() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let input = RwSignal::new(String::new());

    let on_new_chat = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // No user-visible failure for this flow; the console gets the details.
            if let Err(e) = crate::net::api::start_new_chat().await {
                leptos::logging::warn!("new chat failed: {e}");
                return;
            }
            messages.update(MessagesState::reset);
            input.set(String::new());
            session.update(SessionState::clear_active);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (messages, session, input);
    });

    view! {
        <div class="chat-page">
            <ChatSidebar on_new_chat=on_new_chat/>
            <ChatBox input=input/>
        </div>
    }
}
