//! REST API helpers for communicating with the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! request degrades UI behavior without crashing hydration. A response body
//! whose `error` field is set surfaces as the `Err` string.

#![allow(clippy::unused_async)]

use super::types::{HistoryMessage, SendMessageResponse};
use crate::state::chats::ChatSummary;

/// Fetch the stored chat list from `GET /chat-list`, newest first.
/// Returns `None` on failure or on the server.
pub async fn fetch_chat_list() -> Option<Vec<ChatSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/chat-list")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ChatSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ask the backend to start a fresh session via `POST /new-chat`.
/// The response body and status are ignored.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent.
pub async fn start_new_chat() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::post("/new-chat")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send a user message via `POST /get-response` and return the bot's reply.
///
/// # Errors
///
/// Fails on transport errors, an unparseable body, or a body whose `error`
/// field is set.
pub async fn send_message(message: &str) -> Result<SendMessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::SendMessageRequest;

        let body = SendMessageRequest {
            message: message.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/get-response")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let mut data: SendMessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        if let Some(err) = data.error.take() {
            return Err(err);
        }
        Ok(data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}

/// Fetch a chat's stored messages via `GET /load-chat/{chat_id}`.
///
/// # Errors
///
/// Fails on transport errors, an unparseable body, or a body whose `error`
/// field is set.
pub async fn load_chat(chat_id: &str) -> Result<Vec<HistoryMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::LoadChatResponse;

        let url = format!("/load-chat/{chat_id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let mut data: LoadChatResponse = resp.json().await.map_err(|e| e.to_string())?;
        if let Some(err) = data.error.take() {
            return Err(err);
        }
        Ok(data.messages)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chat_id;
        Err("not available on server".to_owned())
    }
}

/// Tell the backend which chat the user is viewing via
/// `POST /set-active-chat`. The response is ignored.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent.
pub async fn set_active_chat(chat_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::SetActiveChatRequest;

        let body = SetActiveChatRequest {
            chat_id: chat_id.to_owned(),
        };
        gloo_net::http::Request::post("/set-active-chat")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chat_id;
        Err("not available on server".to_owned())
    }
}

/// Persist a chat's new title via `POST /rename-chat`. A non-2xx status is
/// a failure; the body is ignored.
///
/// # Errors
///
/// Returns an error string on transport errors or a non-success status.
pub async fn rename_chat(chat_id: &str, new_title: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::RenameChatRequest;

        let body = RenameChatRequest {
            chat_id: chat_id.to_owned(),
            new_title: new_title.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/rename-chat")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("rename rejected: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat_id, new_title);
        Err("not available on server".to_owned())
    }
}
