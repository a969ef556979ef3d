//! Assistant v2: session-based conversations.
//!
//! Sessions are plain identifiers. The client keeps no conversation state; callers thread
//! the session id (and, if they want, the returned context) through each `message` call.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::RequestDescriptor;
use crate::response::Empty;
use crate::service::{Service, ServiceCore};
use crate::types::assistant::{
    CreateSessionParams, DeleteSessionParams, MessageContext, MessageInput, MessageParams,
    MessageResponse, SessionResponse,
};
use crate::validate::require;

const NAME: &str = "conversation";
const JSON: &str = "application/json";

/// Client for the Assistant v2 API.
#[derive(Debug, Clone)]
pub struct AssistantV2 {
    core: ServiceCore,
}

impl Service for AssistantV2 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v2";
    const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/assistant/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct MessageBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<MessageContext>,
}

impl AssistantV2 {
    /// Create a session for an assistant.
    pub fn create_session(&self, params: CreateSessionParams) -> ServiceCall<SessionResponse> {
        self.core.json(move || {
            require!(params; assistant_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "createSession",
                Method::POST,
                "/v2/assistants/{assistant_id}/sessions",
            )
            .path_param("assistant_id", params.assistant_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// End a session before it times out.
    pub fn delete_session(&self, params: DeleteSessionParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; assistant_id, session_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteSession",
                Method::DELETE,
                "/v2/assistants/{assistant_id}/sessions/{session_id}",
            )
            .path_param("assistant_id", params.assistant_id)
            .path_param("session_id", params.session_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Send user input to a session and get the assistant's response.
    pub fn message(&self, params: MessageParams) -> ServiceCall<MessageResponse> {
        self.core.json(move || {
            require!(params; assistant_id, session_id)?;
            let body = MessageBody {
                input: params.input,
                context: params.context,
            };
            Ok(RequestDescriptor::new(
                NAME,
                "message",
                Method::POST,
                "/v2/assistants/{assistant_id}/sessions/{session_id}/message",
            )
            .path_param("assistant_id", params.assistant_id)
            .path_param("session_id", params.session_id)
            .json(&body)?
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(JSON)),
            ])?))
        })
    }
}
