//! Assistant v2 types.
//!
//! Message input and context travel in both directions, so they serialize and deserialize.
//! Absent optional fields are left out of requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for `create_session`.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionParams {
    /// Assistant id.
    pub assistant_id: String,
}

impl CreateSessionParams {
    /// Create params for an assistant.
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
        }
    }
}

/// Parameters for `delete_session`.
#[derive(Debug, Clone, Default)]
pub struct DeleteSessionParams {
    /// Assistant id.
    pub assistant_id: String,
    /// Session id.
    pub session_id: String,
}

/// Parameters for `message`.
#[derive(Debug, Clone, Default)]
pub struct MessageParams {
    /// Assistant id.
    pub assistant_id: String,
    /// Session id, from `create_session`.
    pub session_id: String,
    /// User input.
    pub input: Option<MessageInput>,
    /// Context state carried between turns.
    pub context: Option<MessageContext>,
}

impl MessageParams {
    /// Send `text` to a session.
    pub fn text(
        assistant_id: impl Into<String>,
        session_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            session_id: session_id.into(),
            input: Some(MessageInput {
                message_type: Some("text".to_string()),
                text: Some(text.into()),
                ..MessageInput::default()
            }),
            context: None,
        }
    }
}

/// User input to the assistant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageInput {
    /// Input type; only `text` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    /// The user's text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Processing options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageInputOptions>,
    /// Intents to use instead of classifying the input.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<RuntimeIntent>,
    /// Entities to use instead of detecting them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<RuntimeEntity>,
    /// Id of a suggestion the user selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_id: Option<String>,
}

/// Options that control message processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageInputOptions {
    /// Include debug output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Restart the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    /// Return more than the top intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    /// Return session context with the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_context: Option<bool>,
}

/// State carried across turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContext {
    /// Context shared by all skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<MessageContextGlobal>,
    /// Per-skill context keyed by skill name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub skills: BTreeMap<String, MessageContextSkill>,
}

/// Global context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContextGlobal {
    /// Built-in system properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextGlobalSystem>,
}

/// Built-in global system properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContextGlobalSystem {
    /// User time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// User id used for billing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Turns so far in the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_count: Option<u64>,
}

/// Context of one skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContextSkill {
    /// Arbitrary application variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<Value>,
}

/// An intent recognized in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeIntent {
    /// Intent name.
    pub intent: String,
    /// Confidence between 0 and 1.
    pub confidence: f64,
}

/// An entity value found in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeEntity {
    /// Entity name.
    pub entity: String,
    /// Start and end offsets in the input text.
    pub location: Vec<u64>,
    /// Entity value.
    pub value: String,
    /// Detection confidence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Entity metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Captured pattern groups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CaptureGroup>,
}

/// A captured pattern group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureGroup {
    /// Group pattern.
    pub group: String,
    /// Start and end offsets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<u64>,
}

/// Result of `create_session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionResponse {
    /// The new session id.
    pub session_id: String,
}

/// Result of `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    /// Assistant output.
    pub output: MessageOutput,
    /// Updated context, present when `return_context` was set.
    pub context: Option<MessageContext>,
}

/// Assistant output for one turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOutput {
    /// Responses to show the user.
    pub generic: Vec<RuntimeResponseGeneric>,
    /// Recognized intents.
    pub intents: Vec<RuntimeIntent>,
    /// Recognized entities.
    pub entities: Vec<RuntimeEntity>,
    /// Client actions requested by the dialog.
    pub actions: Vec<Value>,
    /// Debug information.
    pub debug: Option<Value>,
    /// Arbitrary output variables.
    pub user_defined: Option<Value>,
}

impl MessageOutput {
    /// Text of every `text` response, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.generic
            .iter()
            .filter(|r| r.response_type == "text")
            .filter_map(|r| r.text.as_deref())
    }
}

/// One response item. Fields present depend on `response_type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeResponseGeneric {
    /// `text`, `pause`, `image`, `option`, `connect_to_agent`, `suggestion` or `search`.
    pub response_type: String,
    /// Text to show.
    pub text: Option<String>,
    /// Pause length in milliseconds.
    pub time: Option<u64>,
    /// Show a typing indicator during the pause.
    pub typing: Option<bool>,
    /// Image URL.
    pub source: Option<String>,
    /// Title for image or option responses.
    pub title: Option<String>,
    /// Description for image or option responses.
    pub description: Option<String>,
    /// `dropdown` or `button`.
    pub preference: Option<String>,
    /// Options to choose from.
    pub options: Vec<Value>,
    /// Message for a human agent.
    pub message_to_human_agent: Option<String>,
    /// Topic of an agent handoff.
    pub topic: Option<String>,
    /// Disambiguation suggestions.
    pub suggestions: Vec<Value>,
    /// Header for search results.
    pub header: Option<String>,
    /// Search skill results.
    pub results: Vec<Value>,
}
