//! Personality Insights v3 types.

use serde::{Deserialize, Serialize};

use crate::validate::Presence;

/// Content submitted to `profile`. The variant picks the request `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileContent {
    /// Structured content items, sent as JSON.
    Json(Content),
    /// Plain text.
    Text(String),
    /// HTML; markup is stripped by the service.
    Html(String),
}

impl ProfileContent {
    /// The content type matching this input.
    pub fn content_type(&self) -> &'static str {
        match self {
            ProfileContent::Json(_) => "application/json",
            ProfileContent::Text(_) => "text/plain",
            ProfileContent::Html(_) => "text/html",
        }
    }
}

impl Presence for ProfileContent {
    fn is_present(&self) -> bool {
        match self {
            ProfileContent::Json(_) => true,
            ProfileContent::Text(text) | ProfileContent::Html(text) => !text.is_empty(),
        }
    }
}

/// A set of content items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Items to analyze together.
    pub content_items: Vec<ContentItem>,
}

/// One piece of content, such as a post or a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// The text.
    pub content: String,
    /// Unique id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation time in milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Update time in milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    /// `text/plain` or `text/html`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contenttype: Option<String>,
    /// Language of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Id of the parent item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentid: Option<String>,
    /// Whether the item is a reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<bool>,
    /// Whether the item was forwarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
}

/// Parameters for `profile` and `profile_as_csv`.
#[derive(Debug, Clone, Default)]
pub struct ProfileParams {
    /// Content to analyze.
    pub content: Option<ProfileContent>,
    /// Include raw scores.
    pub raw_scores: Option<bool>,
    /// Include a CSV header row (CSV output only).
    pub csv_headers: Option<bool>,
    /// Include consumption preferences.
    pub consumption_preferences: Option<bool>,
    /// Language of the input.
    pub content_language: Option<String>,
    /// Language of the response.
    pub accept_language: Option<String>,
}

impl ProfileParams {
    /// Profile plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Some(ProfileContent::Text(text.into())),
            ..Self::default()
        }
    }

    /// Profile structured content items.
    pub fn content(content: Content) -> Self {
        Self {
            content: Some(ProfileContent::Json(content)),
            ..Self::default()
        }
    }
}

/// Parameters for `profile_as_csv`.
pub type ProfileAsCsvParams = ProfileParams;

/// Result of `profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Language model used.
    pub processed_language: String,
    /// Words in the input.
    pub word_count: u64,
    /// Note about the word count.
    pub word_count_message: Option<String>,
    /// Big Five traits.
    pub personality: Vec<Trait>,
    /// Needs.
    pub needs: Vec<Trait>,
    /// Values.
    pub values: Vec<Trait>,
    /// Temporal behavior, for timestamped JSON content.
    pub behavior: Vec<Behavior>,
    /// Consumption preferences, when requested.
    pub consumption_preferences: Vec<ConsumptionPreferencesCategory>,
    /// Warnings about the input.
    pub warnings: Vec<Warning>,
}

/// A personality characteristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trait {
    /// Trait id.
    pub trait_id: String,
    /// Display name.
    pub name: String,
    /// `personality`, `needs` or `values`.
    pub category: String,
    /// Normalized percentile.
    pub percentile: f64,
    /// Raw score, when requested.
    pub raw_score: Option<f64>,
    /// Whether the characteristic is meaningful for the input language.
    pub significant: Option<bool>,
    /// Facets.
    pub children: Vec<Trait>,
}

/// Share of content created at a given time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    /// Behavior id.
    pub trait_id: String,
    /// Display name.
    pub name: String,
    /// Always `behavior`.
    pub category: String,
    /// Share of content.
    pub percentage: f64,
}

/// One consumption preference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionPreferences {
    /// Preference id.
    pub consumption_preference_id: String,
    /// Display name.
    pub name: String,
    /// `0.0`, `0.5` or `1.0`.
    pub score: f64,
}

/// A category of consumption preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionPreferencesCategory {
    /// Category id.
    pub consumption_preference_category_id: String,
    /// Display name.
    pub name: String,
    /// Preferences.
    pub consumption_preferences: Vec<ConsumptionPreferences>,
}

/// A warning about the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Warning {
    /// Warning id.
    pub warning_id: String,
    /// Message.
    pub message: String,
}
