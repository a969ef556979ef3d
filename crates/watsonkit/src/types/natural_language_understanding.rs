//! Natural Language Understanding v1 types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::Presence;

/// Parameters for `analyze`. One of `text`, `html` or `url` should be set.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeParams {
    /// Features to run and their options.
    pub features: Option<Features>,
    /// Plain text to analyze.
    pub text: Option<String>,
    /// HTML to analyze.
    pub html: Option<String>,
    /// Public webpage to analyze.
    pub url: Option<String>,
    /// Set to `false` to disable webpage cleaning.
    pub clean: Option<bool>,
    /// XPath query applied to `html` or `url` input.
    pub xpath: Option<String>,
    /// Use raw HTML if cleaning fails.
    pub fallback_to_raw: Option<bool>,
    /// Return the analyzed text in the result.
    pub return_analyzed_text: Option<bool>,
    /// ISO 639-1 language code, overriding detection.
    pub language: Option<String>,
    /// Maximum number of characters processed.
    pub limit_text_characters: Option<u64>,
}

impl AnalyzeParams {
    /// Analyze plain text.
    pub fn text(text: impl Into<String>, features: Features) -> Self {
        Self {
            features: Some(features),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Analyze a public webpage.
    pub fn url(url: impl Into<String>, features: Features) -> Self {
        Self {
            features: Some(features),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Analysis features. Only the features that are set are run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<LimitOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<TargetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsOptions>,
    /// Metadata takes no options; send `{}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<ModelOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRolesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<TargetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<LimitOptions>,
}

/// Any features object counts as supplied; the service reports an empty one.
impl Presence for Features {
    fn is_present(&self) -> bool {
        true
    }
}

/// Options for `concepts` and `categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitOptions {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Options for `emotion` and `sentiment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOptions {
    /// Set to `false` to hide document-level results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    /// Target phrases to score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
}

/// Options for `entities`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return mention locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<bool>,
    /// Custom model id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

/// Options for `keywords`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

/// Options for `relations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Custom model id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Options for `semantic_roles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<bool>,
}

/// Parameters for `list_models`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListModelsParams {}

/// Parameters for `delete_model`.
#[derive(Debug, Clone, Default)]
pub struct DeleteModelParams {
    /// Model id.
    pub model_id: String,
}

/// Result of `analyze`, one field per requested feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResults {
    /// Language used for the analysis.
    pub language: Option<String>,
    pub analyzed_text: Option<String>,
    pub retrieved_url: Option<String>,
    pub usage: Option<Usage>,
    pub concepts: Vec<Concept>,
    pub entities: Vec<Entity>,
    pub keywords: Vec<Keyword>,
    pub categories: Vec<Category>,
    pub emotion: Option<EmotionResult>,
    /// Webpage metadata, for `html` and `url` input.
    pub metadata: Option<Value>,
    pub relations: Vec<Value>,
    pub semantic_roles: Vec<Value>,
    pub sentiment: Option<SentimentResult>,
}

/// Usage counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub features: u32,
    pub text_characters: u64,
    pub text_units: u32,
}

/// A concept referenced by the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Concept {
    pub text: String,
    pub relevance: f64,
    pub dbpedia_resource: Option<String>,
}

/// A detected entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
    pub relevance: f64,
    pub count: Option<u32>,
    pub emotion: Option<EmotionScores>,
    pub sentiment: Option<Score>,
}

/// A keyword of the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub text: String,
    pub relevance: f64,
    pub count: Option<u32>,
    pub emotion: Option<EmotionScores>,
    pub sentiment: Option<Score>,
}

/// A category from the five-level taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Path through the taxonomy, e.g. `/technology and computing/software`.
    pub label: String,
    pub score: f64,
}

/// Emotion results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionResult {
    pub document: Option<DocumentEmotion>,
    pub targets: Vec<TargetedEmotion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentEmotion {
    pub emotion: EmotionScores,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetedEmotion {
    pub text: String,
    pub emotion: EmotionScores,
}

/// Emotion scores from 0 to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

/// Sentiment results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentResult {
    pub document: Option<DocumentSentiment>,
    pub targets: Vec<TargetedSentiment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSentiment {
    /// `positive`, `neutral` or `negative`.
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetedSentiment {
    pub text: String,
    pub score: f64,
}

/// A sentiment score from -1 to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    pub score: f64,
}

/// A custom model deployed from Knowledge Studio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub model_id: String,
    /// `available` when ready.
    pub status: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub workspace_id: Option<String>,
    pub version: Option<String>,
    pub version_description: Option<String>,
    pub created: Option<String>,
}

/// Result of `list_models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListModelsResults {
    pub models: Vec<Model>,
}

/// Result of `delete_model`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteModelResults {
    /// Id of the deleted model.
    pub deleted: String,
}
