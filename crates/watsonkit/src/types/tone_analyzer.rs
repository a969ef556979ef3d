//! Tone Analyzer v3 types.

use serde::{Deserialize, Serialize};

use crate::validate::Presence;

/// Content submitted to `tone`. The variant picks the request `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneInput {
    /// A JSON `{"text": …}` document.
    Json {
        /// Text to analyze.
        text: String,
    },
    /// Plain text.
    Text(String),
    /// HTML; markup is stripped by the service.
    Html(String),
}

impl ToneInput {
    /// The content type matching this input.
    pub fn content_type(&self) -> &'static str {
        match self {
            ToneInput::Json { .. } => "application/json",
            ToneInput::Text(_) => "text/plain",
            ToneInput::Html(_) => "text/html",
        }
    }
}

impl Presence for ToneInput {
    fn is_present(&self) -> bool {
        match self {
            ToneInput::Json { .. } => true,
            ToneInput::Text(text) | ToneInput::Html(text) => !text.is_empty(),
        }
    }
}

/// Tones that `tone` can be limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneKind {
    /// Emotional tones.
    Emotion,
    /// Language tones.
    Language,
    /// Social tones.
    Social,
}

impl std::fmt::Display for ToneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ToneKind::Emotion => "emotion",
            ToneKind::Language => "language",
            ToneKind::Social => "social",
        })
    }
}

/// Parameters for `tone`.
#[derive(Debug, Clone, Default)]
pub struct ToneParams {
    /// Content to analyze.
    pub tone_input: Option<ToneInput>,
    /// Set `false` to skip sentence-level analysis.
    pub sentences: Option<bool>,
    /// Tones to return. Sent as repeated `tones` keys.
    pub tones: Vec<ToneKind>,
    /// Language of the input, e.g. `en` or `fr`.
    pub content_language: Option<String>,
    /// Language of the response, e.g. `en` or `ja`.
    pub accept_language: Option<String>,
}

impl ToneParams {
    /// Analyze plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            tone_input: Some(ToneInput::Text(text.into())),
            ..Self::default()
        }
    }

    /// Analyze text sent as a JSON document.
    pub fn json(text: impl Into<String>) -> Self {
        Self {
            tone_input: Some(ToneInput::Json { text: text.into() }),
            ..Self::default()
        }
    }

    /// Analyze HTML.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            tone_input: Some(ToneInput::Html(html.into())),
            ..Self::default()
        }
    }
}

/// One utterance of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// What was said.
    pub text: String,
    /// Who said it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Parameters for `tone_chat`.
#[derive(Debug, Clone, Default)]
pub struct ToneChatParams {
    /// Utterances to analyze, at most 50.
    pub utterances: Vec<Utterance>,
    /// Language of the input.
    pub content_language: Option<String>,
    /// Language of the response.
    pub accept_language: Option<String>,
}

/// A tone and its score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneScore {
    /// Score between 0 and 1.
    pub score: f64,
    /// Tone id, e.g. `joy`.
    pub tone_id: String,
    /// Display name.
    pub tone_name: String,
}

/// Tones of one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneCategory {
    /// Tones.
    pub tones: Vec<ToneScore>,
    /// Category id.
    pub category_id: String,
    /// Category name.
    pub category_name: String,
}

/// Document-level analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentAnalysis {
    /// Tones, for `2017-09-21` and later versions.
    pub tones: Vec<ToneScore>,
    /// Tone categories, for earlier versions.
    pub tone_categories: Vec<ToneCategory>,
    /// Warning about the input.
    pub warning: Option<String>,
}

/// Sentence-level analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceAnalysis {
    /// Sentence index.
    pub sentence_id: u64,
    /// Sentence text.
    pub text: String,
    /// Tones.
    pub tones: Vec<ToneScore>,
    /// Tone categories.
    pub tone_categories: Vec<ToneCategory>,
    /// Start offset in the input.
    pub input_from: Option<u64>,
    /// End offset in the input.
    pub input_to: Option<u64>,
}

/// Result of `tone`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneAnalysis {
    /// Whole-document tones.
    pub document_tone: DocumentAnalysis,
    /// Per-sentence tones.
    pub sentences_tone: Vec<SentenceAnalysis>,
}

/// A customer-engagement tone and its score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneChatScore {
    /// Score between 0.5 and 1.
    pub score: f64,
    /// Tone id, e.g. `polite`.
    pub tone_id: String,
    /// Display name.
    pub tone_name: String,
}

/// Analysis of one utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtteranceAnalysis {
    /// Utterance index.
    pub utterance_id: u64,
    /// Utterance text.
    pub utterance_text: String,
    /// Tones.
    pub tones: Vec<ToneChatScore>,
    /// Error for this utterance, if any.
    pub error: Option<String>,
}

/// Result of `tone_chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtteranceAnalyses {
    /// One analysis per utterance.
    pub utterances_tone: Vec<UtteranceAnalysis>,
    /// Warning about the input.
    pub warning: Option<String>,
}
