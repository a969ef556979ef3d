//! Speech to Text v1 types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for `list_models`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListModelsParams {}

/// Parameters for `get_model`.
#[derive(Debug, Clone, Default)]
pub struct GetModelParams {
    /// Model name, e.g. `en-US_BroadbandModel`.
    pub model_id: String,
}

/// Parameters for `recognize`.
#[derive(Debug, Clone, Default)]
pub struct RecognizeParams {
    /// Audio bytes sent as the request body.
    pub audio: Vec<u8>,
    /// Audio format, e.g. `audio/flac` or `audio/l16;rate=16000`.
    pub content_type: String,
    /// Model to use, `en-US_BroadbandModel` when omitted.
    pub model: Option<String>,
    /// Custom language model to apply.
    pub customization_id: Option<String>,
    /// Custom acoustic model to apply.
    pub acoustic_customization_id: Option<String>,
    /// Weight given to the custom language model, 0 to 1.
    pub customization_weight: Option<f64>,
    /// Seconds of silence after which the connection closes.
    pub inactivity_timeout: Option<i64>,
    /// Keywords to spot. Sent comma separated.
    pub keywords: Vec<String>,
    /// Confidence a keyword match needs, 0 to 1. Required with `keywords`.
    pub keywords_threshold: Option<f64>,
    /// Maximum number of alternative transcripts.
    pub max_alternatives: Option<u32>,
    /// Confidence a word alternative needs, 0 to 1.
    pub word_alternatives_threshold: Option<f64>,
    pub word_confidence: Option<bool>,
    pub timestamps: Option<bool>,
    /// US English only. `true` by default.
    pub profanity_filter: Option<bool>,
    /// US English only.
    pub smart_formatting: Option<bool>,
    /// Forces `timestamps` on.
    pub speaker_labels: Option<bool>,
}

impl RecognizeParams {
    /// Transcribe `audio` in the given format.
    pub fn new(audio: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            audio: audio.into(),
            content_type: content_type.into(),
            ..Self::default()
        }
    }
}

/// Features a model supports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedFeatures {
    pub custom_language_model: bool,
    pub speaker_labels: bool,
}

/// A language model available for recognition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModel {
    pub name: String,
    pub language: String,
    /// Sampling rate in Hz.
    pub rate: u32,
    pub url: String,
    pub supported_features: SupportedFeatures,
    pub description: String,
}

/// Result of `list_models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModels {
    pub models: Vec<SpeechModel>,
}

/// One transcript hypothesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    /// Only on the best alternative of a final result.
    pub confidence: Option<f64>,
    /// `[word, start, end]` triples.
    pub timestamps: Vec<Value>,
    /// `[word, confidence]` pairs.
    pub word_confidence: Vec<Value>,
}

/// Transcription of one utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final")]
    pub is_final: bool,
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    /// Spotted keywords keyed by keyword.
    pub keywords_result: Option<Value>,
    pub word_alternatives: Vec<Value>,
}

/// Result of `recognize`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResults {
    pub results: Vec<SpeechRecognitionResult>,
    pub result_index: u32,
    pub speaker_labels: Vec<Value>,
    pub warnings: Vec<String>,
}

impl SpeechRecognitionResults {
    /// Best final transcript of each utterance, joined in order.
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .filter(|result| result.is_final)
            .filter_map(|result| result.alternatives.first())
            .map(|alternative| alternative.transcript.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
