//! Language Translator v3 types.

use serde::{Deserialize, Serialize};

use crate::request::FilePart;

/// Parameters for `translate`.
#[derive(Debug, Clone, Default)]
pub struct TranslateParams {
    /// Input text, one translation per entry.
    pub text: Vec<String>,
    /// Model to use; alternatively give `source` and `target`.
    pub model_id: Option<String>,
    /// Source language code.
    pub source: Option<String>,
    /// Target language code.
    pub target: Option<String>,
}

impl TranslateParams {
    /// Translate `text` between two languages.
    pub fn new(text: impl Into<String>, source: &str, target: &str) -> Self {
        Self {
            text: vec![text.into()],
            model_id: None,
            source: Some(source.to_string()),
            target: Some(target.to_string()),
        }
    }

    /// Translate `text` with a specific model.
    pub fn with_model(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: vec![text.into()],
            model_id: Some(model_id.into()),
            ..Self::default()
        }
    }
}

/// Parameters for `list_identifiable_languages`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListIdentifiableLanguagesParams {}

/// Parameters for `identify`.
#[derive(Debug, Clone, Default)]
pub struct IdentifyParams {
    /// Text to identify, sent as plain text.
    pub text: String,
}

/// Parameters for `list_models`.
#[derive(Debug, Clone, Default)]
pub struct ListModelsParams {
    /// Filter by source language.
    pub source: Option<String>,
    /// Filter by target language.
    pub target: Option<String>,
    /// Only default models (`true`) or only non-default ones (`false`). Sent as `default`.
    pub default_models: Option<bool>,
}

/// Parameters for `create_model`.
#[derive(Debug, Clone, Default)]
pub struct CreateModelParams {
    /// Model to customize.
    pub base_model_id: String,
    /// TMX file of terms that must be translated a fixed way.
    pub forced_glossary: Option<FilePart>,
    /// TMX file of parallel sentences.
    pub parallel_corpus: Option<FilePart>,
    /// Name for the new model.
    pub name: Option<String>,
}

/// Parameters for `get_model` and `delete_model`.
#[derive(Debug, Clone, Default)]
pub struct ModelIdParams {
    /// Model id.
    pub model_id: String,
}

/// Parameters for `get_model`.
pub type GetModelParams = ModelIdParams;
/// Parameters for `delete_model`.
pub type DeleteModelParams = ModelIdParams;

/// Parameters for `list_documents`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsParams {}

/// Parameters for `translate_document`.
#[derive(Debug, Clone, Default)]
pub struct TranslateDocumentParams {
    /// The document.
    pub file: Option<FilePart>,
    /// Filename of the document; the service uses the extension to pick a parser.
    pub filename: String,
    /// Content type of `file`.
    pub file_content_type: Option<String>,
    /// Model to use.
    pub model_id: Option<String>,
    /// Source language code.
    pub source: Option<String>,
    /// Target language code.
    pub target: Option<String>,
    /// Id of a previously submitted document to reuse.
    pub document_id: Option<String>,
}

/// Parameters for `get_document_status`, `delete_document` and `get_translated_document`.
#[derive(Debug, Clone, Default)]
pub struct DocumentIdParams {
    /// Document id.
    pub document_id: String,
}

/// Parameters for `get_document_status`.
pub type GetDocumentStatusParams = DocumentIdParams;
/// Parameters for `delete_document`.
pub type DeleteDocumentParams = DocumentIdParams;

/// Parameters for `get_translated_document`.
#[derive(Debug, Clone, Default)]
pub struct GetTranslatedDocumentParams {
    /// Document id.
    pub document_id: String,
    /// Accepted content type of the result, e.g. `application/pdf`.
    pub accept: Option<String>,
}

/// Result of `translate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationResult {
    /// Words in the input.
    pub word_count: u64,
    /// Characters in the input.
    pub character_count: u64,
    /// One translation per input string.
    pub translations: Vec<Translation>,
}

/// One translated string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// The translation.
    pub translation: String,
}

/// A language the service can identify.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifiableLanguage {
    /// Language code.
    pub language: String,
    /// Language name.
    pub name: String,
}

/// Result of `list_identifiable_languages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifiableLanguages {
    /// Languages.
    pub languages: Vec<IdentifiableLanguage>,
}

/// A candidate language for identified text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifiedLanguage {
    /// Language code.
    pub language: String,
    /// Confidence between 0 and 1.
    pub confidence: f64,
}

/// Result of `identify`, most likely language first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifiedLanguages {
    /// Candidates.
    pub languages: Vec<IdentifiedLanguage>,
}

/// A translation model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationModel {
    /// Model id.
    pub model_id: String,
    /// Model name.
    pub name: Option<String>,
    /// Source language.
    pub source: Option<String>,
    /// Target language.
    pub target: Option<String>,
    /// Base model of a custom model.
    pub base_model_id: Option<String>,
    /// Domain.
    pub domain: Option<String>,
    /// Whether the model can be customized.
    pub customizable: Option<bool>,
    /// Whether this is the default model for its language pair.
    pub default_model: Option<bool>,
    /// Owner of a custom model.
    pub owner: Option<String>,
    /// Training status.
    pub status: Option<String>,
}

/// Result of `list_models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationModels {
    /// Models.
    pub models: Vec<TranslationModel>,
}

/// Result of `delete_model`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteModelResult {
    /// `OK` on success.
    pub status: String,
}

/// Status of a submitted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStatus {
    /// Document id.
    pub document_id: String,
    /// Filename.
    pub filename: String,
    /// `processing`, `available` or `failed`.
    pub status: String,
    /// Model used.
    pub model_id: String,
    /// Base model of a custom model.
    pub base_model_id: Option<String>,
    /// Source language.
    pub source: String,
    /// Target language.
    pub target: String,
    /// Submission timestamp.
    pub created: String,
    /// Completion timestamp.
    pub completed: Option<String>,
    /// Words translated.
    pub word_count: Option<u64>,
    /// Characters translated.
    pub character_count: Option<u64>,
}

/// Result of `list_documents`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentList {
    /// Documents.
    pub documents: Vec<DocumentStatus>,
}
