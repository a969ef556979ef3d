//! Text to Speech v1 types.

use serde::{Deserialize, Serialize};

/// Parameters for `list_voices`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListVoicesParams {}

/// Parameters for `get_voice`.
#[derive(Debug, Clone, Default)]
pub struct GetVoiceParams {
    /// Voice name, e.g. `en-US_AllisonVoice`.
    pub voice: String,
    /// Custom voice model to describe alongside the voice.
    pub customization_id: Option<String>,
}

/// Parameters for `synthesize`.
#[derive(Debug, Clone, Default)]
pub struct SynthesizeParams {
    /// Text or SSML to speak.
    pub text: String,
    /// Audio format sent as `Accept`, e.g. `audio/wav`. The service default is Ogg Opus.
    pub accept: Option<String>,
    /// Voice to use.
    pub voice: Option<String>,
    /// Custom voice model to apply.
    pub customization_id: Option<String>,
}

impl SynthesizeParams {
    /// Speak `text` in the given audio format.
    pub fn new(text: impl Into<String>, accept: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accept: Some(accept.into()),
            ..Self::default()
        }
    }
}

/// Parameters for `get_pronunciation`.
#[derive(Debug, Clone, Default)]
pub struct GetPronunciationParams {
    /// The word to pronounce.
    pub text: String,
    /// Voice whose language is used.
    pub voice: Option<String>,
    /// Phoneme format: `ipa` or `ibm`.
    pub format: Option<String>,
    /// Custom voice model to consult.
    pub customization_id: Option<String>,
}

/// Parameters for `create_voice_model`.
#[derive(Debug, Clone, Default)]
pub struct CreateVoiceModelParams {
    /// Name of the new model.
    pub name: String,
    /// Language, `en-US` when omitted.
    pub language: Option<String>,
    /// Description of the model.
    pub description: Option<String>,
}

/// Parameters for `list_voice_models`.
#[derive(Debug, Clone, Default)]
pub struct ListVoiceModelsParams {
    /// Only models for this language.
    pub language: Option<String>,
}

/// Parameters for `update_voice_model`.
#[derive(Debug, Clone, Default)]
pub struct UpdateVoiceModelParams {
    /// Custom model id.
    pub customization_id: String,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Words to add or update.
    pub words: Vec<Word>,
}

/// Parameters for `get_voice_model`, `delete_voice_model` and `list_words`.
#[derive(Debug, Clone, Default)]
pub struct CustomizationIdParams {
    /// Custom model id.
    pub customization_id: String,
}

/// Parameters for `get_voice_model`.
pub type GetVoiceModelParams = CustomizationIdParams;
/// Parameters for `delete_voice_model`.
pub type DeleteVoiceModelParams = CustomizationIdParams;
/// Parameters for `list_words`.
pub type ListWordsParams = CustomizationIdParams;

/// Parameters for `add_words`.
#[derive(Debug, Clone, Default)]
pub struct AddWordsParams {
    /// Custom model id.
    pub customization_id: String,
    /// Words and their translations.
    pub words: Vec<Word>,
}

/// Parameters for `add_word`.
#[derive(Debug, Clone, Default)]
pub struct AddWordParams {
    /// Custom model id.
    pub customization_id: String,
    /// The word to add or update.
    pub word: String,
    /// Phonetic or sounds-like translation.
    pub translation: String,
    /// Japanese only: part of speech, e.g. `Mesi`.
    pub part_of_speech: Option<String>,
}

/// Parameters for `get_word` and `delete_word`.
#[derive(Debug, Clone, Default)]
pub struct WordParams {
    /// Custom model id.
    pub customization_id: String,
    /// The word.
    pub word: String,
}

/// Parameters for `get_word`.
pub type GetWordParams = WordParams;
/// Parameters for `delete_word`.
pub type DeleteWordParams = WordParams;

/// Parameters for `delete_user_data`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataParams {
    /// Customer id whose data is deleted.
    pub customer_id: String,
}

/// A word and its translation in a custom model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl Word {
    /// A word with a sounds-like or phonetic translation.
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            part_of_speech: None,
        }
    }
}

/// Result of `list_words`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Words {
    pub words: Vec<Word>,
}

/// Result of `get_word`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub translation: String,
    pub part_of_speech: Option<String>,
}

/// Result of `get_pronunciation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pronunciation {
    pub pronunciation: String,
}

/// Features a voice supports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedFeatures {
    pub custom_pronunciation: bool,
    pub voice_transformation: bool,
}

/// An available voice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    /// Voice identifier used in requests.
    pub name: String,
    pub url: String,
    pub gender: String,
    pub language: String,
    pub description: String,
    pub customizable: bool,
    pub supported_features: SupportedFeatures,
    /// Only set by `get_voice` with a `customization_id`.
    pub customization: Option<VoiceModel>,
}

/// Result of `list_voices`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Voices {
    pub voices: Vec<Voice>,
}

/// A custom voice model. `create_voice_model` only fills `customization_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceModel {
    pub customization_id: String,
    pub name: Option<String>,
    pub language: Option<String>,
    pub owner: Option<String>,
    pub created: Option<String>,
    pub last_modified: Option<String>,
    pub description: Option<String>,
    pub words: Vec<Word>,
}

/// Result of `list_voice_models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceModels {
    pub customizations: Vec<VoiceModel>,
}
