//! Text to Speech v1: the REST interface.
//!
//! `synthesize` returns the whole audio body. WAV audio that was streamed may carry
//! placeholder sizes in its header; [`TextToSpeechV1::repair_wav_header`] fixes them.
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, Service};
//! use watsonkit::services::TextToSpeechV1;
//! use watsonkit::types::text_to_speech::SynthesizeParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let tts = TextToSpeechV1::builder()
//!     .credentials(Credentials::api_key("key"))
//!     .build()?;
//!
//! let mut audio = tts
//!     .synthesize(SynthesizeParams {
//!         voice: Some("en-US_AllisonVoice".to_string()),
//!         ..SynthesizeParams::new("Hello world", "audio/wav")
//!     })
//!     .await?
//!     .into_result();
//! TextToSpeechV1::repair_wav_header(&mut audio);
//! std::fs::write("hello.wav", audio)?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::RequestDescriptor;
use crate::response::Empty;
use crate::service::{Service, ServiceCore};
use crate::types::text_to_speech::{
    AddWordParams, AddWordsParams, CreateVoiceModelParams, DeleteUserDataParams,
    DeleteVoiceModelParams, DeleteWordParams, GetPronunciationParams, GetVoiceModelParams,
    GetVoiceParams, GetWordParams, ListVoiceModelsParams, ListVoicesParams, ListWordsParams,
    Pronunciation, SynthesizeParams, Translation, UpdateVoiceModelParams, Voice, VoiceModel,
    VoiceModels, Voices, Word, Words,
};
use crate::validate::require;

const NAME: &str = "text_to_speech";
const JSON: &str = "application/json";

/// Client for the Text to Speech v1 API. No version date is needed.
#[derive(Debug, Clone)]
pub struct TextToSpeechV1 {
    core: ServiceCore,
}

impl Service for TextToSpeechV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str = "https://stream.watsonplatform.net/text-to-speech/api";
    const REQUIRES_VERSION: bool = false;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct SynthesizeBody {
    text: String,
}

#[derive(Serialize)]
struct VoiceModelBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<Word>>,
}

#[derive(Serialize)]
struct WordsBody {
    words: Vec<Word>,
}

#[derive(Serialize)]
struct TranslationBody {
    translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    part_of_speech: Option<String>,
}

impl TextToSpeechV1 {
    /// List the available voices.
    pub fn list_voices(&self, _params: Option<ListVoicesParams>) -> ServiceCall<Voices> {
        self.core.json(|| {
            Ok(RequestDescriptor::new(NAME, "listVoices", Method::GET, "/v1/voices")
                .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Describe one voice.
    pub fn get_voice(&self, params: GetVoiceParams) -> ServiceCall<Voice> {
        self.core.json(move || {
            require!(params; voice)?;
            Ok(
                RequestDescriptor::new(NAME, "getVoice", Method::GET, "/v1/voices/{voice}")
                    .path_param("voice", params.voice)
                    .query_opt("customization_id", params.customization_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Synthesize text to audio in the `accept` format.
    pub fn synthesize(&self, params: SynthesizeParams) -> ServiceCall<Vec<u8>> {
        self.core.bytes(move || {
            require!(params; text)?;
            Ok(
                RequestDescriptor::new(NAME, "synthesize", Method::POST, "/v1/synthesize")
                    .query_opt("voice", params.voice)
                    .query_opt("customization_id", params.customization_id)
                    .json(&SynthesizeBody { text: params.text })?
                    .with_headers(negotiation(&[
                        (CONTENT_TYPE, Some(JSON)),
                        (ACCEPT, params.accept.as_deref()),
                    ])?),
            )
        })
    }

    /// Get the phonetic pronunciation of a word.
    pub fn get_pronunciation(&self, params: GetPronunciationParams) -> ServiceCall<Pronunciation> {
        self.core.json(move || {
            require!(params; text)?;
            Ok(
                RequestDescriptor::new(NAME, "getPronunciation", Method::GET, "/v1/pronunciation")
                    .query("text", params.text)
                    .query_opt("voice", params.voice)
                    .query_opt("format", params.format)
                    .query_opt("customization_id", params.customization_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Create an empty custom voice model.
    pub fn create_voice_model(&self, params: CreateVoiceModelParams) -> ServiceCall<VoiceModel> {
        self.core.json(move || {
            require!(params; name)?;
            let body = VoiceModelBody {
                name: Some(params.name),
                language: params.language,
                description: params.description,
                words: None,
            };
            Ok(
                RequestDescriptor::new(NAME, "createVoiceModel", Method::POST, "/v1/customizations")
                    .json(&body)?
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(JSON)),
                    ])?),
            )
        })
    }

    /// List custom voice models owned by these credentials.
    pub fn list_voice_models(
        &self,
        params: Option<ListVoiceModelsParams>,
    ) -> ServiceCall<VoiceModels> {
        let params = params.unwrap_or_default();
        self.core.json(move || {
            Ok(
                RequestDescriptor::new(NAME, "listVoiceModels", Method::GET, "/v1/customizations")
                    .query_opt("language", params.language)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Rename a custom voice model, or add and update its words.
    pub fn update_voice_model(&self, params: UpdateVoiceModelParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customization_id)?;
            let body = VoiceModelBody {
                name: params.name,
                language: None,
                description: params.description,
                words: (!params.words.is_empty()).then_some(params.words),
            };
            Ok(RequestDescriptor::new(
                NAME,
                "updateVoiceModel",
                Method::POST,
                "/v1/customizations/{customization_id}",
            )
            .path_param("customization_id", params.customization_id)
            .json(&body)?
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(JSON)),
            ])?))
        })
    }

    /// Get a custom voice model and its words.
    pub fn get_voice_model(&self, params: GetVoiceModelParams) -> ServiceCall<VoiceModel> {
        self.core.json(move || {
            require!(params; customization_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getVoiceModel",
                Method::GET,
                "/v1/customizations/{customization_id}",
            )
            .path_param("customization_id", params.customization_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Delete a custom voice model.
    pub fn delete_voice_model(&self, params: DeleteVoiceModelParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customization_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteVoiceModel",
                Method::DELETE,
                "/v1/customizations/{customization_id}",
            )
            .path_param("customization_id", params.customization_id))
        })
    }

    /// Add or update several words of a custom voice model.
    pub fn add_words(&self, params: AddWordsParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customization_id, words)?;
            Ok(RequestDescriptor::new(
                NAME,
                "addWords",
                Method::POST,
                "/v1/customizations/{customization_id}/words",
            )
            .path_param("customization_id", params.customization_id)
            .json(&WordsBody {
                words: params.words,
            })?
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(JSON)),
            ])?))
        })
    }

    /// List the words of a custom voice model.
    pub fn list_words(&self, params: ListWordsParams) -> ServiceCall<Words> {
        self.core.json(move || {
            require!(params; customization_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "listWords",
                Method::GET,
                "/v1/customizations/{customization_id}/words",
            )
            .path_param("customization_id", params.customization_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Add or update one word of a custom voice model.
    pub fn add_word(&self, params: AddWordParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customization_id, word, translation)?;
            let body = TranslationBody {
                translation: params.translation,
                part_of_speech: params.part_of_speech,
            };
            Ok(RequestDescriptor::new(
                NAME,
                "addWord",
                Method::PUT,
                "/v1/customizations/{customization_id}/words/{word}",
            )
            .path_param("customization_id", params.customization_id)
            .path_param("word", params.word)
            .json(&body)?
            .with_headers(negotiation(&[(CONTENT_TYPE, Some(JSON))])?))
        })
    }

    /// Get the translation of one word in a custom voice model.
    pub fn get_word(&self, params: GetWordParams) -> ServiceCall<Translation> {
        self.core.json(move || {
            require!(params; customization_id, word)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getWord",
                Method::GET,
                "/v1/customizations/{customization_id}/words/{word}",
            )
            .path_param("customization_id", params.customization_id)
            .path_param("word", params.word)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Delete one word from a custom voice model.
    pub fn delete_word(&self, params: DeleteWordParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customization_id, word)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteWord",
                Method::DELETE,
                "/v1/customizations/{customization_id}/words/{word}",
            )
            .path_param("customization_id", params.customization_id)
            .path_param("word", params.word))
        })
    }

    /// Delete all data tagged with a customer id.
    pub fn delete_user_data(&self, params: DeleteUserDataParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customer_id)?;
            Ok(
                RequestDescriptor::new(NAME, "deleteUserData", Method::DELETE, "/v1/user_data")
                    .query("customer_id", params.customer_id),
            )
        })
    }

    /// Rewrite the RIFF and `data` chunk sizes of a WAV file to match its length.
    ///
    /// Chunks before `data` are walked by their declared sizes. Input too short for a
    /// RIFF header, or with no `data` chunk, is left as is apart from the RIFF size.
    pub fn repair_wav_header(wav: &mut [u8]) {
        const FIELD: usize = 4;
        let len = wav.len();
        if len < 12 {
            return;
        }
        write_u32_le(wav, 4, len - 8);

        let mut id_offset: usize = 12;
        while let Some(size_offset) = id_offset.checked_add(FIELD) {
            let Some(size) = read_u32_le(wav, size_offset) else {
                return;
            };
            if &wav[id_offset..size_offset] == b"data" {
                write_u32_le(wav, size_offset, len - size_offset - FIELD);
                return;
            }
            match (size_offset + FIELD).checked_add(size as usize) {
                Some(next) => id_offset = next,
                None => return,
            }
        }
    }
}

fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

fn write_u32_le(buf: &mut [u8], offset: usize, value: usize) {
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    if let Some(slot) = buf.get_mut(offset..offset + 4) {
        slot.copy_from_slice(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
        let mut out = b"RIFF\0\0\0\0WAVE".to_vec();
        for (id, body) in chunks {
            out.extend_from_slice(*id);
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(body);
        }
        out
    }

    #[test]
    fn sizes_are_rewritten() {
        let mut audio = wav(&[(b"fmt ", &[0; 16]), (b"data", &[1, 2, 3, 4, 5, 6])]);
        let data_size_at = 12 + 8 + 16 + 4;
        audio[data_size_at..data_size_at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        audio[4..8].copy_from_slice(&0u32.to_le_bytes());

        TextToSpeechV1::repair_wav_header(&mut audio);

        assert_eq!(read_u32_le(&audio, 4), Some(audio.len() as u32 - 8));
        assert_eq!(read_u32_le(&audio, data_size_at), Some(6));
    }

    #[test]
    fn short_or_truncated_input_is_safe() {
        let mut tiny = b"RIFF".to_vec();
        TextToSpeechV1::repair_wav_header(&mut tiny);
        assert_eq!(tiny, b"RIFF");

        let mut no_data = wav(&[(b"fmt ", &[0; 16])]);
        let before = no_data[12..].to_vec();
        TextToSpeechV1::repair_wav_header(&mut no_data);
        assert_eq!(no_data[12..], before[..]);

        let mut oversized = wav(&[(b"LIST", &[0; 2])]);
        oversized[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
        TextToSpeechV1::repair_wav_header(&mut oversized);
    }
}
