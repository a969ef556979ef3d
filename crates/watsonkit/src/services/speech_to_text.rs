//! Speech to Text v1: sessionless recognition over HTTP.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::RequestDescriptor;
use crate::service::{Service, ServiceCore};
use crate::types::speech_to_text::{
    GetModelParams, ListModelsParams, RecognizeParams, SpeechModel, SpeechModels,
    SpeechRecognitionResults,
};
use crate::validate::require;

const NAME: &str = "speech_to_text";
const JSON: &str = "application/json";

/// Client for the Speech to Text v1 API. No version date is needed.
#[derive(Debug, Clone)]
pub struct SpeechToTextV1 {
    core: ServiceCore,
}

impl Service for SpeechToTextV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str = "https://stream.watsonplatform.net/speech-to-text/api";
    const REQUIRES_VERSION: bool = false;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

impl SpeechToTextV1 {
    /// List the available language models.
    pub fn list_models(&self, _params: Option<ListModelsParams>) -> ServiceCall<SpeechModels> {
        self.core.json(|| {
            Ok(
                RequestDescriptor::new(NAME, "listModels", Method::GET, "/v1/models")
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Describe one language model.
    pub fn get_model(&self, params: GetModelParams) -> ServiceCall<SpeechModel> {
        self.core.json(move || {
            require!(params; model_id)?;
            Ok(
                RequestDescriptor::new(NAME, "getModel", Method::GET, "/v1/models/{model_id}")
                    .path_param("model_id", params.model_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Transcribe a complete audio payload in one request.
    pub fn recognize(&self, params: RecognizeParams) -> ServiceCall<SpeechRecognitionResults> {
        self.core.json(move || {
            require!(params; audio, content_type)?;
            let keywords = (!params.keywords.is_empty()).then(|| params.keywords.join(","));
            Ok(
                RequestDescriptor::new(NAME, "recognize", Method::POST, "/v1/recognize")
                    .query_opt("model", params.model)
                    .query_opt("customization_id", params.customization_id)
                    .query_opt("acoustic_customization_id", params.acoustic_customization_id)
                    .query_opt("customization_weight", params.customization_weight)
                    .query_opt("inactivity_timeout", params.inactivity_timeout)
                    .query_opt("keywords", keywords)
                    .query_opt("keywords_threshold", params.keywords_threshold)
                    .query_opt("max_alternatives", params.max_alternatives)
                    .query_opt("word_alternatives_threshold", params.word_alternatives_threshold)
                    .query_opt("word_confidence", params.word_confidence)
                    .query_opt("timestamps", params.timestamps)
                    .query_opt("profanity_filter", params.profanity_filter)
                    .query_opt("smart_formatting", params.smart_formatting)
                    .query_opt("speaker_labels", params.speaker_labels)
                    .binary(params.audio)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(params.content_type.as_str())),
                    ])?),
            )
        })
    }
}
