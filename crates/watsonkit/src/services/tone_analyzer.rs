//! Tone Analyzer v3.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, negotiation};
use crate::request::RequestDescriptor;
use crate::service::{Service, ServiceCore};
use crate::types::tone_analyzer::{
    ToneAnalysis, ToneChatParams, ToneInput, ToneParams, Utterance, UtteranceAnalyses,
};
use crate::validate::{require, required};

const NAME: &str = "tone_analyzer";
const JSON: &str = "application/json";

/// Client for the Tone Analyzer v3 API.
#[derive(Debug, Clone)]
pub struct ToneAnalyzerV3 {
    core: ServiceCore,
}

impl Service for ToneAnalyzerV3 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v3";
    const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/tone-analyzer/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct ToneBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ToneChatBody<'a> {
    utterances: &'a [Utterance],
}

impl ToneAnalyzerV3 {
    /// Analyze the emotional, language and social tones of a text.
    pub fn tone(&self, params: ToneParams) -> ServiceCall<ToneAnalysis> {
        self.core.json(move || {
            let input = required("tone_input", params.tone_input)?;
            let content_type = input.content_type();
            let desc = RequestDescriptor::new(NAME, "tone", Method::POST, "/v3/tone")
                .query_opt("sentences", params.sentences)
                .query_list("tones", &params.tones);
            let desc = match &input {
                ToneInput::Json { text } => desc.json(&ToneBody { text })?,
                ToneInput::Text(text) | ToneInput::Html(text) => desc.text(text.as_str()),
            };
            Ok(desc.with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(content_type)),
                (CONTENT_LANGUAGE, params.content_language.as_deref()),
                (ACCEPT_LANGUAGE, params.accept_language.as_deref()),
            ])?))
        })
    }

    /// Analyze customer-engagement tones of a conversation.
    pub fn tone_chat(&self, params: ToneChatParams) -> ServiceCall<UtteranceAnalyses> {
        self.core.json(move || {
            require!(params; utterances)?;
            Ok(
                RequestDescriptor::new(NAME, "toneChat", Method::POST, "/v3/tone_chat")
                    .json(&ToneChatBody {
                        utterances: &params.utterances,
                    })?
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(JSON)),
                        (CONTENT_LANGUAGE, params.content_language.as_deref()),
                        (ACCEPT_LANGUAGE, params.accept_language.as_deref()),
                    ])?),
            )
        })
    }
}
