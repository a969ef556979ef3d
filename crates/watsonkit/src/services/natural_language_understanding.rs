//! Natural Language Understanding v1.
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, Service};
//! use watsonkit::services::NaturalLanguageUnderstandingV1;
//! use watsonkit::types::natural_language_understanding::{AnalyzeParams, Features, KeywordsOptions};
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let nlu = NaturalLanguageUnderstandingV1::builder()
//!     .version("2018-11-16")
//!     .credentials(Credentials::api_key("key"))
//!     .build()?;
//!
//! let features = Features {
//!     keywords: Some(KeywordsOptions::default()),
//!     ..Default::default()
//! };
//! let analysis = nlu
//!     .analyze(AnalyzeParams::url("https://www.ibm.com", features))
//!     .await?
//!     .into_result();
//! for keyword in analysis.keywords {
//!     println!("{} ({:.2})", keyword.text, keyword.relevance);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::RequestDescriptor;
use crate::service::{Service, ServiceCore};
use crate::types::natural_language_understanding::{
    AnalysisResults, AnalyzeParams, DeleteModelParams, DeleteModelResults, Features,
    ListModelsParams, ListModelsResults,
};
use crate::validate::{require, required};

const NAME: &str = "natural-language-understanding";
const JSON: &str = "application/json";

/// Client for the Natural Language Understanding v1 API.
#[derive(Debug, Clone)]
pub struct NaturalLanguageUnderstandingV1 {
    core: ServiceCore,
}

impl Service for NaturalLanguageUnderstandingV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/natural-language-understanding/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct AnalyzeBody {
    features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_to_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_analyzed_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_text_characters: Option<u64>,
}

impl NaturalLanguageUnderstandingV1 {
    /// Analyze text, HTML or a webpage for the requested features.
    pub fn analyze(&self, params: AnalyzeParams) -> ServiceCall<AnalysisResults> {
        self.core.json(move || {
            let body = AnalyzeBody {
                features: required("features", params.features)?,
                text: params.text,
                html: params.html,
                url: params.url,
                clean: params.clean,
                xpath: params.xpath,
                fallback_to_raw: params.fallback_to_raw,
                return_analyzed_text: params.return_analyzed_text,
                language: params.language,
                limit_text_characters: params.limit_text_characters,
            };
            Ok(
                RequestDescriptor::new(NAME, "analyze", Method::POST, "/v1/analyze")
                    .json(&body)?
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(JSON)),
                    ])?),
            )
        })
    }

    /// List custom models deployed to this instance.
    pub fn list_models(&self, _params: Option<ListModelsParams>) -> ServiceCall<ListModelsResults> {
        self.core.json(|| {
            Ok(
                RequestDescriptor::new(NAME, "listModels", Method::GET, "/v1/models")
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Delete a custom model.
    pub fn delete_model(&self, params: DeleteModelParams) -> ServiceCall<DeleteModelResults> {
        self.core.json(move || {
            require!(params; model_id)?;
            Ok(
                RequestDescriptor::new(NAME, "deleteModel", Method::DELETE, "/v1/models/{model_id}")
                    .path_param("model_id", params.model_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }
}
