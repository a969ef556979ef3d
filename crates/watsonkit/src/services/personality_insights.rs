//! Personality Insights v3.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::call::ServiceCall;
use crate::error::Result;
use crate::headers::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, negotiation};
use crate::request::RequestDescriptor;
use crate::service::{Service, ServiceCore};
use crate::types::personality_insights::{
    Profile, ProfileAsCsvParams, ProfileContent, ProfileParams,
};
use crate::validate::required;

const NAME: &str = "personality_insights";

/// Client for the Personality Insights v3 API.
#[derive(Debug, Clone)]
pub struct PersonalityInsightsV3 {
    core: ServiceCore,
}

impl Service for PersonalityInsightsV3 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v3";
    const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/personality-insights/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

/// Both profile operations share one request shape; only `Accept` differs.
fn profile_request(
    operation: &'static str,
    accept: &str,
    params: ProfileParams,
) -> Result<RequestDescriptor> {
    let content = required("content", params.content)?;
    let desc = RequestDescriptor::new(NAME, operation, Method::POST, "/v3/profile")
        .query_opt("raw_scores", params.raw_scores)
        .query_opt("csv_headers", params.csv_headers)
        .query_opt("consumption_preferences", params.consumption_preferences);
    let content_type = content.content_type();
    let desc = match content {
        ProfileContent::Json(content) => desc.json(&content)?,
        ProfileContent::Text(text) | ProfileContent::Html(text) => desc.text(text),
    };
    Ok(desc.with_headers(negotiation(&[
        (ACCEPT, Some(accept)),
        (CONTENT_TYPE, Some(content_type)),
        (CONTENT_LANGUAGE, params.content_language.as_deref()),
        (ACCEPT_LANGUAGE, params.accept_language.as_deref()),
    ])?))
}

impl PersonalityInsightsV3 {
    /// Generate a personality profile as JSON.
    pub fn profile(&self, params: ProfileParams) -> ServiceCall<Profile> {
        self.core
            .json(move || profile_request("profile", "application/json", params))
    }

    /// Generate a personality profile as CSV.
    pub fn profile_as_csv(&self, params: ProfileAsCsvParams) -> ServiceCall<Vec<u8>> {
        self.core
            .bytes(move || profile_request("profileAsCsv", "text/csv", params))
    }
}
