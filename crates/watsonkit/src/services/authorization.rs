//! Authorization v1: Watson tokens for browser and mobile clients.
//!
//! The builder's `url` is the URL of the service the token is for. Requests always go to
//! `/authorization/api` on that host. Without a builder `url` there is no default target,
//! and `get_token` needs its own parameters.

use reqwest::Method;
use reqwest::Url;

use crate::call::ServiceCall;
use crate::request::RequestDescriptor;
use crate::service::{Service, ServiceCore};
use crate::types::authorization::GetTokenParams;
use crate::validate::require;

const NAME: &str = "authorization";
const AUTHORIZATION_PATH: &str = "/authorization/api";

/// Client for the Authorization v1 API. No version date is needed.
#[derive(Debug, Clone)]
pub struct AuthorizationV1 {
    core: ServiceCore,
    target_url: Option<String>,
}

impl Service for AuthorizationV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str = "https://stream.watsonplatform.net/authorization/api";
    const REQUIRES_VERSION: bool = false;

    fn from_core(core: ServiceCore) -> Self {
        let config = core.config();
        if !config.explicit_url {
            return Self {
                core,
                target_url: None,
            };
        }
        let target_url = config.url.clone();
        let core = match authorization_url(&target_url) {
            Some(url) => core.with_url(url),
            None => core,
        };
        Self {
            core,
            target_url: Some(target_url),
        }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

/// Replace the path of `url` with the authorization endpoint.
fn authorization_url(url: &str) -> Option<String> {
    let mut parsed = Url::parse(url).ok()?;
    parsed.set_path(AUTHORIZATION_PATH);
    parsed.set_query(None);
    Some(parsed.as_str().trim_end_matches('/').to_string())
}

impl AuthorizationV1 {
    /// The URL tokens are requested for when `get_token` gets no parameters.
    pub fn target_url(&self) -> Option<&str> {
        self.target_url.as_deref()
    }

    /// Get a Watson token for a service URL. `None` uses the configured URL.
    pub fn get_token(&self, params: Option<GetTokenParams>) -> ServiceCall<String> {
        let params = params.unwrap_or_else(|| GetTokenParams {
            url: self.target_url.clone().unwrap_or_default(),
        });
        self.core.text(move || {
            require!(params; url)?;
            Ok(RequestDescriptor::new(NAME, "getToken", Method::GET, "/v1/token")
                .query("url", params.url))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_go_to_the_authorization_path() {
        assert_eq!(
            authorization_url("https://stream.watsonplatform.net/speech-to-text/api").as_deref(),
            Some("https://stream.watsonplatform.net/authorization/api")
        );
        assert_eq!(
            authorization_url("http://127.0.0.1:8080").as_deref(),
            Some("http://127.0.0.1:8080/authorization/api")
        );
        assert_eq!(authorization_url("not a url"), None);
    }
}
