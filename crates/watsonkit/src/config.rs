//! Service configuration and the builder that produces it.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::dispatch::{Dispatcher, HttpDispatcher};
use crate::error::{Error, Result};
use crate::headers::{LEARNING_OPT_OUT, WATSON_TOKEN};
use crate::service::{Service, ServiceCore};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic authentication.
    Basic {
        /// Service username (or `apikey`).
        username: String,
        /// Service password (or the API key itself).
        password: String,
    },
    /// A bearer token managed by the application.
    Bearer(String),
    /// A Watson token obtained from the authorization service.
    WatsonToken(String),
    /// Send no credentials, e.g. behind an authenticating proxy.
    Unauthenticated,
}

impl Credentials {
    /// Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Basic credentials for an IBM Cloud API key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::basic("apikey", key)
    }

    /// A bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Credentials::WatsonToken(_) => f.write_str("WatsonToken(<redacted>)"),
            Credentials::Unauthenticated => f.write_str("Unauthenticated"),
        }
    }
}

/// Immutable per-instance configuration, shared by every call on a service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name, e.g. `compare-comply`.
    pub service_name: &'static str,
    /// API generation, e.g. `v1`.
    pub service_version: &'static str,
    /// Base URL without a trailing slash.
    pub url: String,
    /// Whether `url` came from the builder rather than the service default.
    pub explicit_url: bool,
    /// API version date sent as the `version` query parameter. Always `None` for services
    /// that take no version.
    pub version: Option<String>,
    /// Credentials applied by the dispatcher.
    pub credentials: Credentials,
    /// Headers sent with every request, lowest priority.
    pub default_headers: HeaderMap,
    /// Request timeout.
    pub timeout: Duration,
}

/// Builder for a Watson service client.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use watsonkit::{Credentials, Service};
/// use watsonkit::services::LanguageTranslatorV3;
///
/// # fn example() -> watsonkit::Result<()> {
/// let translator = LanguageTranslatorV3::builder()
///     .url("https://api.eu-de.language-translator.watson.cloud.ibm.com/")
///     .version("2018-05-01")
///     .credentials(Credentials::api_key("my-key"))
///     .learning_opt_out(true)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ServiceBuilder<S> {
    url: Option<String>,
    version: Option<String>,
    credentials: Option<Credentials>,
    headers: HeaderMap,
    header_error: Option<String>,
    timeout: Duration,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    _service: PhantomData<fn() -> S>,
}

impl<S: Service> ServiceBuilder<S> {
    /// Create a builder with the service's default URL.
    pub fn new() -> Self {
        Self {
            url: None,
            version: None,
            credentials: None,
            headers: HeaderMap::new(),
            header_error: None,
            timeout: DEFAULT_TIMEOUT,
            dispatcher: None,
            _service: PhantomData,
        }
    }

    /// Override the base URL. A trailing slash is removed.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(strip_trailing_slash(&url.into()).to_string());
        self
    }

    /// Set the API version date (`YYYY-MM-DD`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add a default header sent with every request.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: std::fmt::Display,
        HeaderName: TryFrom<K>,
        HeaderValue: TryFrom<V>,
    {
        let label = name.to_string();
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => self.header_error = Some(format!("default header {label}")),
        }
        self
    }

    /// Opt out of request logging by the service.
    pub fn learning_opt_out(mut self, opt_out: bool) -> Self {
        if opt_out {
            self.headers
                .insert(LEARNING_OPT_OUT, HeaderValue::from_static("true"));
        } else {
            self.headers.remove(LEARNING_OPT_OUT);
        }
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Use a custom dispatcher instead of the reqwest-based default.
    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<S> {
        if let Some(err) = self.header_error {
            return Err(Error::InvalidHeader(err));
        }
        if S::REQUIRES_VERSION && self.version.is_none() {
            return Err(Error::Config("version was not specified".to_string()));
        }
        let credentials = self.credentials.ok_or_else(|| {
            Error::Config(
                "credentials are required unless Credentials::Unauthenticated is set".to_string(),
            )
        })?;

        let mut default_headers = self.headers;
        match &credentials {
            Credentials::Basic { username, password }
                if username.is_empty() || password.is_empty() =>
            {
                return Err(Error::Config(
                    "username and password are required".to_string(),
                ));
            }
            Credentials::WatsonToken(token) => {
                let value = HeaderValue::from_str(token)
                    .map_err(|_| Error::InvalidHeader(WATSON_TOKEN.to_string()))?;
                default_headers.insert(WATSON_TOKEN, value);
            }
            _ => {}
        }

        let dispatcher = match self.dispatcher {
            Some(dispatcher) => dispatcher,
            None => Arc::new(HttpDispatcher::new(self.timeout)?),
        };

        let config = ServiceConfig {
            service_name: S::NAME,
            service_version: S::SERVICE_VERSION,
            explicit_url: self.url.is_some(),
            url: self.url.unwrap_or_else(|| S::DEFAULT_URL.to_string()),
            version: self.version.filter(|_| S::REQUIRES_VERSION),
            credentials,
            default_headers,
            timeout: self.timeout,
        };

        Ok(S::from_core(ServiceCore::new(config, dispatcher)))
    }
}

impl<S: Service> Default for ServiceBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove a single trailing slash.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_removed() {
        assert_eq!(strip_trailing_slash("https://host/api/"), "https://host/api");
        assert_eq!(strip_trailing_slash("https://host/api"), "https://host/api");
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = Credentials::basic("user", "secret");
        let printed = format!("{creds:?}");
        assert!(printed.contains("user"));
        assert!(!printed.contains("secret"));
        assert!(!format!("{:?}", Credentials::bearer("tok")).contains("tok"));
    }

    #[test]
    fn invalid_default_header_is_named() {
        let err = ServiceBuilder::<crate::services::ToneAnalyzerV3>::new()
            .version("2017-09-21")
            .credentials(Credentials::Unauthenticated)
            .header("X-Trace\nId", "abc")
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::InvalidHeader(ref name) if name.contains("X-Trace")));
    }

    #[test]
    fn url_is_explicit_only_when_set() {
        let service = ServiceBuilder::<crate::services::ToneAnalyzerV3>::new()
            .version("2017-09-21")
            .credentials(Credentials::Unauthenticated)
            .build()
            .unwrap();
        assert!(!service.core().config().explicit_url);

        let service = ServiceBuilder::<crate::services::ToneAnalyzerV3>::new()
            .url("https://host/tone/api/")
            .version("2017-09-21")
            .credentials(Credentials::Unauthenticated)
            .build()
            .unwrap();
        let config = service.core().config();
        assert!(config.explicit_url);
        assert_eq!(config.url, "https://host/tone/api");
    }

    #[test]
    fn version_is_dropped_for_unversioned_services() {
        let service = ServiceBuilder::<crate::services::TextToSpeechV1>::new()
            .version("2017-09-21")
            .credentials(Credentials::Unauthenticated)
            .build()
            .unwrap();
        assert_eq!(service.core().config().version, None);

        let service = ServiceBuilder::<crate::services::ToneAnalyzerV3>::new()
            .version("2017-09-21")
            .credentials(Credentials::Unauthenticated)
            .build()
            .unwrap();
        assert_eq!(service.core().config().version.as_deref(), Some("2017-09-21"));
    }
}
