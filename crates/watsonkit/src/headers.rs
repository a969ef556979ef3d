//! Header construction and precedence.
//!
//! Headers are merged in layers, lowest priority first:
//!
//! 1. default headers from the service configuration
//! 2. SDK identification headers
//! 3. content negotiation headers chosen by the operation
//! 4. headers supplied by the caller on the call
//!
//! A later layer replaces every value an earlier layer set under the same
//! (case-insensitive) name.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::error::{Error, Result};

/// Name of the analytics header attached to every request.
pub const SDK_ANALYTICS: HeaderName = HeaderName::from_static("x-ibmcloud-sdk-analytics");

/// Name of the header carrying a pre-issued Watson token.
pub const WATSON_TOKEN: HeaderName = HeaderName::from_static("x-watson-authorization-token");

/// Name of the data collection opt-out header.
pub const LEARNING_OPT_OUT: HeaderName = HeaderName::from_static("x-watson-learning-opt-out");

/// `Content-Language` header name.
pub const CONTENT_LANGUAGE: HeaderName = reqwest::header::CONTENT_LANGUAGE;

/// `Accept-Language` header name.
pub const ACCEPT_LANGUAGE: HeaderName = reqwest::header::ACCEPT_LANGUAGE;

/// The `User-Agent` string sent by this crate.
pub fn user_agent() -> String {
    format!(
        "watsonkit-{} {} {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// SDK identification headers for one operation.
pub fn sdk_headers(service: &str, service_version: &str, operation: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&user_agent()) {
        headers.insert(USER_AGENT, value);
    }
    let analytics = format!(
        "service_name={service};service_version={service_version};operation_id={operation};async=true"
    );
    if let Ok(value) = HeaderValue::from_str(&analytics) {
        headers.insert(SDK_ANALYTICS, value);
    }
    headers
}

/// Build a header layer from name/value pairs, skipping absent values.
pub fn negotiation(pairs: &[(HeaderName, Option<&str>)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        if let Some(value) = value {
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidHeader(format!("{name}: {value}")))?;
            headers.insert(name.clone(), value);
        }
    }
    Ok(headers)
}

/// Merge header layers, later layers taking priority.
pub fn merge_headers(layers: &[&HeaderMap]) -> HeaderMap {
    let mut merged = HeaderMap::new();
    for layer in layers {
        override_headers(&mut merged, layer);
    }
    merged
}

/// Apply `layer` on top of `target`, replacing values for every name it carries.
pub fn override_headers(target: &mut HeaderMap, layer: &HeaderMap) {
    for name in layer.keys() {
        target.remove(name);
        for value in layer.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{ACCEPT, CONTENT_TYPE};

    use super::*;

    fn layer(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    #[test]
    fn caller_headers_win() {
        let defaults = layer(&[("x-watson-learning-opt-out", "true")]);
        let sdk = sdk_headers("compare-comply", "v1", "convertToHtml");
        let negotiated = layer(&[("accept", "application/json"), ("content-type", "multipart/form-data")]);
        let caller = layer(&[("accept", "fake/header"), ("content-type", "fake/header")]);

        let merged = merge_headers(&[&defaults, &sdk, &negotiated, &caller]);

        assert_eq!(merged.get(ACCEPT).unwrap(), "fake/header");
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "fake/header");
        assert_eq!(merged.get(LEARNING_OPT_OUT).unwrap(), "true");
        assert_eq!(merged.get_all(ACCEPT).iter().count(), 1);
    }

    #[test]
    fn negotiation_overrides_sdk_defaults() {
        let sdk = layer(&[("user-agent", "watsonkit")]);
        let negotiated = layer(&[("user-agent", "custom")]);
        let merged = merge_headers(&[&sdk, &negotiated]);
        assert_eq!(merged.get(USER_AGENT).unwrap(), "custom");
    }

    #[test]
    fn negotiation_skips_absent_values() {
        let headers = negotiation(&[
            (ACCEPT, Some("application/json")),
            (CONTENT_LANGUAGE, None),
        ])
        .unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn analytics_header_names_the_operation() {
        let headers = sdk_headers("conversation", "v2", "message");
        assert_eq!(
            headers.get(SDK_ANALYTICS).unwrap(),
            "service_name=conversation;service_version=v2;operation_id=message;async=true"
        );
        assert!(
            headers
                .get(USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("watsonkit-")
        );
    }
}
