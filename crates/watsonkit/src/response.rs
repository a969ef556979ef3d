//! Response envelope and body decoding.

use reqwest::header::HeaderMap;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// A decoded result together with the HTTP status and headers it came with.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// The decoded response body.
    pub result: T,
    /// HTTP status code.
    pub status: u16,
    /// Raw response headers.
    pub headers: HeaderMap,
}

impl<T> DetailedResponse<T> {
    /// Discard status and headers, keeping the body.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transform the body, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            result: f(self.result),
            status: self.status,
            headers: self.headers,
        }
    }
}

/// Result of operations whose reply carries no useful body.
///
/// Accepts any JSON value, including an empty body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Empty)
    }
}

/// An undecoded response as returned by a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

/// Function used to turn a raw body into the operation's result type.
pub type Decoder<T> = fn(Vec<u8>) -> Result<T>;

/// Decode a JSON body. An empty body decodes as `null`.
pub fn decode_json<T: DeserializeOwned>(body: Vec<u8>) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Keep the body as raw bytes.
pub fn decode_bytes(body: Vec<u8>) -> Result<Vec<u8>> {
    Ok(body)
}

/// Decode the body as (lossy) UTF-8 text.
pub fn decode_text(body: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn empty_replies_decode() {
        assert_eq!(decode_json::<Empty>(Vec::new()).unwrap(), Empty);
        assert_eq!(decode_json::<Empty>(b"  \n".to_vec()).unwrap(), Empty);
        assert_eq!(decode_json::<Empty>(b"{}".to_vec()).unwrap(), Empty);
        assert_eq!(decode_json::<Value>(Vec::new()).unwrap(), Value::Null);
    }

    #[test]
    fn json_body_decodes() {
        let value: Value = decode_json(br#"{"status": "ok"}"#.to_vec()).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn text_body_decodes_lossily() {
        assert_eq!(decode_text(b"token".to_vec()).unwrap(), "token");
    }

    #[test]
    fn into_result_drops_envelope() {
        let response = DetailedResponse {
            result: 7,
            status: 200,
            headers: HeaderMap::new(),
        };
        assert_eq!(response.map(|n| n * 2).into_result(), 14);
    }
}
