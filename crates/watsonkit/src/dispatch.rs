//! The transport seam.
//!
//! Services never talk to the network directly. They hand a finished
//! [`RequestDescriptor`] to a [`Dispatcher`], which performs the I/O and reports back a
//! [`RawResponse`] or an error. [`HttpDispatcher`] is the reqwest implementation used by
//! default; tests and proxies can inject their own.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Credentials, ServiceConfig};
use crate::error::{Error, Result};
use crate::request::{FormField, RequestBody, RequestDescriptor};
use crate::response::RawResponse;
use crate::validate::is_truthy;

/// Performs the network call for a request descriptor.
#[async_trait]
pub trait Dispatcher: Debug + Send + Sync {
    /// Send the request described by `descriptor` using `config`.
    ///
    /// Non-2xx replies are reported as errors.
    async fn dispatch(
        &self,
        config: &ServiceConfig,
        descriptor: RequestDescriptor,
    ) -> Result<RawResponse>;
}

/// Dispatcher backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    http_client: Client,
}

impl HttpDispatcher {
    /// Create a dispatcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self { http_client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(
        &self,
        config: &ServiceConfig,
        descriptor: RequestDescriptor,
    ) -> Result<RawResponse> {
        let url = format!("{}{}", config.url, descriptor.rendered_path());

        let mut query: Vec<(String, String)> = Vec::with_capacity(descriptor.query.len() + 1);
        if let Some(version) = &config.version {
            query.push(("version".to_string(), version.clone()));
        }
        query.extend(descriptor.query);

        debug!(
            service = descriptor.service,
            operation = descriptor.operation,
            method = %descriptor.method,
            url = %url,
            "dispatching request"
        );

        let mut headers = descriptor.headers;
        let mut request = self.http_client.request(descriptor.method, &url);
        if !query.is_empty() {
            request = request.query(&query);
        }

        request = match &config.credentials {
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::WatsonToken(_) | Credentials::Unauthenticated => request,
        };

        request = match descriptor.body {
            RequestBody::Empty => request.headers(headers),
            RequestBody::Json(value) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                request.headers(headers).body(serde_json::to_vec(&value)?)
            }
            RequestBody::Text(text) => request.headers(headers).body(text),
            RequestBody::Binary(bytes) => request.headers(headers).body(bytes),
            RequestBody::Multipart(fields) => {
                // reqwest writes its own content type carrying the boundary
                headers.remove(CONTENT_TYPE);
                request.headers(headers).multipart(build_form(fields)?)
            }
        };

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        let failure = if (200..300).contains(&status) {
            error_in_body(status, &body)
        } else {
            Some(error_from_body(status, &body))
        };
        if let Some(err) = failure {
            warn!(
                service = descriptor.service,
                operation = descriptor.operation,
                status,
                error = %err,
                "service returned an error"
            );
            return Err(err);
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_form(fields: Vec<FormField>) -> Result<Form> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, part } => {
                let mut body = Part::bytes(part.data);
                if let Some(filename) = part.filename {
                    body = body.file_name(filename);
                }
                if let Some(content_type) = part.content_type {
                    body = body.mime_str(&content_type)?;
                }
                form.part(name, body)
            }
        };
    }
    Ok(form)
}

/// Build the error for a non-2xx reply.
///
/// The message is taken from the first recognisable field of a JSON body: `error` (a
/// string, an object with `description`, or a nested object), `error_message`, then
/// `error_code`. Anything else falls back to the raw body.
pub fn error_from_body(status: u16, body: &[u8]) -> Error {
    let text = String::from_utf8_lossy(body).into_owned();

    if status == 401 || status == 403 {
        return Error::Unauthorized { status, body: text };
    }

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| message_from_json(&json))
        .unwrap_or_else(|| {
            if text.is_empty() {
                format!("Error Code: {status}")
            } else {
                text.clone()
            }
        });

    Error::Service {
        status,
        message,
        body: text,
    }
}

/// Build an error for a 2xx reply whose JSON body still reports one.
///
/// Some services answer with a success status and an `error` or `error_code` field.
pub fn error_in_body(status: u16, body: &[u8]) -> Option<Error> {
    let json = serde_json::from_slice::<Value>(body).ok()?;
    let flagged = ["error", "error_code"]
        .iter()
        .any(|key| json.get(key).is_some_and(is_truthy));
    if !flagged {
        return None;
    }
    let message = message_from_json(&json).unwrap_or_else(|| format!("Error Code: {status}"));
    Some(Error::Service {
        status,
        message,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

fn message_from_json(json: &Value) -> Option<String> {
    match json.get("error") {
        Some(Value::String(message)) => return Some(message.clone()),
        Some(Value::Object(inner)) => {
            if let Some(description) = inner.get("description").and_then(Value::as_str) {
                return Some(description.to_string());
            }
            if let Some(nested) = inner.get("error") {
                return Some(nested.to_string());
            }
        }
        _ => {}
    }
    if let Some(message) = json.get("error_message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    json.get("error_code").map(|code| match code {
        Value::String(code) => format!("Error Code: {code}"),
        other => format!("Error Code: {other}"),
    })
}
