//! Request descriptors.
//!
//! A [`RequestDescriptor`] is the structured form of one HTTP request before it is
//! dispatched: method, path template, path parameters, query, body and headers. Service
//! operations build one per call and hand it to the [`Dispatcher`](crate::Dispatcher).

use std::fmt::Display;
use std::path::Path;

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Content type used for file parts that carry no other hint.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A file to upload as one part of a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePart {
    /// File contents.
    pub data: Vec<u8>,
    /// Filename reported to the service.
    pub filename: Option<String>,
    /// Content type of the part.
    pub content_type: Option<String>,
}

impl FilePart {
    /// Create a part from raw bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Read a file from disk. The filename is the path's basename.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(Self {
            data,
            filename,
            content_type: None,
        })
    }

    /// Set the filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl From<Vec<u8>> for FilePart {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for FilePart {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<&str> for FilePart {
    fn from(data: &str) -> Self {
        Self::new(data.as_bytes())
    }
}

impl From<String> for FilePart {
    fn from(data: String) -> Self {
        Self::new(data.into_bytes())
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file field.
    File {
        /// Field name.
        name: String,
        /// The file part with its filename and content type resolved.
        part: FilePart,
    },
}

impl FormField {
    /// Name of the field.
    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Body of a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// A JSON document.
    Json(Value),
    /// Plain text (or HTML) sent as-is.
    Text(String),
    /// Raw bytes.
    Binary(Vec<u8>),
    /// A multipart form.
    Multipart(Vec<FormField>),
}

/// Structured description of one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Service name used for analytics and logs.
    pub service: &'static str,
    /// Operation id used for analytics and logs.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// Values substituted into the path template.
    pub path_params: Vec<(&'static str, String)>,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Request body.
    pub body: RequestBody,
    /// Final merged headers.
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    /// Start a descriptor for an operation.
    pub fn new(
        service: &'static str,
        operation: &'static str,
        method: Method,
        path: &'static str,
    ) -> Self {
        Self {
            service,
            operation,
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
        }
    }

    /// Bind a path placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: &str, value: impl Display) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter if it has a value.
    pub fn query_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Add a list-valued query parameter as repeated keys.
    pub fn query_list<V: Display>(mut self, name: &str, values: &[V]) -> Self {
        for value in values {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Add a layer of negotiation headers (see [`negotiation`](crate::headers::negotiation)).
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        crate::headers::override_headers(&mut self.headers, &headers);
        self
    }

    /// Use a JSON body built from a serializable value.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Use a plain text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    /// Use a raw byte body.
    pub fn binary(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = RequestBody::Binary(body.into());
        self
    }

    /// Use a multipart form body.
    pub fn form(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form.fields);
        self
    }

    /// Render the path with every placeholder replaced by its percent-encoded value.
    pub fn rendered_path(&self) -> String {
        self.path_params
            .iter()
            .fold(self.path.to_string(), |path, (name, value)| {
                path.replace(&format!("{{{name}}}"), &urlencoding::encode(value))
            })
    }

    /// Look up a query parameter by name (first occurrence).
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a multipart field by name.
    pub fn form_field(&self, name: &str) -> Option<&FormField> {
        match &self.body {
            RequestBody::Multipart(fields) => fields.iter().find(|f| f.name() == name),
            _ => None,
        }
    }
}

/// Builder for multipart form bodies.
///
/// Absent optional fields are dropped; files take the operation's default content type
/// when the caller gave none.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file part. `default_type` applies when the part has no content type.
    pub fn file(
        mut self,
        name: impl Into<String>,
        mut part: FilePart,
        default_type: Option<&str>,
    ) -> Self {
        if part.content_type.is_none() {
            part.content_type = Some(default_type.unwrap_or(OCTET_STREAM).to_string());
        }
        self.fields.push(FormField::File {
            name: name.into(),
            part,
        });
        self
    }

    /// Add a file part when present.
    pub fn file_opt(
        self,
        name: impl Into<String>,
        part: Option<FilePart>,
        default_type: Option<&str>,
    ) -> Self {
        match part {
            Some(part) => self.file(name, part, default_type),
            None => self,
        }
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.to_string(),
        });
        self
    }

    /// Add a text field when present.
    pub fn text_opt<V: Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Add a structured field serialized as JSON text.
    pub fn json<T: Serialize>(self, name: impl Into<String>, value: &T) -> Result<Self> {
        let text = serde_json::to_string(value)?;
        Ok(self.text(name, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_placeholders_are_encoded() {
        let desc = RequestDescriptor::new("svc", "op", Method::GET, "/v1/feedback/{feedback_id}")
            .path_param("feedback_id", "a b/c");
        assert_eq!(desc.rendered_path(), "/v1/feedback/a%20b%2Fc");
    }

    #[test]
    fn multiple_placeholders() {
        let desc = RequestDescriptor::new(
            "conversation",
            "message",
            Method::POST,
            "/v2/assistants/{assistant_id}/sessions/{session_id}/message",
        )
        .path_param("assistant_id", "asst")
        .path_param("session_id", "sess");
        assert_eq!(
            desc.rendered_path(),
            "/v2/assistants/asst/sessions/sess/message"
        );
    }

    #[test]
    fn optional_query_values_are_skipped() {
        let desc = RequestDescriptor::new("svc", "op", Method::GET, "/v1/batches")
            .query_opt("model_id", None::<&str>)
            .query_opt("cursor", Some("abc"))
            .query_list("tones", &["emotion", "language"]);
        assert_eq!(
            desc.query,
            vec![
                ("cursor".to_string(), "abc".to_string()),
                ("tones".to_string(), "emotion".to_string()),
                ("tones".to_string(), "language".to_string()),
            ]
        );
        assert_eq!(desc.query_value("model_id"), None);
    }

    #[test]
    fn file_parts_fall_back_to_octet_stream() {
        let form = Form::new()
            .file("a", FilePart::new("x"), None)
            .file("b", FilePart::new("y"), Some("text/csv"))
            .file("c", FilePart::new("z").content_type("image/png"), Some("text/csv"))
            .text_opt("skipped", None::<String>);

        let types: Vec<_> = form
            .fields
            .iter()
            .map(|f| match f {
                FormField::File { part, .. } => part.content_type.clone(),
                FormField::Text { .. } => None,
            })
            .collect();
        assert_eq!(
            types,
            vec![
                Some("application/octet-stream".to_string()),
                Some("text/csv".to_string()),
                Some("image/png".to_string()),
            ]
        );
    }

    #[test]
    fn file_part_from_path_uses_basename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let part = FilePart::from_path(&path).unwrap();
        assert_eq!(part.filename.as_deref(), Some("contract.pdf"));
        assert_eq!(part.data, b"%PDF");
    }
}
