//! Error types for the watsonkit crate.
//!
//! Two families of errors reach the caller:
//!
//! - [`Error::MissingParams`]: a required parameter was absent. This is raised while the
//!   call is being built, before anything touches the network.
//! - Everything else comes from the dispatcher (transport failures, non-2xx replies,
//!   undecodable bodies) and is relayed unchanged.
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, Error, Service};
//! use watsonkit::services::CompareComplyV1;
//! use watsonkit::types::compare_comply::GetFeedbackParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let service = CompareComplyV1::builder()
//!     .version("2018-10-15")
//!     .credentials(Credentials::basic("user", "pass"))
//!     .build()?;
//!
//! match service.get_feedback(GetFeedbackParams::default()).await {
//!     Ok(response) => println!("{:?}", response.result),
//!     Err(Error::MissingParams(names)) => eprintln!("forgot: {}", names.join(", ")),
//!     Err(Error::Unauthorized { .. }) => eprintln!("check your credentials"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// The error type for Watson service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required parameters were absent or empty.
    ///
    /// The names are the wire names of the fields, in the order the operation declares them.
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParams(Vec<String>),

    /// HTTP/network error from reqwest.
    ///
    /// For refused connections, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service host could not be reached.
    #[error("Could not connect to the service. Check the configured URL.")]
    ConnectionRefused,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-2xx status, or a 2xx body carrying an error.
    ///
    /// `message` is extracted from the error body when the service sent a recognisable
    /// shape; `body` keeps the raw text.
    #[error("{message} (status {status})")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Human readable message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The service rejected the credentials (401 or 403).
    #[error("Unauthorized: Access is denied due to invalid credentials.")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A header name or value supplied by the caller was not valid.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of the failure, when the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } | Error::Unauthorized { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A specialized Result type for Watson service operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_message_lists_names() {
        let err = Error::MissingParams(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Missing required parameters: a, b");
    }

    #[test]
    fn status_is_exposed_for_service_errors() {
        let err = Error::Service {
            status: 404,
            message: "Not found".into(),
            body: String::new(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(Error::ConnectionRefused.status(), None);
    }
}
