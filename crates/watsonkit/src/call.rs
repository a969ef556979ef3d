//! The value returned by every service operation.
//!
//! A [`ServiceCall`] is built synchronously: parameters are validated and the request
//! descriptor is assembled before the method returns. Nothing is sent until the call is
//! awaited, or handed a callback with [`ServiceCall::on_complete`].
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, Service};
//! use watsonkit::services::CompareComplyV1;
//! use watsonkit::types::compare_comply::ListBatchesParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let service = CompareComplyV1::builder()
//!     .version("2018-10-15")
//!     .credentials(Credentials::api_key("key"))
//!     .build()?;
//!
//! // Future style
//! let batches = service.list_batches(None).await?.into_result();
//!
//! // Callback style
//! service
//!     .list_batches(Some(ListBatchesParams::default()))
//!     .header("X-Request-Id", "abc")
//!     .on_complete(|result| match result {
//!         Ok(response) => println!("{} batches", response.result.batches.len()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     });
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::IntoFuture;

use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::headers::override_headers;
use crate::request::RequestDescriptor;
use crate::response::{DetailedResponse, Decoder};
use crate::service::ServiceCore;

enum CallState {
    Failed(Error),
    Ready {
        core: ServiceCore,
        descriptor: RequestDescriptor,
    },
}

/// A prepared (or already failed) request for one operation.
#[must_use = "a ServiceCall does nothing until it is awaited or given a callback"]
pub struct ServiceCall<T> {
    state: CallState,
    decode: Decoder<T>,
}

impl<T> ServiceCall<T> {
    pub(crate) fn ready(core: ServiceCore, descriptor: RequestDescriptor, decode: Decoder<T>) -> Self {
        Self {
            state: CallState::Ready { core, descriptor },
            decode,
        }
    }

    pub(crate) fn failed(error: Error, decode: Decoder<T>) -> Self {
        Self {
            state: CallState::Failed(error),
            decode,
        }
    }

    /// Set a header for this call only. Caller headers override the operation's defaults.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        HeaderValue: TryFrom<V>,
    {
        let CallState::Ready { descriptor, .. } = &mut self.state else {
            return self;
        };
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                descriptor.headers.insert(name, value);
            }
            _ => {
                let operation = descriptor.operation;
                self.state = CallState::Failed(Error::InvalidHeader(format!(
                    "invalid header for {operation}"
                )));
            }
        }
        self
    }

    /// Set several headers for this call only.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        if let CallState::Ready { descriptor, .. } = &mut self.state {
            override_headers(&mut descriptor.headers, &headers);
        }
        self
    }

    /// The request that will be sent, or `None` if validation failed.
    pub fn descriptor(&self) -> Option<&RequestDescriptor> {
        match &self.state {
            CallState::Ready { descriptor, .. } => Some(descriptor),
            CallState::Failed(_) => None,
        }
    }

    /// The error that stopped this call from being built, if any.
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            CallState::Failed(err) => Some(err),
            CallState::Ready { .. } => None,
        }
    }

    /// Dispatch the request and decode the reply.
    pub async fn send(self) -> Result<DetailedResponse<T>> {
        match self.state {
            CallState::Failed(err) => Err(err),
            CallState::Ready { core, descriptor } => {
                let raw = core.dispatch(descriptor).await?;
                let result = (self.decode)(raw.body)?;
                Ok(DetailedResponse {
                    result,
                    status: raw.status,
                    headers: raw.headers,
                })
            }
        }
    }
}

impl<T: Send + 'static> ServiceCall<T> {
    /// Run the call and pass its outcome to `callback`.
    ///
    /// If the call already failed validation the callback runs immediately, on the
    /// current thread, and `None` is returned. Otherwise the request is spawned on the
    /// current tokio runtime and its handle is returned. Outside a runtime the callback
    /// receives [`Error::Config`] and nothing is sent.
    pub fn on_complete<F>(self, callback: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Result<DetailedResponse<T>>) + Send + 'static,
    {
        match self.state {
            CallState::Failed(err) => {
                callback(Err(err));
                None
            }
            ready @ CallState::Ready { .. } => match Handle::try_current() {
                Ok(handle) => {
                    let call = ServiceCall {
                        state: ready,
                        decode: self.decode,
                    };
                    Some(handle.spawn(async move { callback(call.send().await) }))
                }
                Err(_) => {
                    callback(Err(Error::Config("no tokio runtime".to_string())));
                    None
                }
            },
        }
    }
}

impl<T: Send + 'static> IntoFuture for ServiceCall<T> {
    type Output = Result<DetailedResponse<T>>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

impl<T> fmt::Debug for ServiceCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            CallState::Failed(err) => f.debug_tuple("ServiceCall::Failed").field(err).finish(),
            CallState::Ready { descriptor, .. } => f
                .debug_struct("ServiceCall::Ready")
                .field("method", &descriptor.method)
                .field("path", &descriptor.path)
                .finish(),
        }
    }
}
