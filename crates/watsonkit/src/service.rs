//! Shared plumbing embedded in every service client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::call::ServiceCall;
use crate::config::{ServiceBuilder, ServiceConfig};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::headers::{merge_headers, sdk_headers};
use crate::request::RequestDescriptor;
use crate::response::{Decoder, RawResponse, decode_bytes, decode_json, decode_text};

/// A Watson service client.
///
/// Implementors are thin wrappers around a [`ServiceCore`]; the constants drive the
/// builder and the SDK headers.
pub trait Service: Sized {
    /// Service name used for analytics, e.g. `compare-comply`.
    const NAME: &'static str;
    /// API generation, e.g. `v1`.
    const SERVICE_VERSION: &'static str;
    /// Base URL used when none is configured.
    const DEFAULT_URL: &'static str;
    /// Whether `build()` insists on a version date. Unversioned services never send one.
    const REQUIRES_VERSION: bool;

    /// Wrap a configured core.
    fn from_core(core: ServiceCore) -> Self;

    /// Access the core.
    fn core(&self) -> &ServiceCore;

    /// Create a builder for this service.
    fn builder() -> ServiceBuilder<Self> {
        ServiceBuilder::new()
    }
}

/// Configuration plus dispatcher, shared read-only by every call on a service.
#[derive(Debug, Clone)]
pub struct ServiceCore {
    config: Arc<ServiceConfig>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl ServiceCore {
    /// Combine a configuration with a dispatcher.
    pub fn new(config: ServiceConfig, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// The service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// A copy of this core pointed at another base URL.
    pub(crate) fn with_url(&self, url: String) -> Self {
        let mut config = ServiceConfig::clone(&self.config);
        config.url = url;
        Self {
            config: Arc::new(config),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }

    /// Build a call whose result is decoded from JSON.
    pub(crate) fn json<T>(&self, build: impl FnOnce() -> Result<RequestDescriptor>) -> ServiceCall<T>
    where
        T: DeserializeOwned,
    {
        self.call(build, decode_json::<T>)
    }

    /// Build a call whose result is the raw body.
    pub(crate) fn bytes(
        &self,
        build: impl FnOnce() -> Result<RequestDescriptor>,
    ) -> ServiceCall<Vec<u8>> {
        self.call(build, decode_bytes)
    }

    /// Build a call whose result is the body as text.
    pub(crate) fn text(
        &self,
        build: impl FnOnce() -> Result<RequestDescriptor>,
    ) -> ServiceCall<String> {
        self.call(build, decode_text)
    }

    fn call<T>(
        &self,
        build: impl FnOnce() -> Result<RequestDescriptor>,
        decode: Decoder<T>,
    ) -> ServiceCall<T> {
        match build() {
            Ok(descriptor) => ServiceCall::ready(self.clone(), self.finish(descriptor), decode),
            Err(err) => {
                debug!(service = self.config.service_name, error = %err, "request not sent");
                ServiceCall::failed(err, decode)
            }
        }
    }

    /// Merge configured defaults and SDK headers underneath the operation's own headers.
    fn finish(&self, mut descriptor: RequestDescriptor) -> RequestDescriptor {
        let sdk = sdk_headers(
            self.config.service_name,
            self.config.service_version,
            descriptor.operation,
        );
        descriptor.headers = merge_headers(&[
            &self.config.default_headers,
            &sdk,
            &descriptor.headers,
        ]);
        descriptor
    }

    pub(crate) async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<RawResponse> {
        self.dispatcher.dispatch(&self.config, descriptor).await
    }
}
