//! Common test utilities for Watson service tests.

#![allow(dead_code)] // Not all test files use every helper

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::Serialize;
use watsonkit::{
    Credentials, Dispatcher, Error, RawResponse, RequestDescriptor, Result, Service,
    ServiceCall, ServiceConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Version date used by every versioned test client.
pub const VERSION: &str = "2018-10-15";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Install a test subscriber once; `RUST_LOG=watsonkit=debug` shows dispatch events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A JSON success response.
pub fn json_response<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// A JSON error response in the service's usual shape.
pub fn error_response(status: u16, error: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "code": status,
        "error": error
    }))
}

/// Mount a mock for one method and path, expected exactly once.
pub async fn mock_endpoint(
    server: &MockServer,
    http_method: &str,
    endpoint: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Build a service against a mock server with basic credentials.
pub fn client_for<S: Service>(server: &MockServer) -> S {
    S::builder()
        .url(server.uri())
        .version(VERSION)
        .credentials(Credentials::basic("user", "pass"))
        .build()
        .unwrap()
}

/// Dispatcher that records descriptors instead of sending them.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    requests: Mutex<Vec<RequestDescriptor>>,
    body: Vec<u8>,
}

impl RecordingDispatcher {
    /// Reply to every request with `body` as JSON.
    pub fn replying<T: Serialize>(body: T) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    /// Number of requests dispatched so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every dispatched request, oldest first.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recently dispatched request.
    pub fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(
        &self,
        _config: &ServiceConfig,
        descriptor: RequestDescriptor,
    ) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(descriptor);
        Ok(RawResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: self.body.clone(),
        })
    }
}

/// Build a service wired to a fresh recording dispatcher replying `{}`.
pub fn recorded<S: Service>() -> (S, Arc<RecordingDispatcher>) {
    recorded_with(serde_json::json!({}))
}

/// Build a service wired to a recording dispatcher replying with `body`.
pub fn recorded_with<S: Service, T: Serialize>(body: T) -> (S, Arc<RecordingDispatcher>) {
    let dispatcher = Arc::new(RecordingDispatcher::replying(body));
    let service = S::builder()
        .version(VERSION)
        .credentials(Credentials::Unauthenticated)
        .dispatcher(dispatcher.clone())
        .build()
        .unwrap();
    (service, dispatcher)
}

/// Header value as a string, for assertions.
pub fn header<'a>(descriptor: &'a RequestDescriptor, name: &str) -> Option<&'a str> {
    descriptor
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Names reported by a call that failed validation.
pub fn missing_names<T>(call: &ServiceCall<T>) -> Vec<String> {
    match call.error() {
        Some(Error::MissingParams(names)) => names.clone(),
        other => panic!("expected missing params, got {other:?}"),
    }
}
