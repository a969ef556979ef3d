//! An async Rust client for the Watson family of REST APIs.
//!
//! Each service is a small client struct built with a builder. Every operation checks its
//! required parameters up front and returns a [`ServiceCall`]: await it for a
//! [`DetailedResponse`], or hand it a callback with [`ServiceCall::on_complete`].
//!
//! # Quick Start
//!
//! ```no_run
//! use watsonkit::{Credentials, Service};
//! use watsonkit::services::NaturalLanguageClassifierV1;
//! use watsonkit::types::natural_language_classifier::ClassifyParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let classifier = NaturalLanguageClassifierV1::builder()
//!     .credentials(Credentials::basic("username", "password"))
//!     .build()?;
//!
//! let response = classifier
//!     .classify(ClassifyParams::new("10D41B-nlc-1", "How hot will it be today?"))
//!     .await?;
//! println!("top class: {:?}", response.result.top_class);
//! # Ok(())
//! # }
//! ```
//!
//! # Per-call Headers
//!
//! Headers set on a call override everything else, including the `Accept` and
//! `Content-Type` an operation picks by default:
//!
//! ```no_run
//! # use watsonkit::{Credentials, Service};
//! # use watsonkit::services::PersonalityInsightsV3;
//! # use watsonkit::types::personality_insights::ProfileParams;
//! # async fn example() -> watsonkit::Result<()> {
//! # let service = PersonalityInsightsV3::builder()
//! #     .version("2017-10-13")
//! #     .credentials(Credentials::api_key("key"))
//! #     .build()?;
//! let profile = service
//!     .profile(ProfileParams::text("..."))
//!     .header("Content-Type", "text/plain; charset=utf-8")
//!     .header("Accept-Language", "es")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Services
//!
//! - [`services::AssistantV2`] - Conversational sessions
//! - [`services::AuthorizationV1`] - Watson tokens
//! - [`services::CompareComplyV1`] - Contract conversion, classification and comparison
//! - [`services::LanguageTranslatorV3`] - Translation and language identification
//! - [`services::NaturalLanguageClassifierV1`] - Short-text classification
//! - [`services::NaturalLanguageUnderstandingV1`] - Text analysis: entities, keywords, sentiment
//! - [`services::PersonalityInsightsV3`] - Personality profiles
//! - [`services::SpeechToTextV1`] - Speech recognition over HTTP
//! - [`services::TextToSpeechV1`] - Speech synthesis and custom voices
//! - [`services::ToneAnalyzerV3`] - Tone analysis
//! - [`services::VisualRecognitionV3`] - Image classification

pub mod call;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod headers;
pub mod request;
pub mod response;
pub mod service;
pub mod services;
pub mod types;
pub mod validate;

pub use call::ServiceCall;
pub use config::{Credentials, ServiceBuilder, ServiceConfig};
pub use dispatch::{Dispatcher, HttpDispatcher};
pub use error::{Error, Result};
pub use request::{FilePart, Form, FormField, RequestBody, RequestDescriptor};
pub use response::{DetailedResponse, Empty, RawResponse};
pub use service::{Service, ServiceCore};
