//! Service clients.
//!
//! Each client wraps a [`ServiceCore`](crate::ServiceCore) and is created with
//! `Client::builder()`. Operations validate their parameters and return a
//! [`ServiceCall`](crate::ServiceCall).

mod assistant;
mod authorization;
mod compare_comply;
mod language_translator;
mod natural_language_classifier;
mod natural_language_understanding;
mod personality_insights;
mod speech_to_text;
mod text_to_speech;
mod tone_analyzer;
mod visual_recognition;

pub use assistant::AssistantV2;
pub use authorization::AuthorizationV1;
pub use compare_comply::CompareComplyV1;
pub use language_translator::LanguageTranslatorV3;
pub use natural_language_classifier::NaturalLanguageClassifierV1;
pub use natural_language_understanding::NaturalLanguageUnderstandingV1;
pub use personality_insights::PersonalityInsightsV3;
pub use speech_to_text::SpeechToTextV1;
pub use text_to_speech::TextToSpeechV1;
pub use tone_analyzer::ToneAnalyzerV3;
pub use visual_recognition::VisualRecognitionV3;
