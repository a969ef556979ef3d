//! Parameter structs and response models, one module per service.
//!
//! Parameter structs derive `Default`; required fields are checked when an operation is
//! called, not when the struct is built. Response models tolerate missing fields.

pub mod assistant;
pub mod authorization;
pub mod compare_comply;
pub mod language_translator;
pub mod natural_language_classifier;
pub mod natural_language_understanding;
pub mod personality_insights;
pub mod speech_to_text;
pub mod text_to_speech;
pub mod tone_analyzer;
pub mod visual_recognition;
