//! Natural Language Classifier v1 types.

use serde::{Deserialize, Serialize};

use crate::request::FilePart;

/// Parameters for `classify`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyParams {
    /// Classifier id.
    pub classifier_id: String,
    /// Phrase to classify, at most 2048 characters.
    pub text: String,
}

impl ClassifyParams {
    /// Classify `text` with a classifier.
    pub fn new(classifier_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            text: text.into(),
        }
    }
}

/// Parameters for `classify_collection`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyCollectionParams {
    /// Classifier id.
    pub classifier_id: String,
    /// Phrases to classify, at most 30.
    pub collection: Vec<ClassifyInput>,
}

/// One phrase of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyInput {
    /// The phrase.
    pub text: String,
}

impl From<&str> for ClassifyInput {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Parameters for `create_classifier`.
#[derive(Debug, Clone, Default)]
pub struct CreateClassifierParams {
    /// JSON metadata with `language` and optional `name`.
    pub training_metadata: Option<FilePart>,
    /// CSV training data.
    pub training_data: Option<FilePart>,
}

/// Parameters for `list_classifiers`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListClassifiersParams {}

/// Parameters for `get_classifier` and `delete_classifier`.
#[derive(Debug, Clone, Default)]
pub struct ClassifierIdParams {
    /// Classifier id.
    pub classifier_id: String,
}

/// Parameters for `get_classifier`.
pub type GetClassifierParams = ClassifierIdParams;
/// Parameters for `delete_classifier`.
pub type DeleteClassifierParams = ClassifierIdParams;

/// A class with its confidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedClass {
    /// Confidence between 0 and 1.
    pub confidence: Option<f64>,
    /// Class name.
    pub class_name: Option<String>,
}

/// Result of `classify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    /// Classifier id.
    pub classifier_id: Option<String>,
    /// Classifier URL.
    pub url: Option<String>,
    /// The classified text.
    pub text: Option<String>,
    /// Class with the highest confidence.
    pub top_class: Option<String>,
    /// Classes in descending confidence order.
    pub classes: Vec<ClassifiedClass>,
}

/// Result of `classify_collection`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationCollection {
    /// Classifier id.
    pub classifier_id: Option<String>,
    /// Classifier URL.
    pub url: Option<String>,
    /// One item per input phrase.
    pub collection: Vec<CollectionItem>,
}

/// Classification of one phrase in a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItem {
    /// The phrase.
    pub text: Option<String>,
    /// Class with the highest confidence.
    pub top_class: Option<String>,
    /// Classes in descending confidence order.
    pub classes: Vec<ClassifiedClass>,
}

/// A classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifier {
    /// Name.
    pub name: Option<String>,
    /// Classifier URL.
    pub url: String,
    /// `Non Existent`, `Training`, `Failed`, `Available` or `Unavailable`.
    pub status: Option<String>,
    /// Classifier id.
    pub classifier_id: String,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Details about the status.
    pub status_description: Option<String>,
    /// Language of the training data.
    pub language: Option<String>,
}

/// Result of `list_classifiers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierList {
    /// Classifiers.
    pub classifiers: Vec<Classifier>,
}
