//! Visual Recognition v3 types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::FilePart;

/// Parameters for `classify`. Every field is optional, though the service needs either
/// `images_file` or `url`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyParams {
    /// An image, or a zip of up to 20 images.
    pub images_file: Option<FilePart>,
    /// Filename for `images_file`.
    pub images_filename: Option<String>,
    /// Content type of `images_file`.
    pub images_file_content_type: Option<String>,
    /// URL of an image to classify.
    pub url: Option<String>,
    /// Minimum score for a class to be returned.
    pub threshold: Option<f32>,
    /// Classifier owners to apply: `IBM`, `me`, or both.
    pub owners: Vec<String>,
    /// Classifiers to apply. Takes precedence over `owners`.
    pub classifier_ids: Vec<String>,
    /// Language of the class names in the response.
    pub accept_language: Option<String>,
}

impl ClassifyParams {
    /// Classify the image at `url`.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Classify an uploaded image.
    pub fn file(image: impl Into<FilePart>) -> Self {
        Self {
            images_file: Some(image.into()),
            ..Self::default()
        }
    }
}

/// Parameters for `create_classifier`.
#[derive(Debug, Clone, Default)]
pub struct CreateClassifierParams {
    /// Classifier name.
    pub name: String,
    /// Zip of positive examples per class name. Each becomes a
    /// `<class>_positive_examples` part.
    pub positive_examples: BTreeMap<String, FilePart>,
    /// Zip of images that match none of the classes.
    pub negative_examples: Option<FilePart>,
    /// Filename for `negative_examples`.
    pub negative_examples_filename: Option<String>,
}

/// Parameters for `update_classifier`.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassifierParams {
    /// Classifier id.
    pub classifier_id: String,
    /// Zip of positive examples per class name, new or existing.
    pub positive_examples: BTreeMap<String, FilePart>,
    /// Zip of negative examples.
    pub negative_examples: Option<FilePart>,
    /// Filename for `negative_examples`.
    pub negative_examples_filename: Option<String>,
}

/// Parameters for `list_classifiers`.
#[derive(Debug, Clone, Default)]
pub struct ListClassifiersParams {
    /// Return full classifier details.
    pub verbose: Option<bool>,
}

/// Parameters for `get_classifier`, `delete_classifier` and `get_core_ml_model`.
#[derive(Debug, Clone, Default)]
pub struct ClassifierIdParams {
    /// Classifier id.
    pub classifier_id: String,
}

/// Parameters for `get_classifier`.
pub type GetClassifierParams = ClassifierIdParams;
/// Parameters for `delete_classifier`.
pub type DeleteClassifierParams = ClassifierIdParams;
/// Parameters for `get_core_ml_model`.
pub type GetCoreMlModelParams = ClassifierIdParams;

/// Parameters for `delete_user_data`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataParams {
    /// Customer id whose data is deleted.
    pub customer_id: String,
}

/// Result of `classify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedImages {
    /// Custom classes identified.
    pub custom_classes: Option<u64>,
    /// Images processed.
    pub images_processed: Option<u64>,
    /// One entry per image.
    pub images: Vec<ClassifiedImage>,
    /// Warnings.
    pub warnings: Vec<WarningInfo>,
}

/// Results for one image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedImage {
    /// Source URL, if the image came from a URL.
    pub source_url: Option<String>,
    /// URL after redirects.
    pub resolved_url: Option<String>,
    /// Filename within an uploaded zip.
    pub image: Option<String>,
    /// Error for this image.
    pub error: Option<ErrorInfo>,
    /// Results per classifier.
    pub classifiers: Vec<ClassifierResult>,
}

/// Results of one classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierResult {
    /// Classifier name.
    pub name: String,
    /// Classifier id.
    pub classifier_id: String,
    /// Matching classes.
    pub classes: Vec<ClassResult>,
}

/// A matching class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassResult {
    /// Class name.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Confidence between 0 and 1.
    pub score: f64,
    /// Hierarchy path, e.g. `/fruit/apple`.
    pub type_hierarchy: Option<String>,
}

/// Error for one image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorInfo {
    /// HTTP status.
    pub code: u16,
    /// Description.
    pub description: String,
    /// Error id.
    pub error_id: String,
}

/// A non-fatal warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningInfo {
    /// Warning id.
    pub warning_id: String,
    /// Description.
    pub description: String,
}

/// A custom classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifier {
    /// Classifier id.
    pub classifier_id: String,
    /// Name.
    pub name: String,
    /// Owner.
    pub owner: Option<String>,
    /// `ready`, `training`, `retraining` or `failed`.
    pub status: Option<String>,
    /// Whether a Core ML model is available.
    pub core_ml_enabled: Option<bool>,
    /// Reason for a failed status.
    pub explanation: Option<String>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Classes.
    pub classes: Vec<Class>,
    /// Last retraining timestamp.
    pub retrained: Option<String>,
    /// Last update timestamp.
    pub updated: Option<String>,
}

/// A class of a custom classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Class {
    /// Class name.
    #[serde(rename = "class")]
    pub class_name: String,
}

/// Result of `list_classifiers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifiers {
    /// Classifiers.
    pub classifiers: Vec<Classifier>,
}
