//! Compare and Comply parameter and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::FilePart;
use crate::validate::Presence;

/// Analysis models accepted by the `model_id` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Contract analysis (default for element classification and comparison).
    Contracts,
    /// Table extraction (default for `/v1/tables`).
    Tables,
}

impl Model {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Contracts => "contracts",
            Model::Tables => "tables",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Methods a batch can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchFunction {
    /// Convert every document to HTML.
    HtmlConversion,
    /// Classify document elements.
    ElementClassification,
    /// Extract tables.
    Tables,
}

impl std::fmt::Display for BatchFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BatchFunction::HtmlConversion => "html_conversion",
            BatchFunction::ElementClassification => "element_classification",
            BatchFunction::Tables => "tables",
        })
    }
}

/// Actions accepted by `update_batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchAction {
    /// Rescan the input bucket.
    Rescan,
    /// Cancel the batch.
    Cancel,
}

impl std::fmt::Display for BatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BatchAction::Rescan => "rescan",
            BatchAction::Cancel => "cancel",
        })
    }
}

/// Parameters shared by the single-document analysis operations
/// (`convert_to_html`, `classify_elements`, `extract_tables`).
#[derive(Debug, Clone, Default)]
pub struct DocumentParams {
    /// The file to analyze.
    pub file: Option<FilePart>,
    /// Filename for `file`; overrides the part's own filename.
    pub filename: Option<String>,
    /// Content type of `file`; overrides the part's own content type.
    pub file_content_type: Option<String>,
    /// The analysis model.
    pub model_id: Option<Model>,
}

impl DocumentParams {
    /// Create params for a file.
    pub fn new(file: impl Into<FilePart>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Set the filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the file content type.
    pub fn file_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.file_content_type = Some(content_type.into());
        self
    }

    /// Set the analysis model.
    pub fn model_id(mut self, model: Model) -> Self {
        self.model_id = Some(model);
        self
    }
}

/// Parameters for `convert_to_html`.
pub type ConvertToHtmlParams = DocumentParams;
/// Parameters for `classify_elements`.
pub type ClassifyElementsParams = DocumentParams;
/// Parameters for `extract_tables`.
pub type ExtractTablesParams = DocumentParams;

/// Parameters for `compare_documents`.
#[derive(Debug, Clone, Default)]
pub struct CompareDocumentsParams {
    /// The first file to compare.
    pub file_1: Option<FilePart>,
    /// The second file to compare.
    pub file_2: Option<FilePart>,
    /// A text label for the first file.
    pub file_1_label: Option<String>,
    /// A text label for the second file.
    pub file_2_label: Option<String>,
    /// The analysis model.
    pub model_id: Option<Model>,
    /// Content type of `file_1`.
    pub file_1_content_type: Option<String>,
    /// Filename for `file_1`.
    pub file_1_filename: Option<String>,
    /// Content type of `file_2`.
    pub file_2_content_type: Option<String>,
    /// Filename for `file_2`.
    pub file_2_filename: Option<String>,
}

/// Parameters for `add_feedback`.
#[derive(Debug, Clone, Default)]
pub struct AddFeedbackParams {
    /// Feedback data for submission.
    pub feedback_data: Option<FeedbackDataInput>,
    /// An optional string identifying the user.
    pub user_id: Option<String>,
    /// An optional comment on the feedback.
    pub comment: Option<String>,
}

/// Parameters for `list_feedback`. Every field is an optional filter.
#[derive(Debug, Clone, Default)]
pub struct ListFeedbackParams {
    /// `element_classification` is the only valid value.
    pub feedback_type: Option<String>,
    /// Only feedback created before this date (`YYYY-MM-DD`).
    pub before: Option<String>,
    /// Only feedback created after this date (`YYYY-MM-DD`).
    pub after: Option<String>,
    /// Document title.
    pub document_title: Option<String>,
    /// Model id.
    pub model_id: Option<String>,
    /// Model version.
    pub model_version: Option<String>,
    /// Comma-separated categories removed by feedback.
    pub category_removed: Option<String>,
    /// Comma-separated categories added by feedback.
    pub category_added: Option<String>,
    /// Comma-separated categories left unchanged.
    pub category_not_changed: Option<String>,
    /// Comma-separated nature/party types removed.
    pub type_removed: Option<String>,
    /// Comma-separated nature/party types added.
    pub type_added: Option<String>,
    /// Comma-separated nature/party types left unchanged.
    pub type_not_changed: Option<String>,
    /// Maximum number of results per page.
    pub page_limit: Option<u32>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Comma-separated sort fields.
    pub sort: Option<String>,
    /// Include the total count in the pagination block.
    pub include_total: Option<bool>,
}

/// Parameters for `get_feedback` and `delete_feedback`.
#[derive(Debug, Clone, Default)]
pub struct FeedbackIdParams {
    /// Feedback id.
    pub feedback_id: String,
    /// The analysis model.
    pub model_id: Option<Model>,
}

impl FeedbackIdParams {
    /// Create params for a feedback id.
    pub fn new(feedback_id: impl Into<String>) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            model_id: None,
        }
    }
}

/// Parameters for `get_feedback`.
pub type GetFeedbackParams = FeedbackIdParams;
/// Parameters for `delete_feedback`.
pub type DeleteFeedbackParams = FeedbackIdParams;

/// Parameters for `create_batch`.
#[derive(Debug, Clone, Default)]
pub struct CreateBatchParams {
    /// The method to run across the input documents.
    pub function: Option<BatchFunction>,
    /// JSON credentials file for the input bucket.
    pub input_credentials_file: Option<FilePart>,
    /// Input bucket location, e.g. `us-geo`.
    pub input_bucket_location: String,
    /// Input bucket name.
    pub input_bucket_name: String,
    /// JSON credentials file for the output bucket.
    pub output_credentials_file: Option<FilePart>,
    /// Output bucket location.
    pub output_bucket_location: String,
    /// Output bucket name.
    pub output_bucket_name: String,
    /// The analysis model.
    pub model_id: Option<Model>,
    /// Filename for the input credentials file.
    pub input_credentials_filename: Option<String>,
    /// Filename for the output credentials file.
    pub output_credentials_filename: Option<String>,
}

/// Parameters for `list_batches`. The operation takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct ListBatchesParams {}

/// Parameters for `get_batch`.
#[derive(Debug, Clone, Default)]
pub struct GetBatchParams {
    /// Batch id.
    pub batch_id: String,
}

/// Parameters for `update_batch`.
#[derive(Debug, Clone, Default)]
pub struct UpdateBatchParams {
    /// Batch id.
    pub batch_id: String,
    /// Action to perform.
    pub action: Option<BatchAction>,
    /// The analysis model.
    pub model_id: Option<Model>,
}

/// Feedback submitted for a document element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataInput {
    /// Always `element_classification`.
    pub feedback_type: String,
    /// Brief information about the input document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,
    /// Model id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Element location as `{begin, end}`.
    pub location: Location,
    /// Element text.
    pub text: String,
    /// Labels before the feedback.
    pub original_labels: Value,
    /// Labels after the feedback.
    pub updated_labels: Value,
}

/// Character offsets of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Start offset.
    pub begin: u64,
    /// End offset.
    pub end: u64,
}

/// Result of `convert_to_html`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlReturn {
    /// Number of pages.
    pub num_pages: Option<String>,
    /// Author.
    pub author: Option<String>,
    /// Publication date.
    pub publication_date: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// The HTML version of the document.
    pub html: Option<String>,
}

/// Result of `classify_elements`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyReturn {
    /// Document information.
    pub document: Option<Value>,
    /// Model id.
    pub model_id: Option<String>,
    /// Model version.
    pub model_version: Option<String>,
    /// Classified elements.
    pub elements: Vec<Value>,
    /// Tables found in the document.
    pub tables: Vec<Value>,
    /// Document structure.
    pub document_structure: Option<Value>,
    /// Contract parties.
    pub parties: Vec<Value>,
    /// Effective dates.
    pub effective_dates: Vec<Value>,
    /// Contract amounts.
    pub contract_amounts: Vec<Value>,
    /// Termination dates.
    pub termination_dates: Vec<Value>,
}

/// Result of `extract_tables`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableReturn {
    /// Document information.
    pub document: Option<Value>,
    /// Model id.
    pub model_id: Option<String>,
    /// Model version.
    pub model_version: Option<String>,
    /// Extracted tables.
    pub tables: Vec<Value>,
}

/// Result of `compare_documents`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareReturn {
    /// Model id.
    pub model_id: Option<String>,
    /// Model version.
    pub model_version: Option<String>,
    /// Information about both documents.
    pub documents: Vec<Value>,
    /// Elements aligned between the documents.
    pub aligned_elements: Vec<Value>,
    /// Elements present in only one document.
    pub unaligned_elements: Vec<Value>,
}

/// Stored feedback, as returned by `add_feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackReturn {
    /// Feedback id.
    pub feedback_id: Option<String>,
    /// User id.
    pub user_id: Option<String>,
    /// Comment.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// The feedback data.
    pub feedback_data: Option<Value>,
}

/// One feedback entry, as returned by `get_feedback` and `list_feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFeedback {
    /// Feedback id.
    pub feedback_id: Option<String>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Comment.
    pub comment: Option<String>,
    /// The feedback data.
    pub feedback_data: Option<Value>,
}

/// Result of `list_feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackList {
    /// Feedback entries.
    pub feedback: Vec<GetFeedback>,
    /// Pagination information.
    pub pagination: Option<Pagination>,
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Cursor to refresh the current page.
    pub refresh_cursor: Option<String>,
    /// Cursor for the next page.
    pub next_cursor: Option<String>,
    /// URL to refresh the current page.
    pub refresh_url: Option<String>,
    /// URL of the next page.
    pub next_url: Option<String>,
    /// Total number of entries.
    pub total: Option<u64>,
}

/// Result of `delete_feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackDeleted {
    /// HTTP status echoed by the service.
    pub status: Option<u16>,
    /// Status message.
    pub message: Option<String>,
}

/// Status of a batch-processing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchStatus {
    /// The method run against the documents.
    pub function: Option<String>,
    /// Input bucket location.
    pub input_bucket_location: Option<String>,
    /// Input bucket name.
    pub input_bucket_name: Option<String>,
    /// Output bucket location.
    pub output_bucket_location: Option<String>,
    /// Output bucket name.
    pub output_bucket_name: Option<String>,
    /// Batch id.
    pub batch_id: Option<String>,
    /// Document counts by state.
    pub document_counts: Option<DocCounts>,
    /// Batch status.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Last update timestamp.
    pub updated: Option<String>,
}

/// Document counts of a batch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocCounts {
    /// Total documents.
    pub total: Option<u64>,
    /// Documents still pending.
    pub pending: Option<u64>,
    /// Documents processed successfully.
    pub successful: Option<u64>,
    /// Documents that failed.
    pub failed: Option<u64>,
}

/// Result of `list_batches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Batches {
    /// Batches.
    pub batches: Vec<BatchStatus>,
}

impl Presence for BatchFunction {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for BatchAction {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for FeedbackDataInput {
    fn is_present(&self) -> bool {
        true
    }
}
