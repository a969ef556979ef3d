//! Compare and Comply: contract analysis, comparison and batch processing.
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, FilePart, Service};
//! use watsonkit::services::CompareComplyV1;
//! use watsonkit::types::compare_comply::ConvertToHtmlParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let service = CompareComplyV1::builder()
//!     .version("2018-10-15")
//!     .credentials(Credentials::api_key("key"))
//!     .build()?;
//!
//! let file = FilePart::from_path("contract.pdf")?;
//! let html = service
//!     .convert_to_html(ConvertToHtmlParams::new(file))
//!     .await?
//!     .into_result();
//! println!("{}", html.html.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::error::Result;
use crate::headers::negotiation;
use crate::request::{FilePart, Form, RequestDescriptor};
use crate::service::{Service, ServiceCore};
use crate::types::compare_comply::{
    AddFeedbackParams, BatchStatus, Batches, ClassifyElementsParams, ClassifyReturn,
    CompareDocumentsParams, CompareReturn, ConvertToHtmlParams, CreateBatchParams,
    DeleteFeedbackParams, DocumentParams, ExtractTablesParams, FeedbackDataInput,
    FeedbackDeleted, FeedbackList, FeedbackReturn, GetBatchParams, GetFeedback,
    GetFeedbackParams, HtmlReturn, ListBatchesParams, ListFeedbackParams, TableReturn,
    UpdateBatchParams,
};
use crate::validate::require;

const NAME: &str = "compare-comply";
const JSON: &str = "application/json";
const MULTIPART: &str = "multipart/form-data";

/// Client for the Compare and Comply v1 API.
#[derive(Debug, Clone)]
pub struct CompareComplyV1 {
    core: ServiceCore,
}

impl Service for CompareComplyV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/compare-comply/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct AddFeedbackBody {
    feedback_data: FeedbackDataInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

/// Apply the separate filename and content type overrides to an uploaded file.
fn with_overrides(
    part: Option<FilePart>,
    filename: Option<String>,
    content_type: Option<String>,
) -> FilePart {
    let mut part = part.unwrap_or_default();
    if filename.is_some() {
        part.filename = filename;
    }
    if content_type.is_some() {
        part.content_type = content_type;
    }
    part
}

impl CompareComplyV1 {
    fn document(
        &self,
        operation: &'static str,
        path: &'static str,
        params: DocumentParams,
    ) -> Result<RequestDescriptor> {
        require!(params; file)?;
        let file = with_overrides(params.file, params.filename, params.file_content_type);
        Ok(RequestDescriptor::new(NAME, operation, Method::POST, path)
            .query_opt("model_id", params.model_id)
            .form(Form::new().file("file", file, None))
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(MULTIPART)),
            ])?))
    }

    /// Convert a document to HTML.
    pub fn convert_to_html(&self, params: ConvertToHtmlParams) -> ServiceCall<HtmlReturn> {
        self.core
            .json(move || self.document("convertToHtml", "/v1/html_conversion", params))
    }

    /// Analyze a document's structural and semantic elements.
    pub fn classify_elements(&self, params: ClassifyElementsParams) -> ServiceCall<ClassifyReturn> {
        self.core.json(move || {
            self.document("classifyElements", "/v1/element_classification", params)
        })
    }

    /// Extract the tables of a document.
    pub fn extract_tables(&self, params: ExtractTablesParams) -> ServiceCall<TableReturn> {
        self.core
            .json(move || self.document("extractTables", "/v1/tables", params))
    }

    /// Compare two contracts.
    pub fn compare_documents(&self, params: CompareDocumentsParams) -> ServiceCall<CompareReturn> {
        self.core.json(move || {
            require!(params; file_1, file_2)?;
            let file_1 = with_overrides(
                params.file_1,
                params.file_1_filename,
                params.file_1_content_type,
            );
            let file_2 = with_overrides(
                params.file_2,
                params.file_2_filename,
                params.file_2_content_type,
            );
            Ok(
                RequestDescriptor::new(NAME, "compareDocuments", Method::POST, "/v1/comparison")
                    .query_opt("file_1_label", params.file_1_label)
                    .query_opt("file_2_label", params.file_2_label)
                    .query_opt("model_id", params.model_id)
                    .form(
                        Form::new()
                            .file("file_1", file_1, None)
                            .file("file_2", file_2, None),
                    )
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                    ])?),
            )
        })
    }

    /// Submit feedback on an element classification.
    pub fn add_feedback(&self, params: AddFeedbackParams) -> ServiceCall<FeedbackReturn> {
        self.core.json(move || {
            require!(params; feedback_data)?;
            let body = AddFeedbackBody {
                feedback_data: params.feedback_data.unwrap_or_default(),
                user_id: params.user_id,
                comment: params.comment,
            };
            Ok(
                RequestDescriptor::new(NAME, "addFeedback", Method::POST, "/v1/feedback")
                    .json(&body)?
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(JSON)),
                    ])?),
            )
        })
    }

    /// List feedback, optionally filtered.
    pub fn list_feedback(&self, params: Option<ListFeedbackParams>) -> ServiceCall<FeedbackList> {
        let params = params.unwrap_or_default();
        self.core.json(move || {
            Ok(
                RequestDescriptor::new(NAME, "listFeedback", Method::GET, "/v1/feedback")
                    .query_opt("feedback_type", params.feedback_type)
                    .query_opt("before", params.before)
                    .query_opt("after", params.after)
                    .query_opt("document_title", params.document_title)
                    .query_opt("model_id", params.model_id)
                    .query_opt("model_version", params.model_version)
                    .query_opt("category_removed", params.category_removed)
                    .query_opt("category_added", params.category_added)
                    .query_opt("category_not_changed", params.category_not_changed)
                    .query_opt("type_removed", params.type_removed)
                    .query_opt("type_added", params.type_added)
                    .query_opt("type_not_changed", params.type_not_changed)
                    .query_opt("page_limit", params.page_limit)
                    .query_opt("cursor", params.cursor)
                    .query_opt("sort", params.sort)
                    .query_opt("include_total", params.include_total)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Get one feedback entry.
    pub fn get_feedback(&self, params: GetFeedbackParams) -> ServiceCall<GetFeedback> {
        self.core.json(move || {
            require!(params; feedback_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getFeedback",
                Method::GET,
                "/v1/feedback/{feedback_id}",
            )
            .path_param("feedback_id", params.feedback_id)
            .query_opt("model_id", params.model_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Delete one feedback entry.
    pub fn delete_feedback(&self, params: DeleteFeedbackParams) -> ServiceCall<FeedbackDeleted> {
        self.core.json(move || {
            require!(params; feedback_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteFeedback",
                Method::DELETE,
                "/v1/feedback/{feedback_id}",
            )
            .path_param("feedback_id", params.feedback_id)
            .query_opt("model_id", params.model_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Start a batch job over the documents of a Cloud Object Storage bucket.
    pub fn create_batch(&self, params: CreateBatchParams) -> ServiceCall<BatchStatus> {
        self.core.json(move || {
            require!(
                params;
                function,
                input_credentials_file,
                input_bucket_location,
                input_bucket_name,
                output_credentials_file,
                output_bucket_location,
                output_bucket_name,
            )?;
            let input = with_overrides(
                params.input_credentials_file,
                params.input_credentials_filename,
                None,
            );
            let output = with_overrides(
                params.output_credentials_file,
                params.output_credentials_filename,
                None,
            );
            let form = Form::new()
                .file("input_credentials_file", input, Some(JSON))
                .text("input_bucket_location", params.input_bucket_location)
                .text("input_bucket_name", params.input_bucket_name)
                .file("output_credentials_file", output, Some(JSON))
                .text("output_bucket_location", params.output_bucket_location)
                .text("output_bucket_name", params.output_bucket_name);
            Ok(
                RequestDescriptor::new(NAME, "createBatch", Method::POST, "/v1/batches")
                    .query_opt("function", params.function)
                    .query_opt("model_id", params.model_id)
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                    ])?),
            )
        })
    }

    /// List submitted batch jobs.
    pub fn list_batches(&self, _params: Option<ListBatchesParams>) -> ServiceCall<Batches> {
        self.core.json(|| {
            Ok(
                RequestDescriptor::new(NAME, "listBatches", Method::GET, "/v1/batches")
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Get the status of a batch job.
    pub fn get_batch(&self, params: GetBatchParams) -> ServiceCall<BatchStatus> {
        self.core.json(move || {
            require!(params; batch_id)?;
            Ok(
                RequestDescriptor::new(NAME, "getBatch", Method::GET, "/v1/batches/{batch_id}")
                    .path_param("batch_id", params.batch_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Rescan or cancel a batch job.
    pub fn update_batch(&self, params: UpdateBatchParams) -> ServiceCall<BatchStatus> {
        self.core.json(move || {
            require!(params; batch_id, action)?;
            Ok(
                RequestDescriptor::new(NAME, "updateBatch", Method::PUT, "/v1/batches/{batch_id}")
                    .path_param("batch_id", params.batch_id)
                    .query_opt("action", params.action)
                    .query_opt("model_id", params.model_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }
}
