//! Language Translator v3.
//!
//! # Example
//!
//! ```no_run
//! use watsonkit::{Credentials, Service};
//! use watsonkit::services::LanguageTranslatorV3;
//! use watsonkit::types::language_translator::TranslateParams;
//!
//! # async fn example() -> watsonkit::Result<()> {
//! let translator = LanguageTranslatorV3::builder()
//!     .version("2018-05-01")
//!     .credentials(Credentials::api_key("key"))
//!     .build()?;
//!
//! let result = translator
//!     .translate(TranslateParams::new("Hello", "en", "es"))
//!     .await?
//!     .into_result();
//! for t in result.translations {
//!     println!("{}", t.translation);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::{Form, OCTET_STREAM, RequestDescriptor};
use crate::response::Empty;
use crate::service::{Service, ServiceCore};
use crate::types::language_translator::{
    CreateModelParams, DeleteDocumentParams, DeleteModelParams, DeleteModelResult, DocumentList,
    DocumentStatus, GetDocumentStatusParams, GetModelParams, GetTranslatedDocumentParams,
    IdentifiableLanguages, IdentifiedLanguages, IdentifyParams, ListDocumentsParams,
    ListIdentifiableLanguagesParams, ListModelsParams, TranslateDocumentParams, TranslateParams,
    TranslationModel, TranslationModels, TranslationResult,
};
use crate::validate::require;

const NAME: &str = "language_translator";
const JSON: &str = "application/json";
const MULTIPART: &str = "multipart/form-data";

/// Client for the Language Translator v3 API.
#[derive(Debug, Clone)]
pub struct LanguageTranslatorV3 {
    core: ServiceCore,
}

impl Service for LanguageTranslatorV3 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v3";
    const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/language-translator/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct TranslateBody {
    text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl LanguageTranslatorV3 {
    /// Translate one or more strings.
    pub fn translate(&self, params: TranslateParams) -> ServiceCall<TranslationResult> {
        self.core.json(move || {
            require!(params; text)?;
            let body = TranslateBody {
                text: params.text,
                model_id: params.model_id,
                source: params.source,
                target: params.target,
            };
            Ok(
                RequestDescriptor::new(NAME, "translate", Method::POST, "/v3/translate")
                    .json(&body)?
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(JSON)),
                    ])?),
            )
        })
    }

    /// List the languages `identify` can recognize.
    pub fn list_identifiable_languages(
        &self,
        _params: Option<ListIdentifiableLanguagesParams>,
    ) -> ServiceCall<IdentifiableLanguages> {
        self.core.json(|| {
            Ok(RequestDescriptor::new(
                NAME,
                "listIdentifiableLanguages",
                Method::GET,
                "/v3/identifiable_languages",
            )
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Identify the language of a text.
    pub fn identify(&self, params: IdentifyParams) -> ServiceCall<IdentifiedLanguages> {
        self.core.json(move || {
            require!(params; text)?;
            Ok(
                RequestDescriptor::new(NAME, "identify", Method::POST, "/v3/identify")
                    .text(params.text)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some("text/plain")),
                    ])?),
            )
        })
    }

    /// List translation models.
    pub fn list_models(&self, params: Option<ListModelsParams>) -> ServiceCall<TranslationModels> {
        let params = params.unwrap_or_default();
        self.core.json(move || {
            Ok(
                RequestDescriptor::new(NAME, "listModels", Method::GET, "/v3/models")
                    .query_opt("source", params.source)
                    .query_opt("target", params.target)
                    .query_opt("default", params.default_models)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Customize a base model with a glossary or a parallel corpus.
    pub fn create_model(&self, params: CreateModelParams) -> ServiceCall<TranslationModel> {
        self.core.json(move || {
            require!(params; base_model_id)?;
            let form = Form::new()
                .file_opt("forced_glossary", params.forced_glossary, Some(OCTET_STREAM))
                .file_opt("parallel_corpus", params.parallel_corpus, Some(OCTET_STREAM));
            Ok(
                RequestDescriptor::new(NAME, "createModel", Method::POST, "/v3/models")
                    .query("base_model_id", params.base_model_id)
                    .query_opt("name", params.name)
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                    ])?),
            )
        })
    }

    /// Delete a custom model.
    pub fn delete_model(&self, params: DeleteModelParams) -> ServiceCall<DeleteModelResult> {
        self.core.json(move || {
            require!(params; model_id)?;
            Ok(
                RequestDescriptor::new(NAME, "deleteModel", Method::DELETE, "/v3/models/{model_id}")
                    .path_param("model_id", params.model_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Get information about a model.
    pub fn get_model(&self, params: GetModelParams) -> ServiceCall<TranslationModel> {
        self.core.json(move || {
            require!(params; model_id)?;
            Ok(
                RequestDescriptor::new(NAME, "getModel", Method::GET, "/v3/models/{model_id}")
                    .path_param("model_id", params.model_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// List submitted documents.
    pub fn list_documents(&self, _params: Option<ListDocumentsParams>) -> ServiceCall<DocumentList> {
        self.core.json(|| {
            Ok(
                RequestDescriptor::new(NAME, "listDocuments", Method::GET, "/v3/documents")
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Submit a document for translation.
    pub fn translate_document(&self, params: TranslateDocumentParams) -> ServiceCall<DocumentStatus> {
        self.core.json(move || {
            require!(params; file, filename)?;
            let mut file = params.file.unwrap_or_default().filename(params.filename);
            if let Some(content_type) = params.file_content_type {
                file = file.content_type(content_type);
            }
            let form = Form::new()
                .file("file", file, None)
                .text_opt("model_id", params.model_id)
                .text_opt("source", params.source)
                .text_opt("target", params.target)
                .text_opt("document_id", params.document_id);
            Ok(
                RequestDescriptor::new(NAME, "translateDocument", Method::POST, "/v3/documents")
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                    ])?),
            )
        })
    }

    /// Get the status of a submitted document.
    pub fn get_document_status(
        &self,
        params: GetDocumentStatusParams,
    ) -> ServiceCall<DocumentStatus> {
        self.core.json(move || {
            require!(params; document_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getDocumentStatus",
                Method::GET,
                "/v3/documents/{document_id}",
            )
            .path_param("document_id", params.document_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Delete a submitted document.
    pub fn delete_document(&self, params: DeleteDocumentParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; document_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteDocument",
                Method::DELETE,
                "/v3/documents/{document_id}",
            )
            .path_param("document_id", params.document_id))
        })
    }

    /// Download a translated document.
    pub fn get_translated_document(
        &self,
        params: GetTranslatedDocumentParams,
    ) -> ServiceCall<Vec<u8>> {
        self.core.bytes(move || {
            require!(params; document_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getTranslatedDocument",
                Method::GET,
                "/v3/documents/{document_id}/translated_document",
            )
            .path_param("document_id", params.document_id)
            .with_headers(negotiation(&[(ACCEPT, params.accept.as_deref())])?))
        })
    }
}
