//! Natural Language Classifier v1.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::call::ServiceCall;
use crate::headers::negotiation;
use crate::request::{Form, RequestDescriptor};
use crate::response::Empty;
use crate::service::{Service, ServiceCore};
use crate::types::natural_language_classifier::{
    Classification, ClassificationCollection, ClassifyCollectionParams, ClassifyInput,
    ClassifyParams, Classifier, ClassifierList, CreateClassifierParams, DeleteClassifierParams,
    GetClassifierParams, ListClassifiersParams,
};
use crate::validate::require;

const NAME: &str = "natural_language_classifier";
const JSON: &str = "application/json";

/// Client for the Natural Language Classifier v1 API. No version date is needed.
#[derive(Debug, Clone)]
pub struct NaturalLanguageClassifierV1 {
    core: ServiceCore,
}

impl Service for NaturalLanguageClassifierV1 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v1";
    const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/natural-language-classifier/api";
    const REQUIRES_VERSION: bool = false;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

#[derive(Serialize)]
struct ClassifyBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ClassifyCollectionBody<'a> {
    collection: &'a [ClassifyInput],
}

impl NaturalLanguageClassifierV1 {
    /// Classify a phrase.
    pub fn classify(&self, params: ClassifyParams) -> ServiceCall<Classification> {
        self.core.json(move || {
            require!(params; classifier_id, text)?;
            Ok(RequestDescriptor::new(
                NAME,
                "classify",
                Method::POST,
                "/v1/classifiers/{classifier_id}/classify",
            )
            .json(&ClassifyBody { text: &params.text })?
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(JSON)),
            ])?))
        })
    }

    /// Classify up to 30 phrases in one request.
    pub fn classify_collection(
        &self,
        params: ClassifyCollectionParams,
    ) -> ServiceCall<ClassificationCollection> {
        self.core.json(move || {
            require!(params; classifier_id, collection)?;
            Ok(RequestDescriptor::new(
                NAME,
                "classifyCollection",
                Method::POST,
                "/v1/classifiers/{classifier_id}/classify_collection",
            )
            .json(&ClassifyCollectionBody {
                collection: &params.collection,
            })?
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(JSON)),
            ])?))
        })
    }

    /// Train a new classifier from metadata and CSV data.
    pub fn create_classifier(&self, params: CreateClassifierParams) -> ServiceCall<Classifier> {
        self.core.json(move || {
            require!(params; training_metadata, training_data)?;
            let form = Form::new()
                .file_opt("training_metadata", params.training_metadata, Some(JSON))
                .file_opt("training_data", params.training_data, Some("text/csv"));
            Ok(
                RequestDescriptor::new(NAME, "createClassifier", Method::POST, "/v1/classifiers")
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some("multipart/form-data")),
                    ])?),
            )
        })
    }

    /// List classifiers.
    pub fn list_classifiers(
        &self,
        _params: Option<ListClassifiersParams>,
    ) -> ServiceCall<ClassifierList> {
        self.core.json(|| {
            Ok(
                RequestDescriptor::new(NAME, "listClassifiers", Method::GET, "/v1/classifiers")
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Get a classifier's status.
    pub fn get_classifier(&self, params: GetClassifierParams) -> ServiceCall<Classifier> {
        self.core.json(move || {
            require!(params; classifier_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getClassifier",
                Method::GET,
                "/v1/classifiers/{classifier_id}",
            )
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Delete a classifier.
    pub fn delete_classifier(&self, params: DeleteClassifierParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; classifier_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteClassifier",
                Method::DELETE,
                "/v1/classifiers/{classifier_id}",
            )
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }
}
