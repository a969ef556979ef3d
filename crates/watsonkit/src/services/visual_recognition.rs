//! Visual Recognition v3.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::call::ServiceCall;
use crate::headers::{ACCEPT_LANGUAGE, negotiation};
use crate::request::{FilePart, Form, OCTET_STREAM, RequestDescriptor};
use crate::response::Empty;
use crate::service::{Service, ServiceCore};
use crate::types::visual_recognition::{
    ClassifiedImages, ClassifyParams, Classifier, Classifiers, CreateClassifierParams,
    DeleteClassifierParams, DeleteUserDataParams, GetClassifierParams, GetCoreMlModelParams,
    ListClassifiersParams, UpdateClassifierParams,
};
use crate::validate::require;

const NAME: &str = "watson_vision_combined";
const JSON: &str = "application/json";
const MULTIPART: &str = "multipart/form-data";

/// Client for the Visual Recognition v3 API.
#[derive(Debug, Clone)]
pub struct VisualRecognitionV3 {
    core: ServiceCore,
}

impl Service for VisualRecognitionV3 {
    const NAME: &'static str = NAME;
    const SERVICE_VERSION: &'static str = "v3";
    const DEFAULT_URL: &'static str =
        "https://gateway.watsonplatform.net/visual-recognition/api";
    const REQUIRES_VERSION: bool = true;

    fn from_core(core: ServiceCore) -> Self {
        Self { core }
    }

    fn core(&self) -> &ServiceCore {
        &self.core
    }
}

/// Add the example zips shared by classifier creation and update.
fn examples_form(
    mut form: Form,
    positive: BTreeMap<String, FilePart>,
    negative: Option<FilePart>,
    negative_filename: Option<String>,
) -> Form {
    let negative = negative.map(|part| match negative_filename {
        Some(filename) => part.filename(filename),
        None => part,
    });
    form = form.file_opt("negative_examples", negative, Some(OCTET_STREAM));
    for (class, part) in positive {
        form = form.file(format!("{class}_positive_examples"), part, Some(OCTET_STREAM));
    }
    form
}

fn comma_list(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

impl VisualRecognitionV3 {
    /// Classify images with built-in or custom classifiers.
    pub fn classify(&self, params: Option<ClassifyParams>) -> ServiceCall<ClassifiedImages> {
        let params = params.unwrap_or_default();
        self.core.json(move || {
            let image = params.images_file.map(|mut part| {
                if params.images_filename.is_some() {
                    part.filename = params.images_filename;
                }
                if params.images_file_content_type.is_some() {
                    part.content_type = params.images_file_content_type;
                }
                part
            });
            let form = Form::new()
                .file_opt("images_file", image, None)
                .text_opt("url", params.url)
                .text_opt("threshold", params.threshold)
                .text_opt("owners", comma_list(&params.owners))
                .text_opt("classifier_ids", comma_list(&params.classifier_ids));
            Ok(
                RequestDescriptor::new(NAME, "classify", Method::POST, "/v3/classify")
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                        (ACCEPT_LANGUAGE, params.accept_language.as_deref()),
                    ])?),
            )
        })
    }

    /// Train a custom classifier from example zips.
    pub fn create_classifier(&self, params: CreateClassifierParams) -> ServiceCall<Classifier> {
        self.core.json(move || {
            require!(params; name, positive_examples)?;
            let form = examples_form(
                Form::new().text("name", params.name),
                params.positive_examples,
                params.negative_examples,
                params.negative_examples_filename,
            );
            Ok(
                RequestDescriptor::new(NAME, "createClassifier", Method::POST, "/v3/classifiers")
                    .form(form)
                    .with_headers(negotiation(&[
                        (ACCEPT, Some(JSON)),
                        (CONTENT_TYPE, Some(MULTIPART)),
                    ])?),
            )
        })
    }

    /// List custom classifiers.
    pub fn list_classifiers(&self, params: Option<ListClassifiersParams>) -> ServiceCall<Classifiers> {
        let params = params.unwrap_or_default();
        self.core.json(move || {
            Ok(
                RequestDescriptor::new(NAME, "listClassifiers", Method::GET, "/v3/classifiers")
                    .query_opt("verbose", params.verbose)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }

    /// Get a custom classifier.
    pub fn get_classifier(&self, params: GetClassifierParams) -> ServiceCall<Classifier> {
        self.core.json(move || {
            require!(params; classifier_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getClassifier",
                Method::GET,
                "/v3/classifiers/{classifier_id}",
            )
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Retrain a custom classifier with more examples.
    pub fn update_classifier(&self, params: UpdateClassifierParams) -> ServiceCall<Classifier> {
        self.core.json(move || {
            require!(params; classifier_id)?;
            let form = examples_form(
                Form::new(),
                params.positive_examples,
                params.negative_examples,
                params.negative_examples_filename,
            );
            Ok(RequestDescriptor::new(
                NAME,
                "updateClassifier",
                Method::POST,
                "/v3/classifiers/{classifier_id}",
            )
            .path_param("classifier_id", params.classifier_id)
            .form(form)
            .with_headers(negotiation(&[
                (ACCEPT, Some(JSON)),
                (CONTENT_TYPE, Some(MULTIPART)),
            ])?))
        })
    }

    /// Delete a custom classifier.
    pub fn delete_classifier(&self, params: DeleteClassifierParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; classifier_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "deleteClassifier",
                Method::DELETE,
                "/v3/classifiers/{classifier_id}",
            )
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?))
        })
    }

    /// Download a classifier as a Core ML model.
    pub fn get_core_ml_model(&self, params: GetCoreMlModelParams) -> ServiceCall<Vec<u8>> {
        self.core.bytes(move || {
            require!(params; classifier_id)?;
            Ok(RequestDescriptor::new(
                NAME,
                "getCoreMlModel",
                Method::GET,
                "/v3/classifiers/{classifier_id}/core_ml_model",
            )
            .path_param("classifier_id", params.classifier_id)
            .with_headers(negotiation(&[(ACCEPT, Some(OCTET_STREAM))])?))
        })
    }

    /// Delete all data stored for a customer id.
    pub fn delete_user_data(&self, params: DeleteUserDataParams) -> ServiceCall<Empty> {
        self.core.json(move || {
            require!(params; customer_id)?;
            Ok(
                RequestDescriptor::new(NAME, "deleteUserData", Method::DELETE, "/v3/user_data")
                    .query("customer_id", params.customer_id)
                    .with_headers(negotiation(&[(ACCEPT, Some(JSON))])?),
            )
        })
    }
}
