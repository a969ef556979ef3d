//! Tests for the Compare and Comply service.

mod common;

use std::sync::{Arc, Mutex};

use common::{
    VERSION, client_for, error_response, header, json_response, missing_names, mock_endpoint,
    recorded, recorded_with, setup_mock_server,
};
use reqwest::Method;
use watsonkit::services::CompareComplyV1;
use watsonkit::types::compare_comply::{
    AddFeedbackParams, BatchAction, BatchFunction, ClassifyElementsParams, CompareDocumentsParams,
    ConvertToHtmlParams, CreateBatchParams, DeleteFeedbackParams, ExtractTablesParams,
    FeedbackDataInput, GetBatchParams, GetFeedbackParams, ListBatchesParams, ListFeedbackParams,
    Location, Model, UpdateBatchParams,
};
use watsonkit::{Credentials, Error, FilePart, FormField, RequestBody, Service};
use wiremock::matchers::{header as header_is, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_convert_to_html_builds_multipart_request() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .convert_to_html(ConvertToHtmlParams::new("f").filename("n"))
        .await
        .unwrap();

    assert_eq!(dispatcher.calls(), 1);
    let request = dispatcher.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.rendered_path(), "/v1/html_conversion");
    match request.form_field("file") {
        Some(FormField::File { part, .. }) => {
            assert_eq!(part.data, b"f");
            assert_eq!(part.filename.as_deref(), Some("n"));
        }
        other => panic!("expected a file part, got {other:?}"),
    }
    assert_eq!(header(&request, "accept"), Some("application/json"));
    assert_eq!(header(&request, "content-type"), Some("multipart/form-data"));
}

#[tokio::test]
async fn test_extract_tables_sends_model() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .extract_tables(ConvertToHtmlParams::new("%PDF").model_id(Model::Tables))
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(request.rendered_path(), "/v1/tables");
    assert_eq!(request.query_value("model_id"), Some("tables"));
}

#[tokio::test]
async fn test_get_feedback_without_id_never_dispatches() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    let err = service
        .get_feedback(GetFeedbackParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParams(ref names) if names == &["feedback_id"]));
    assert!(err.to_string().contains("feedback_id"));
    assert_eq!(dispatcher.calls(), 0);
}

#[tokio::test]
async fn test_validation_failure_runs_callback_synchronously() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();
    let seen = Arc::new(Mutex::new(None));

    let sink = seen.clone();
    let handle = service
        .get_feedback(GetFeedbackParams::default())
        .on_complete(move |result| {
            *sink.lock().unwrap() = Some(result.unwrap_err().to_string());
        });

    assert!(handle.is_none());
    let message = seen.lock().unwrap().clone().unwrap();
    assert_eq!(message, "Missing required parameters: feedback_id");
    assert_eq!(dispatcher.calls(), 0);
}

#[test]
fn test_callback_without_runtime_gets_config_error() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();
    let seen = Arc::new(Mutex::new(None));

    let sink = seen.clone();
    let handle = service.list_batches(None).on_complete(move |result| {
        *sink.lock().unwrap() = Some(result.unwrap_err());
    });

    assert!(handle.is_none());
    let err = seen.lock().unwrap().take().unwrap();
    assert!(matches!(err, Error::Config(ref message) if message == "no tokio runtime"));
    assert_eq!(dispatcher.calls(), 0);
}

#[tokio::test]
async fn test_callback_receives_dispatched_result() {
    let (service, dispatcher) = recorded_with::<CompareComplyV1, _>(serde_json::json!({
        "batches": [{"batch_id": "b-1", "status": "completed"}]
    }));
    let seen = Arc::new(Mutex::new(None));

    let sink = seen.clone();
    let handle = service
        .list_batches(None)
        .on_complete(move |result| {
            let batches = result.unwrap().into_result().batches;
            *sink.lock().unwrap() = batches[0].batch_id.clone();
        })
        .unwrap();
    handle.await.unwrap();

    assert_eq!(seen.lock().unwrap().as_deref(), Some("b-1"));
    assert_eq!(dispatcher.calls(), 1);
}

#[tokio::test]
async fn test_list_batches_none_matches_default() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service.list_batches(None).await.unwrap();
    let without = dispatcher.last();
    service
        .list_batches(Some(ListBatchesParams::default()))
        .await
        .unwrap();
    let with = dispatcher.last();

    assert_eq!(without.rendered_path(), "/v1/batches");
    assert_eq!(without.method, with.method);
    assert_eq!(without.rendered_path(), with.rendered_path());
    assert_eq!(without.query, with.query);
    assert_eq!(without.headers, with.headers);
}

#[tokio::test]
async fn test_caller_headers_override_negotiation() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .get_batch(GetBatchParams {
            batch_id: "b-1".to_string(),
        })
        .header("Accept", "text/plain")
        .header("X-Custom", "1")
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(header(&request, "accept"), Some("text/plain"));
    assert_eq!(header(&request, "x-custom"), Some("1"));
    assert!(
        header(&request, "x-ibmcloud-sdk-analytics")
            .unwrap()
            .contains("operation_id=getBatch")
    );
}

#[tokio::test]
async fn test_compare_documents_requires_both_files() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    let err = service
        .compare_documents(CompareDocumentsParams {
            file_1: Some(FilePart::new("a")),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required parameters: file_2");

    service
        .compare_documents(CompareDocumentsParams {
            file_1: Some(FilePart::new("a")),
            file_2: Some(FilePart::new("b")),
            file_1_label: Some("left".to_string()),
            file_2_content_type: Some("application/pdf".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(dispatcher.calls(), 1);
    let request = dispatcher.last();
    assert_eq!(request.query_value("file_1_label"), Some("left"));
    assert_eq!(request.query_value("file_2_label"), None);
    match request.form_field("file_2") {
        Some(FormField::File { part, .. }) => {
            assert_eq!(part.content_type.as_deref(), Some("application/pdf"))
        }
        other => panic!("expected a file part, got {other:?}"),
    }
}

#[tokio::test]
async fn test_add_feedback_json_body() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .add_feedback(AddFeedbackParams {
            feedback_data: Some(FeedbackDataInput {
                feedback_type: "element_classification".to_string(),
                location: Location { begin: 241, end: 237 },
                text: "1. IBM will provide a Senior Managing Consultant.".to_string(),
                original_labels: serde_json::json!({"types": []}),
                updated_labels: serde_json::json!({"types": []}),
                ..Default::default()
            }),
            comment: Some("corrected".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = dispatcher.last();
    let RequestBody::Json(body) = &request.body else {
        panic!("expected a JSON body");
    };
    assert_eq!(body["feedback_data"]["location"]["begin"], 241);
    assert_eq!(body["comment"], "corrected");
    assert!(body.get("user_id").is_none());
    assert_eq!(header(&request, "content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_create_batch_reports_every_missing_field() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    let err = service
        .create_batch(CreateBatchParams::default())
        .await
        .unwrap_err();

    let Error::MissingParams(names) = err else {
        panic!("expected missing params");
    };
    assert_eq!(
        names,
        vec![
            "function",
            "input_credentials_file",
            "input_bucket_location",
            "input_bucket_name",
            "output_credentials_file",
            "output_bucket_location",
            "output_bucket_name",
        ]
    );
    assert_eq!(dispatcher.calls(), 0);
}

#[tokio::test]
async fn test_create_batch_form_and_query() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .create_batch(CreateBatchParams {
            function: Some(BatchFunction::HtmlConversion),
            input_credentials_file: Some(FilePart::new(r#"{"apikey": "in"}"#)),
            input_bucket_location: "us-geo".to_string(),
            input_bucket_name: "in-bucket".to_string(),
            output_credentials_file: Some(FilePart::new(r#"{"apikey": "out"}"#)),
            output_bucket_location: "us-geo".to_string(),
            output_bucket_name: "out-bucket".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(request.query_value("function"), Some("html_conversion"));
    match request.form_field("input_credentials_file") {
        Some(FormField::File { part, .. }) => {
            assert_eq!(part.content_type.as_deref(), Some("application/json"))
        }
        other => panic!("expected a file part, got {other:?}"),
    }
    match request.form_field("output_bucket_name") {
        Some(FormField::Text { value, .. }) => assert_eq!(value, "out-bucket"),
        other => panic!("expected a text field, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_feedback_filters() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    service
        .list_feedback(Some(ListFeedbackParams {
            feedback_type: Some("element_classification".to_string()),
            page_limit: Some(10),
            include_total: Some(true),
            ..Default::default()
        }))
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(
        request.query,
        vec![
            ("feedback_type".to_string(), "element_classification".to_string()),
            ("page_limit".to_string(), "10".to_string()),
            ("include_total".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_get_batch_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches/b%201"))
        .and(query_param("version", VERSION))
        .and(header_is("authorization", "Basic dXNlcjpwYXNz"))
        .and(header_is("accept", "application/json"))
        .respond_with(json_response(serde_json::json!({
            "batch_id": "b 1",
            "function": "tables",
            "status": "active",
            "document_counts": {"total": 4, "pending": 1, "successful": 3, "failed": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service: CompareComplyV1 = client_for(&server);
    let response = service
        .get_batch(GetBatchParams {
            batch_id: "b 1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let batch = response.into_result();
    assert_eq!(batch.function.as_deref(), Some("tables"));
    assert_eq!(batch.document_counts.unwrap().successful, Some(3));
}

#[tokio::test]
async fn test_update_batch_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v1/batches/b-1"))
        .and(query_param("action", "rescan"))
        .respond_with(json_response(serde_json::json!({"batch_id": "b-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let service: CompareComplyV1 = client_for(&server);
    let batch = service
        .update_batch(UpdateBatchParams {
            batch_id: "b-1".to_string(),
            action: Some(BatchAction::Rescan),
            model_id: None,
        })
        .await
        .unwrap()
        .into_result();

    assert_eq!(batch.batch_id.as_deref(), Some("b-1"));
}

#[tokio::test]
async fn test_service_error_message() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/v1/feedback/missing",
        error_response(404, "Feedback entry not found"),
    )
    .await;

    let service: CompareComplyV1 = client_for(&server);
    let err = service
        .get_feedback(GetFeedbackParams::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Feedback entry not found"));
}

#[tokio::test]
async fn test_error_body_on_success_status() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/v1/batches/b1",
        json_response(serde_json::json!({"error": "Bad thing", "code": 400})),
    )
    .await;

    let service: CompareComplyV1 = client_for(&server);
    let err = service
        .get_batch(GetBatchParams {
            batch_id: "b1".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Service { status, message, .. } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Bad thing");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_credentials_are_unauthorized() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/v1/batches",
        ResponseTemplate::new(401).set_body_string("Unauthorized"),
    )
    .await;

    let service: CompareComplyV1 = client_for(&server);
    let err = service.list_batches(None).await.unwrap_err();

    assert!(matches!(err, Error::Unauthorized { status: 401, .. }));
}

#[test]
fn test_builder_requires_version() {
    let err = CompareComplyV1::builder()
        .credentials(Credentials::api_key("key"))
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("version"));
}

#[tokio::test]
async fn test_missing_params_never_dispatch() {
    let (service, dispatcher) = recorded::<CompareComplyV1>();

    let cases: Vec<(&str, Vec<String>, Vec<&str>)> = vec![
        (
            "convert_to_html",
            missing_names(&service.convert_to_html(ConvertToHtmlParams::default())),
            vec!["file"],
        ),
        (
            "classify_elements",
            missing_names(&service.classify_elements(ClassifyElementsParams::default())),
            vec!["file"],
        ),
        (
            "extract_tables",
            missing_names(&service.extract_tables(ExtractTablesParams::default())),
            vec!["file"],
        ),
        (
            "compare_documents",
            missing_names(&service.compare_documents(CompareDocumentsParams::default())),
            vec!["file_1", "file_2"],
        ),
        (
            "add_feedback",
            missing_names(&service.add_feedback(AddFeedbackParams::default())),
            vec!["feedback_data"],
        ),
        (
            "get_feedback",
            missing_names(&service.get_feedback(GetFeedbackParams::default())),
            vec!["feedback_id"],
        ),
        (
            "delete_feedback",
            missing_names(&service.delete_feedback(DeleteFeedbackParams::default())),
            vec!["feedback_id"],
        ),
        (
            "create_batch",
            missing_names(&service.create_batch(CreateBatchParams {
                function: Some(BatchFunction::Tables),
                input_bucket_location: "us-geo".to_string(),
                input_bucket_name: "in".to_string(),
                output_bucket_location: "us-geo".to_string(),
                output_bucket_name: "out".to_string(),
                ..Default::default()
            })),
            vec!["input_credentials_file", "output_credentials_file"],
        ),
        (
            "get_batch",
            missing_names(&service.get_batch(GetBatchParams::default())),
            vec!["batch_id"],
        ),
        (
            "update_batch",
            missing_names(&service.update_batch(UpdateBatchParams::default())),
            vec!["batch_id", "action"],
        ),
        (
            "update_batch",
            missing_names(&service.update_batch(UpdateBatchParams {
                batch_id: "b-1".to_string(),
                ..Default::default()
            })),
            vec!["action"],
        ),
    ];

    for (operation, names, expected) in cases {
        assert_eq!(names, expected, "{operation}");
    }
    assert_eq!(dispatcher.calls(), 0);
}
