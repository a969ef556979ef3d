//! Tests for the Assistant v2 service.

mod common;

use common::{
    VERSION, client_for, header, json_response, missing_names, recorded, setup_mock_server,
};
use reqwest::Method;
use watsonkit::services::AssistantV2;
use watsonkit::types::assistant::{
    CreateSessionParams, DeleteSessionParams, MessageInputOptions, MessageParams,
};
use watsonkit::{Error, RequestBody};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_message_body_skips_absent_fields() {
    let (service, dispatcher) = recorded::<AssistantV2>();

    service
        .message(MessageParams::text("asst", "sess", "Hello"))
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.rendered_path(),
        "/v2/assistants/asst/sessions/sess/message"
    );
    let RequestBody::Json(body) = &request.body else {
        panic!("expected a JSON body");
    };
    assert_eq!(
        body,
        &serde_json::json!({"input": {"message_type": "text", "text": "Hello"}})
    );
    assert_eq!(header(&request, "content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_message_requires_both_ids() {
    let (service, dispatcher) = recorded::<AssistantV2>();

    let err = service
        .message(MessageParams::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing required parameters: assistant_id, session_id"
    );
    assert_eq!(dispatcher.calls(), 0);
}

#[tokio::test]
async fn test_delete_session_accepts_empty_reply() {
    let (service, dispatcher) = recorded::<AssistantV2>();

    service
        .delete_session(DeleteSessionParams {
            assistant_id: "asst".to_string(),
            session_id: "sess".to_string(),
        })
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.rendered_path(), "/v2/assistants/asst/sessions/sess");
}

#[tokio::test]
async fn test_session_round_trip_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/assistants/asst/sessions"))
        .and(query_param("version", VERSION))
        .respond_with(json_response(serde_json::json!({"session_id": "sess-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/assistants/asst/sessions/sess-1/message"))
        .and(body_json(serde_json::json!({
            "input": {
                "message_type": "text",
                "text": "What are your hours?",
                "options": {"return_context": true}
            }
        })))
        .respond_with(json_response(serde_json::json!({
            "output": {
                "generic": [
                    {"response_type": "text", "text": "We are open 9 to 5."},
                    {"response_type": "pause", "time": 500}
                ],
                "intents": [{"intent": "hours", "confidence": 0.97}],
                "entities": []
            },
            "context": {"global": {"system": {"turn_count": 1}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service: AssistantV2 = client_for(&server);
    let session = service
        .create_session(CreateSessionParams::new("asst"))
        .await
        .unwrap()
        .into_result();

    let mut params = MessageParams::text("asst", &session.session_id, "What are your hours?");
    if let Some(input) = params.input.as_mut() {
        input.options = Some(MessageInputOptions {
            return_context: Some(true),
            ..Default::default()
        });
    }
    let reply = service.message(params).await.unwrap().into_result();

    let texts: Vec<_> = reply.output.texts().collect();
    assert_eq!(texts, vec!["We are open 9 to 5."]);
    assert_eq!(reply.output.intents[0].intent, "hours");
    assert!(reply.context.is_some());
}

#[tokio::test]
async fn test_session_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/assistants/asst/sessions/gone/message"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Invalid Session",
            "code": 404
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service: AssistantV2 = client_for(&server);
    let err = service
        .message(MessageParams::text("asst", "gone", "hi"))
        .await
        .unwrap_err();

    match err {
        Error::Service {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Invalid Session");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_params_never_dispatch() {
    let (service, dispatcher) = recorded::<AssistantV2>();

    let cases: Vec<(&str, Vec<String>, Vec<&str>)> = vec![
        (
            "create_session",
            missing_names(&service.create_session(CreateSessionParams::default())),
            vec!["assistant_id"],
        ),
        (
            "delete_session",
            missing_names(&service.delete_session(DeleteSessionParams::default())),
            vec!["assistant_id", "session_id"],
        ),
        (
            "message",
            missing_names(&service.message(MessageParams::default())),
            vec!["assistant_id", "session_id"],
        ),
    ];

    for (operation, names, expected) in cases {
        assert_eq!(names, expected, "{operation}");
    }
    assert_eq!(dispatcher.calls(), 0);
}
