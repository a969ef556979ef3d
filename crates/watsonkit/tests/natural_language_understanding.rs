//! Tests for the Natural Language Understanding v1 service.

mod common;

use common::{
    client_for, header, json_response, missing_names, mock_endpoint, recorded, setup_mock_server,
};
use watsonkit::RequestBody;
use watsonkit::services::NaturalLanguageUnderstandingV1;
use watsonkit::types::natural_language_understanding::{
    AnalyzeParams, DeleteModelParams, Features, KeywordsOptions, LimitOptions, TargetOptions,
};
use wiremock::Mock;
use wiremock::matchers::{body_json, method, path, query_param};

fn keyword_features() -> Features {
    Features {
        keywords: Some(KeywordsOptions {
            limit: Some(2),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_analyze_sends_only_set_fields() {
    let (service, dispatcher) = recorded::<NaturalLanguageUnderstandingV1>();

    service
        .analyze(AnalyzeParams {
            return_analyzed_text: Some(true),
            ..AnalyzeParams::text("IBM is an American company", keyword_features())
        })
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(request.rendered_path(), "/v1/analyze");
    assert_eq!(header(&request, "content-type"), Some("application/json"));
    assert_eq!(header(&request, "accept"), Some("application/json"));
    assert_eq!(
        request.body,
        RequestBody::Json(serde_json::json!({
            "features": {"keywords": {"limit": 2}},
            "text": "IBM is an American company",
            "return_analyzed_text": true
        }))
    );
}

#[tokio::test]
async fn test_empty_features_still_sent() {
    let (service, dispatcher) = recorded::<NaturalLanguageUnderstandingV1>();

    service
        .analyze(AnalyzeParams::url("https://www.ibm.com", Features::default()))
        .await
        .unwrap();

    assert_eq!(
        dispatcher.last().body,
        RequestBody::Json(serde_json::json!({
            "features": {},
            "url": "https://www.ibm.com"
        }))
    );
}

#[tokio::test]
async fn test_analyze_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/analyze"))
        .and(query_param("version", common::VERSION))
        .and(body_json(serde_json::json!({
            "features": {
                "sentiment": {"targets": ["stocks"]},
                "categories": {"limit": 1}
            },
            "text": "Stocks rallied today"
        })))
        .respond_with(json_response(serde_json::json!({
            "language": "en",
            "usage": {"features": 2, "text_characters": 20, "text_units": 1},
            "sentiment": {
                "document": {"label": "positive", "score": 0.91},
                "targets": [{"text": "stocks", "score": 0.87}]
            },
            "categories": [{"label": "/business and industrial", "score": 0.72}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service: NaturalLanguageUnderstandingV1 = client_for(&server);
    let features = Features {
        sentiment: Some(TargetOptions {
            document: None,
            targets: vec!["stocks".to_string()],
        }),
        categories: Some(LimitOptions { limit: Some(1) }),
        ..Default::default()
    };
    let analysis = service
        .analyze(AnalyzeParams::text("Stocks rallied today", features))
        .await
        .unwrap()
        .into_result();

    assert_eq!(analysis.language.as_deref(), Some("en"));
    let sentiment = analysis.sentiment.unwrap();
    assert_eq!(sentiment.document.unwrap().label, "positive");
    assert_eq!(sentiment.targets[0].text, "stocks");
    assert_eq!(analysis.categories[0].label, "/business and industrial");
    assert!(analysis.keywords.is_empty());
}

#[tokio::test]
async fn test_models_over_http() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/v1/models",
        json_response(serde_json::json!({
            "models": [{"model_id": "m-1", "status": "available", "language": "en"}]
        })),
    )
    .await;
    mock_endpoint(
        &server,
        "DELETE",
        "/v1/models/m-1",
        json_response(serde_json::json!({"deleted": "m-1"})),
    )
    .await;

    let service: NaturalLanguageUnderstandingV1 = client_for(&server);
    let models = service.list_models(None).await.unwrap().into_result();
    assert_eq!(models.models[0].status.as_deref(), Some("available"));

    let deleted = service
        .delete_model(DeleteModelParams {
            model_id: "m-1".to_string(),
        })
        .await
        .unwrap()
        .into_result();
    assert_eq!(deleted.deleted, "m-1");
}

#[tokio::test]
async fn test_missing_params_never_dispatch() {
    let (service, dispatcher) = recorded::<NaturalLanguageUnderstandingV1>();

    let cases: Vec<(&str, Vec<String>, Vec<&str>)> = vec![
        (
            "analyze",
            missing_names(&service.analyze(AnalyzeParams {
                text: Some("no features".to_string()),
                ..Default::default()
            })),
            vec!["features"],
        ),
        (
            "delete_model",
            missing_names(&service.delete_model(DeleteModelParams::default())),
            vec!["model_id"],
        ),
    ];

    for (operation, names, expected) in cases {
        assert_eq!(names, expected, "{operation}");
    }
    assert_eq!(dispatcher.calls(), 0);
}
