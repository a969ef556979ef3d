//! Tests for the Personality Insights v3 service.

mod common;

use common::{client_for, header, json_response, missing_names, recorded, setup_mock_server};
use watsonkit::services::PersonalityInsightsV3;
use watsonkit::types::personality_insights::{Content, ContentItem, ProfileParams};
use watsonkit::RequestBody;
use wiremock::matchers::{header as header_is, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_profile_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v3/profile"))
        .and(query_param("consumption_preferences", "true"))
        .and(header_is("content-type", "text/plain"))
        .and(header_is("accept", "application/json"))
        .respond_with(json_response(serde_json::json!({
            "processed_language": "en",
            "word_count": 1365,
            "personality": [
                {"trait_id": "big5_openness", "name": "Openness", "category": "personality",
                 "percentile": 0.83, "children": []}
            ],
            "needs": [],
            "values": [],
            "warnings": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service: PersonalityInsightsV3 = client_for(&server);
    let profile = service
        .profile(ProfileParams {
            consumption_preferences: Some(true),
            ..ProfileParams::text("Vice President Johnson, Mr. Speaker, Mr. Chief Justice")
        })
        .await
        .unwrap()
        .into_result();

    assert_eq!(profile.word_count, 1365);
    assert_eq!(profile.personality[0].name, "Openness");
}

#[tokio::test]
async fn test_profile_as_csv_returns_bytes() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v3/profile"))
        .and(query_param("csv_headers", "true"))
        .and(header_is("accept", "text/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("big5_openness\n0.83\n"))
        .expect(1)
        .mount(&server)
        .await;

    let service: PersonalityInsightsV3 = client_for(&server);
    let csv = service
        .profile_as_csv(ProfileParams {
            csv_headers: Some(true),
            ..ProfileParams::text("some text")
        })
        .await
        .unwrap()
        .into_result();

    assert_eq!(String::from_utf8(csv).unwrap(), "big5_openness\n0.83\n");
}

#[tokio::test]
async fn test_content_items_are_json() {
    let (service, dispatcher) = recorded::<PersonalityInsightsV3>();

    service
        .profile(ProfileParams::content(Content {
            content_items: vec![ContentItem {
                content: "Wow, I liked @TheRock before , now I really SEE how special he is."
                    .to_string(),
                language: Some("en".to_string()),
                ..Default::default()
            }],
        }))
        .header("Content-Language", "en")
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(header(&request, "content-type"), Some("application/json"));
    assert_eq!(header(&request, "content-language"), Some("en"));
    let RequestBody::Json(body) = &request.body else {
        panic!("expected a JSON body");
    };
    assert_eq!(body["content_items"][0]["language"], "en");
    assert!(body["content_items"][0].get("id").is_none());
}

#[tokio::test]
async fn test_profile_requires_content() {
    let (service, dispatcher) = recorded::<PersonalityInsightsV3>();

    let err = service
        .profile(ProfileParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required parameters: content");

    let err = service
        .profile_as_csv(ProfileParams::text(""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required parameters: content");

    assert_eq!(dispatcher.calls(), 0);
}

#[tokio::test]
async fn test_caller_content_type_wins() {
    let (service, dispatcher) = recorded::<PersonalityInsightsV3>();

    service
        .profile(ProfileParams::text("hola"))
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Accept-Language", "es")
        .await
        .unwrap();

    let request = dispatcher.last();
    assert_eq!(
        header(&request, "content-type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(header(&request, "accept-language"), Some("es"));
    assert_eq!(header(&request, "accept"), Some("application/json"));
}

#[tokio::test]
async fn test_missing_params_never_dispatch() {
    let (service, dispatcher) = recorded::<PersonalityInsightsV3>();

    let cases: Vec<(&str, Vec<String>, Vec<&str>)> = vec![
        (
            "profile",
            missing_names(&service.profile(ProfileParams::default())),
            vec!["content"],
        ),
        (
            "profile_as_csv",
            missing_names(&service.profile_as_csv(ProfileParams::default())),
            vec!["content"],
        ),
    ];

    for (operation, names, expected) in cases {
        assert_eq!(names, expected, "{operation}");
    }
    assert_eq!(dispatcher.calls(), 0);
}
