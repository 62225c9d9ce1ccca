//! End-to-end tests against the router, with the model scripted and the
//! profile document served by a local mock server.

use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use icebreaker_agent::SummaryGenerator;
use icebreaker_model::MockLlm;
use icebreaker_profile::ProfileFetcher;
use icebreaker_server::{AppState, Pipeline, SecurityConfig, app_router};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn profile_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "person": {
                "firstName": "Eden",
                "lastName": "Marco",
                "photoUrl": "https://media.licdn.com/photo.jpg",
                "headline": "LLM Specialist @ Google"
            }
        })))
        .mount(&server)
        .await;
    server
}

fn app_with_model(server: &MockServer, model: MockLlm) -> axum::Router {
    let pipeline = Pipeline::new(
        None,
        ProfileFetcher::mock(format!("{}/profile.json", server.uri())).unwrap(),
        SummaryGenerator::new(Arc::new(model)),
    );

    app_router(
        AppState { pipeline: Arc::new(pipeline), expose_error_details: false },
        &SecurityConfig::default(),
    )
}

fn summarizing_model() -> MockLlm {
    MockLlm::new("mock").with_text_response(
        r#"{"summary": "Eden Marco works on LLMs at Google.", "facts": ["Udemy instructor.", "Based in Israel."]}"#,
    )
}

#[tokio::test]
async fn index_serves_the_form() {
    let server = profile_server().await;
    let app = app_with_model(&server, MockLlm::new("mock"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("name=\"name\""));
}

#[tokio::test]
async fn process_renders_summary_and_facts() {
    let server = profile_server().await;
    let app = app_with_model(&server, summarizing_model());

    let request = Request::builder()
        .method("POST")
        .uri("/process")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Eden%20Marco"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Eden Marco works on LLMs at Google."));
    assert!(html.contains("<li>Udemy instructor.</li>"));
    assert!(html.contains("https://media.licdn.com/photo.jpg"));
}

#[tokio::test]
async fn blank_name_is_a_bad_request() {
    let server = profile_server().await;
    let app = app_with_model(&server, MockLlm::new("mock"));

    let request = Request::builder()
        .method("POST")
        .uri("/process")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=%20%20"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pipeline_failure_is_a_bad_gateway() {
    let server = profile_server().await;
    // Model reply that fails summary parsing.
    let app = app_with_model(&server, MockLlm::new("mock").with_text_response("not json"));

    let request = Request::builder()
        .method("POST")
        .uri("/process")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Eden%20Marco"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    // Without expose_error_details the page carries no internal error text.
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Please try again later."));
    assert!(!html.contains("Parse error"));
}

#[tokio::test]
async fn api_icebreak_returns_the_json_shape() {
    let server = profile_server().await;
    let app = app_with_model(&server, summarizing_model());

    let request = Request::builder()
        .method("POST")
        .uri("/api/icebreak")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "Eden Marco"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        payload["summary_and_facts"]["summary"],
        "Eden Marco works on LLMs at Google."
    );
    assert_eq!(payload["summary_and_facts"]["facts"].as_array().unwrap().len(), 2);
    assert_eq!(payload["interests"]["topics_of_interest"], json!(["Coming soon..."]));
    assert_eq!(payload["ice_breakers"]["ice_breakers"], json!(["Coming soon..."]));
    assert_eq!(payload["picture_url"], "https://media.licdn.com/photo.jpg");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = profile_server().await;
    let app = app_with_model(&server, MockLlm::new("mock"));

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["status"], "ok");
}
