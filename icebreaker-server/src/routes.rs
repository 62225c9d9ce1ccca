use crate::config::SecurityConfig;
use crate::pipeline::Pipeline;
use crate::render::{PLACEHOLDER_IMAGE, error_page, result_page};
use axum::{
    Form, Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Mirrors `SecurityConfig::expose_error_details`.
    pub expose_error_details: bool,
}

#[derive(Debug, Deserialize)]
pub struct IceBreakInput {
    pub name: String,
}

pub fn app_router(state: AppState, security: &SecurityConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/process", post(process))
        .route("/api/icebreak", post(api_icebreak))
        .route("/api/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(security.request_timeout))
        .layer(DefaultBodyLimit::max(security.max_body_size))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// The browser form flow: name in, rendered result page out.
async fn process(
    State(state): State<AppState>,
    Form(input): Form<IceBreakInput>,
) -> impl IntoResponse {
    let name = input.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(error_page("Please enter a name.")),
        );
    }

    match state.pipeline.break_ice(name).await {
        Ok(ice) => (StatusCode::OK, Html(result_page(name, &ice))),
        Err(e) => {
            tracing::error!(name = %name, error = %e, "icebreak pipeline failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(error_page(&public_error_message(&e, state.expose_error_details))),
            )
        }
    }
}

/// Full error text goes to the log; the response only carries it when the
/// deployment opted in.
fn public_error_message(e: &icebreaker_core::IcebreakerError, expose: bool) -> String {
    if expose {
        e.to_string()
    } else {
        "The ice breaker pipeline failed. Please try again later.".to_string()
    }
}

/// JSON flow for programmatic callers.
async fn api_icebreak(
    State(state): State<AppState>,
    Json(input): Json<IceBreakInput>,
) -> impl IntoResponse {
    let name = input.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name must not be blank" })),
        );
    }

    match state.pipeline.break_ice(name).await {
        Ok(ice) => (
            StatusCode::OK,
            Json(json!({
                "summary_and_facts": {
                    "summary": ice.summary.summary,
                    "facts": ice.summary.facts,
                },
                "interests": { "topics_of_interest": ["Coming soon..."] },
                "ice_breakers": { "ice_breakers": ["Coming soon..."] },
                "picture_url": ice.photo_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE),
            })),
        ),
        Err(e) => {
            tracing::error!(name = %name, error = %e, "icebreak pipeline failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": public_error_message(&e, state.expose_error_details) })),
            )
        }
    }
}
