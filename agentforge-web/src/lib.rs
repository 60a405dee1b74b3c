//! # AgentForge Web
//!
//! Browser shell for the agent generation engine. Serves one embedded form
//! page that collects the same specification mapping as the console wizard,
//! plus a small JSON API the page drives:
//!
//! - `GET /` - the form
//! - `GET /health` - liveness probe
//! - `GET /api/frameworks` - framework catalog for the form
//! - `POST /api/generate` - specification in, generated agent out
//! - `POST /api/save` - generated agent in, saved bundle path out
//!
//! Each generate request resolves its own provider from the specification's
//! `model` key (falling back to the startup default), so one running shell
//! can serve both model families. Saves never prompt: every bundle lands in
//! a fresh `agent_`-prefixed temporary directory.

mod page;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use agentforge_core::{error, AgentSpec, Framework, Result};
use agentforge_engine::{Engine, GeneratedAgent};

/// Shared state for the web shell.
pub struct AppState {
    /// Model family used when a specification carries no `model` key.
    pub default_model: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/frameworks", get(frameworks))
        .route("/api/generate", post(generate))
        .route("/api/save", post(save))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the web shell until the process is stopped.
pub async fn serve(addr: &str, default_model: &str) -> Result<()> {
    let state = Arc::new(AppState {
        default_model: default_model.to_string(),
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error::io_error(format!("Failed to bind {}: {}", addr, e)).with_operation("web::serve")
    })?;
    info!("Web shell listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        error::io_error(format!("Web server error: {}", e)).with_operation("web::serve")
    })?;

    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

/// Framework catalog the form's select box is populated from.
async fn frameworks() -> Json<Value> {
    let catalog: Vec<Value> = Framework::ALL
        .iter()
        .map(|framework| {
            json!({
                "id": framework.as_str(),
                "name": framework.display_name(),
                "tagline": framework.tagline(),
            })
        })
        .collect();
    Json(json!({ "frameworks": catalog }))
}

/// Run the full pipeline for one specification.
///
/// The provider is re-resolved per request from the specification's `model`
/// key; an unknown model family is the caller's mistake, not ours.
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(spec): Json<AgentSpec>,
) -> impl IntoResponse {
    let model = spec.model().unwrap_or(&state.default_model).to_string();

    let engine = match Engine::for_model(&model) {
        Ok(engine) => engine,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    match engine.generate_agent(&spec).await {
        Ok(agent) => Json(agent).into_response(),
        Err(e) => {
            error!("Error generating agent: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Persist a generated agent into a fresh `agent_`-prefixed temp directory.
async fn save(Json(agent): Json<GeneratedAgent>) -> impl IntoResponse {
    let staged = match tempfile::Builder::new().prefix("agent_").tempdir() {
        Ok(dir) => dir.keep(),
        Err(e) => {
            error!("Error staging output directory: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    match agentforge_engine::save_agent(&agent, &staged) {
        Ok(path) => Json(json!({ "saved_to": path })).into_response(),
        Err(e) => {
            error!("Error saving agent: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
