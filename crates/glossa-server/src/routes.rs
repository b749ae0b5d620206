use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Json;
use axum::routing::get;
use glossa_core::{LookupError, LookupOutcome};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/word/{word}", get(word_data))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Deserialize)]
struct WordQuery {
    lang: Option<String>,
}

/// Success and failure are both payload-level: the response is always 200,
/// errors ride in an `errors` array.
async fn word_data(
    Path(word): Path<String>,
    Query(query): Query<WordQuery>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Json<Value> {
    let language = match query.lang {
        Some(lang) => lang,
        None => state.language_for(addr.ip()).await,
    };

    let actor = headers
        .get("x-actor")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| addr.ip().to_string());

    match state.lookup.lookup_word(&word, &language, &actor).await {
        Ok(LookupOutcome::Found(data)) => Json(json!(data)),
        Ok(LookupOutcome::NotFound) => Json(json!({
            "errors": ["The word not found. Check if you typed it correctly and try again"]
        })),
        Err(e @ LookupError::SourceUnavailable(_)) => {
            tracing::error!("lookup for {word:?} failed: {e}");
            Json(json!({
                "errors": ["The translation source is unavailable. Try again later"]
            }))
        }
        Err(e) => {
            tracing::error!("lookup for {word:?} failed: {e}");
            Json(json!({
                "errors": ["Something went wrong. Try again later"]
            }))
        }
    }
}
