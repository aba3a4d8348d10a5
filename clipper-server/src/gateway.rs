//! Request gateway — routing, auth, validation, and outcome mapping.
//!
//! Rejection order is part of the contract: method, then bearer token,
//! then payload shape. Nothing reaches the remote host until all three
//! pass, so a rejected request has zero side effects.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};

use clipper_core::{Clip, Config};
use clipper_github::{Reconciler, RemoteContents};
use clipper_renderer::{derive_path, ClipContext, Renderer};

use crate::error::ServerError;
use crate::protocol::{ClipAccepted, ErrorBody};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared request-handling state: the configured shared secret plus the
/// render/commit machinery. Cheap to clone; nothing in here is mutable.
#[derive(Clone)]
pub struct AppState {
    auth_token: Arc<str>,
    renderer: Arc<Renderer>,
    reconciler: Reconciler,
}

impl AppState {
    pub fn new(
        config: &Config,
        host: Arc<dyn RemoteContents + Send + Sync>,
    ) -> Result<Self, ServerError> {
        Ok(AppState {
            auth_token: config.auth_token.as_str().into(),
            renderer: Arc::new(Renderer::new()?),
            reconciler: Reconciler::new(host),
        })
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the gateway router: one endpoint, POST + OPTIONS, everything else
/// answered with 405. The CORS layer annotates every response with the
/// wildcard origin and the allowed methods/headers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/",
            post(handle_clip)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> Response {
    reject(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// ---------------------------------------------------------------------------
// Clip handler
// ---------------------------------------------------------------------------

async fn handle_clip(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    if !authorized(&headers, &state.auth_token) {
        tracing::warn!("rejected request with missing or mismatched bearer token");
        return reject(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let clip: Clip = match serde_json::from_str(&body) {
        Ok(clip) => clip,
        Err(err) => {
            return reject(
                StatusCode::BAD_REQUEST,
                format!("invalid clip payload: {err}"),
            )
        }
    };

    if let Err(err) = clip.validate() {
        return reject(StatusCode::BAD_REQUEST, err.to_string());
    }

    let timestamp = clip.effective_timestamp(Utc::now());
    let path = derive_path(&clip, &timestamp);

    let document = match state.renderer.render(&ClipContext::new(&clip, &timestamp)) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(path = %path, error = %err, "render failed");
            return reject(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    // The contents client is blocking; keep it off the async workers.
    let reconciler = state.reconciler.clone();
    let commit_path = path.clone();
    let subject = clip.title.clone();
    let committed = tokio::task::spawn_blocking(move || {
        reconciler.commit(&commit_path, &document, subject.as_deref())
    })
    .await;

    match committed {
        Ok(Ok(receipt)) => {
            (StatusCode::CREATED, Json(ClipAccepted::new(path.as_str(), receipt))).into_response()
        }
        Ok(Err(err)) => {
            tracing::error!(path = %path, error = %err, "commit failed");
            reject(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(join_err) => {
            tracing::error!(path = %path, error = %join_err, "commit task join failure");
            reject(StatusCode::INTERNAL_SERVER_ERROR, "commit task failed")
        }
    }
}

/// Exact string comparison against `Bearer <shared-secret>`.
fn authorized(headers: &HeaderMap, token: &str) -> bool {
    let expected = format!("Bearer {token}");
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == expected)
        .unwrap_or(false)
}

fn reject(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn authorized_requires_exact_match() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer secret"),
        );
        assert!(authorized(&headers, "secret"));
        assert!(!authorized(&headers, "other"));
    }

    #[test]
    fn authorized_rejects_missing_and_malformed_headers() {
        assert!(!authorized(&HeaderMap::new(), "secret"));

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("secret"));
        assert!(!authorized(&headers, "secret"), "scheme prefix is required");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("bearer secret"),
        );
        assert!(!authorized(&headers, "secret"), "comparison is case-exact");
    }
}
