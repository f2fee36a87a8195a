//! Curio application composition root
//!
//! Composes the artifacts, comments and events routers into a single
//! application and owns the cross-cutting HTTP layers.

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use curio_artifacts::{ArtifactsRepositories, ArtifactsState};
use curio_comments::{CommentsRepositories, CommentsState};
use curio_common::{db, error::SERVER_ERROR_MESSAGE, Config, Error, StoreProvider};
use curio_events::{EventsRepositories, EventsState};

/// Maximum accepted request body size
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Store handles for every collection, acquired once at startup
#[derive(Clone)]
pub struct AppStores {
    pub artifacts: ArtifactsRepositories,
    pub comments: CommentsRepositories,
    pub events: EventsRepositories,
}

impl AppStores {
    /// Postgres-backed stores sharing one pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            artifacts: ArtifactsRepositories::new(pool.clone()),
            comments: CommentsRepositories::new(pool.clone()),
            events: EventsRepositories::new(pool),
        }
    }

    /// Process-local stores, empty on start
    pub fn in_memory() -> Self {
        Self {
            artifacts: ArtifactsRepositories::in_memory(),
            comments: CommentsRepositories::in_memory(),
            events: EventsRepositories::in_memory(),
        }
    }

    /// Build the stores selected by `config.store_provider`
    #[mutants::skip] // Postgres branch needs a live database
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        match config.store_provider {
            StoreProvider::Memory => {
                tracing::warn!("Using in-memory store; data is lost on shutdown");
                Ok(Self::in_memory())
            }
            StoreProvider::Postgres => {
                let pool = db::connect_pool(config).await?;
                Ok(Self::from_pool(pool))
            }
        }
    }
}

/// Create the main application router with all routes
pub fn create_app(stores: AppStores) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(curio_artifacts::routes().with_state(ArtifactsState {
            repos: stores.artifacts,
        }))
        .merge(curio_comments::routes().with_state(CommentsState {
            repos: stores.comments,
        }))
        .merge(curio_events::routes().with_state(EventsState {
            repos: stores.events,
        }))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

/// Wrap the router with the shared middleware stack
pub fn apply_layers(app: Router, cors_origins: Option<&str>) -> Router {
    app.layer(body_limit_layer())
        .layer(map_response(payload_too_large_as_json))
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// CORS for a comma-separated origin list; `None` allows any origin
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin);
    };

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Reject request bodies larger than [`MAX_BODY_BYTES`]
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

async fn root() -> &'static str {
    "Hello from backend!"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn route_not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}

/// The body limit layer answers in plain text; clients always get JSON
async fn payload_too_large_as_json(response: Response) -> Response {
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return response;
    }

    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(json!({ "message": "Request body too large" })),
    )
        .into_response()
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": SERVER_ERROR_MESSAGE, "error": detail })),
    )
        .into_response()
}
