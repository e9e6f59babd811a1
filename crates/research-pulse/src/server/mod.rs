//! HTTP surface for the dashboard.
//!
//! One axum router over explicitly injected clients; handlers share state
//! through `Arc<AppState>` constructed once at process start.

mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use axum::response::IntoResponse;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::client::OpenAlexClient;
use crate::completion::CompletionClient;

pub use views::{
    AdvisorRequest, AdvisorResponse, ChatRequest, ChatResponse, ErrorResponse,
    LifePathResponse, LootboxResponse, ResearcherFilters, ResearchersResponse,
    TrendingParams, TrendingResponse, WordCloudResponse,
};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bibliographic client.
    pub openalex: OpenAlexClient,

    /// Completion client.
    pub completion: CompletionClient,
}

impl AppState {
    /// Bundle the upstream clients.
    #[must_use]
    pub fn new(openalex: OpenAlexClient, completion: CompletionClient) -> Self {
        Self { openalex, completion }
    }
}

/// Create the dashboard router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/api/wordcloud", get(views::wordcloud))
        .route("/api/trending", get(views::trending))
        .route("/api/researchers", get(views::researchers))
        .route("/api/chat", post(views::chat))
        .route("/api/rsti-advisor", post(views::rsti_advisor))
        .route("/api/lootbox", get(views::lootbox))
        .route("/api/lifepath", post(views::lifepath))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn banner() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "research-pulse dashboard API"
    }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
