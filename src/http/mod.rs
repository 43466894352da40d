//! HTTP surface of the planner.

pub mod error;
pub mod handlers;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::PlannerConfig,
    core::Pipeline,
    services::ChatModel,
    types::{AgentState, DiscussionState},
};

pub use error::ApiError;
pub use handlers::{ItineraryResponse, WelcomeResponse};

/// Read-only handles shared by all requests. Each request builds its own
/// pipeline state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub trip_pipeline: Arc<Pipeline<AgentState>>,
    pub discussion_pipeline: Arc<Pipeline<DiscussionState>>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, config: &PlannerConfig) -> Self {
        Self {
            model,
            trip_pipeline: Arc::new(Pipeline::trip_planner(config)),
            discussion_pipeline: Arc::new(Pipeline::discussion(config)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/generate_itinerary", post(handlers::generate_itinerary))
        .route("/discussion/next_question", post(handlers::next_question))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "trip planner listening");

    let server = axum::serve(listener, router(state));
    tokio::select! {
        result = server => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
