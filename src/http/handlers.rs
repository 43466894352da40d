use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{error::ApiError, AppState};
use crate::{
    catalog::CITY,
    types::{AgentState, DiscussionState, TripPlan, UserInput},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub message: String,
    pub final_trip_plan: Option<TripPlan>,
    pub reason_for_recommendations: Option<String>,
}

impl From<AgentState> for ItineraryResponse {
    fn from(state: AgentState) -> Self {
        Self {
            message: "Trip plan generated successfully".to_string(),
            final_trip_plan: state.final_trip_plan,
            reason_for_recommendations: state
                .reason_for_recommendations
                .filter(|reason| !reason.is_empty()),
        }
    }
}

/// GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to the {CITY} Personality-Based Trip Planner"),
    })
}

/// POST /generate_itinerary
///
/// Body describes personality traits, budget ($ 0-20, $$ 20-100, $$$ 100+),
/// interests, energy level (high/medium/low) and social preference
/// (solo/small group/large group) as free text.
pub async fn generate_itinerary(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    debug!(user_input = %input.user_input, "generate_itinerary request");

    let final_state = state
        .trip_pipeline
        .run(state.model.as_ref(), AgentState::new(input))
        .await?;

    Ok(Json(final_state.into()))
}

/// POST /discussion/next_question
pub async fn next_question(
    State(state): State<AppState>,
    Json(discussion): Json<DiscussionState>,
) -> Result<Json<DiscussionState>, ApiError> {
    debug!(question = %discussion.current_question, answers = discussion.discussions.len(), "next_question request");

    let updated = state
        .discussion_pipeline
        .run(state.model.as_ref(), discussion)
        .await?;

    Ok(Json(updated))
}
