//! The three stages of the trip planner: extract a personality profile,
//! recommend activities, compose the day-by-day plan.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::pipeline::{Pipeline, Stage};
use crate::{
    catalog::{self, CITY},
    config::PlannerConfig,
    error::Result,
    services::{complete_structured, ChatModel, Sampling},
    types::{ActivitiesAndReason, AgentState, PersonalityProfile, TripPlan},
};

impl Pipeline<AgentState> {
    /// Extract -> Recommend -> Compose.
    pub fn trip_planner(config: &PlannerConfig) -> Self {
        let sampling = Sampling::from(config);
        Pipeline::new()
            .then(ExtractPreferences { sampling })
            .then(RecommendActivities { sampling })
            .then(ComposeItinerary {
                sampling,
                trip_days: config.trip_days,
            })
    }
}

#[derive(Debug, Clone)]
pub struct ExtractPreferences {
    pub sampling: Sampling,
}

#[async_trait]
impl Stage<AgentState> for ExtractPreferences {
    fn name(&self) -> &'static str {
        "extract_preferences"
    }

    async fn run(&self, model: &dyn ChatModel, state: AgentState) -> Result<AgentState> {
        let system = format!(
            "You are a travel personality analyst for trips to {CITY}. Read the traveller's \
             description and extract their personality traits, interests, energy level \
             (Low/Medium/High), social preference (Solo/Small Group/Large Group) and budget \
             level ($ for 0-20, $$ for 20-100, $$$ for 100+). If the description is vague or \
             leaves a field out, infer a sensible default profile rather than leaving anything empty."
        );
        let user = format!("Traveller description:\n{}", state.user_input.as_str());

        let profile: PersonalityProfile =
            complete_structured(model, &system, user, self.sampling).await?;
        Ok(state.with_profile(profile))
    }
}

#[derive(Debug, Clone)]
pub struct RecommendActivities {
    pub sampling: Sampling,
}

#[async_trait]
impl Stage<AgentState> for RecommendActivities {
    fn name(&self) -> &'static str {
        "recommend_activities"
    }

    async fn run(&self, model: &dyn ChatModel, state: AgentState) -> Result<AgentState> {
        let profile = serde_json::to_string_pretty(state.require_profile()?)?;

        let system = format!(
            "You are an activity recommender for {CITY}. Using the traveller's personality \
             profile, choose activities that suit them. You may pick from the activity catalog \
             provided and you may also suggest other activities in {CITY} that are not in the \
             catalog. Explain briefly why the selection fits the profile."
        );
        let user = format!(
            "Personality profile:\n{profile}\n\nActivity catalog:\n{}",
            catalog::catalog_json()
        );

        let recommendations: ActivitiesAndReason =
            complete_structured(model, &system, user, self.sampling).await?;

        let from_catalog = recommendations
            .activities
            .iter()
            .filter(|activity| catalog::find_by_name(&activity.name).is_some())
            .count();
        debug!(
            total = recommendations.activities.len(),
            from_catalog, "activities recommended"
        );

        Ok(state.with_recommendations(recommendations))
    }
}

#[derive(Debug, Clone)]
pub struct ComposeItinerary {
    pub sampling: Sampling,
    pub trip_days: u32,
}

#[async_trait]
impl Stage<AgentState> for ComposeItinerary {
    fn name(&self) -> &'static str {
        "compose_itinerary"
    }

    async fn run(&self, model: &dyn ChatModel, state: AgentState) -> Result<AgentState> {
        let (activities, reason) = state.require_recommendations()?;
        let activities = serde_json::to_string_pretty(activities)?;

        let system = format!(
            "You are a trip planner for {CITY}. Build a concise {days}-day itinerary from the \
             recommended activities. Label each day (\"Day 1\", \"Day 2\", ...), give every \
             activity a time of day, and keep the plan short.",
            days = self.trip_days
        );
        let user = format!(
            "Recommended activities:\n{activities}\n\nWhy they were chosen:\n{reason}"
        );

        let plan: TripPlan = complete_structured(model, &system, user, self.sampling).await?;

        if plan.day_count() != self.trip_days as usize {
            warn!(
                requested = self.trip_days,
                returned = plan.day_count(),
                "trip plan day count differs from request"
            );
        }

        Ok(state.with_trip_plan(plan))
    }
}
