use super::{
    activity::{ActivitiesAndReason, Activity},
    itinerary::TripPlan,
    profile::{PersonalityProfile, UserInput},
};
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};

/// Record carried through the trip pipeline.
///
/// Starts with only `user_input`. Each stage consumes the record and hands
/// back a copy with its own output filled in; fields never go back to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub user_input: UserInput,
    pub personality_profile: Option<PersonalityProfile>,
    pub activity_recommendations: Option<Vec<Activity>>,
    pub reason_for_recommendations: Option<String>,
    pub final_trip_plan: Option<TripPlan>,
}

/// Last stage whose output is present on an [`AgentState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageProgress {
    Start,
    Extracted,
    Recommended,
    Composed,
}

impl AgentState {
    pub fn new(user_input: UserInput) -> Self {
        Self {
            user_input,
            personality_profile: None,
            activity_recommendations: None,
            reason_for_recommendations: None,
            final_trip_plan: None,
        }
    }

    pub fn with_profile(self, profile: PersonalityProfile) -> Self {
        Self {
            personality_profile: Some(profile),
            ..self
        }
    }

    pub fn with_recommendations(self, recommendations: ActivitiesAndReason) -> Self {
        Self {
            activity_recommendations: Some(recommendations.activities),
            reason_for_recommendations: Some(recommendations.reason),
            ..self
        }
    }

    pub fn with_trip_plan(self, plan: TripPlan) -> Self {
        Self {
            final_trip_plan: Some(plan),
            ..self
        }
    }

    pub fn require_profile(&self) -> Result<&PersonalityProfile> {
        self.personality_profile
            .as_ref()
            .ok_or(PlannerError::MissingStageInput("personality_profile"))
    }

    pub fn require_recommendations(&self) -> Result<(&[Activity], &str)> {
        let activities = self
            .activity_recommendations
            .as_deref()
            .ok_or(PlannerError::MissingStageInput("activity_recommendations"))?;
        let reason = self
            .reason_for_recommendations
            .as_deref()
            .ok_or(PlannerError::MissingStageInput("reason_for_recommendations"))?;
        Ok((activities, reason))
    }

    pub fn progress(&self) -> StageProgress {
        if self.final_trip_plan.is_some() {
            StageProgress::Composed
        } else if self.activity_recommendations.is_some() {
            StageProgress::Recommended
        } else if self.personality_profile.is_some() {
            StageProgress::Extracted
        } else {
            StageProgress::Start
        }
    }

    /// Names of the populated optional fields, in pipeline order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.personality_profile.is_some() {
            fields.push("personality_profile");
        }
        if self.activity_recommendations.is_some() {
            fields.push("activity_recommendations");
        }
        if self.reason_for_recommendations.is_some() {
            fields.push("reason_for_recommendations");
        }
        if self.final_trip_plan.is_some() {
            fields.push("final_trip_plan");
        }
        fields
    }
}
