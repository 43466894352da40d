use super::activity::ActivityAndTime;
use crate::completion_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    /// Day of the trip
    pub day: String,
    /// Activities with the time for the day's itinerary
    pub activities: Vec<ActivityAndTime>,
}

/// The complete multi-day plan returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct TripPlan {
    /// List of daily itineraries
    pub itinerary: Vec<Itinerary>,
}

impl TripPlan {
    pub fn day_count(&self) -> usize {
        self.itinerary.len()
    }

    /// Total number of scheduled activities across all days.
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }
}
