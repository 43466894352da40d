use crate::completion_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A thing to do in the city. Catalog entries and model suggestions share
/// this shape; where an activity came from is not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    pub name: String,
    pub location: String,
    /// Personality traits this activity suits
    pub personality_match: Vec<String>,
    pub social_level: String,
    pub energy_required: String,
    pub price_range: String,
    /// Perfect for people who love...
    pub best_for: Vec<String>,
}

/// Recommended activities together with the model's justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct ActivitiesAndReason {
    /// Activities
    pub activities: Vec<Activity>,
    /// Reason for recommendations
    pub reason: String,
}

/// An activity placed at a time of day.
///
/// On the wire the activity's fields sit next to `time` in a single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityAndTime {
    #[serde(flatten)]
    pub activity: Activity,
    /// Time of the activity
    pub time: String,
}

impl ActivityAndTime {
    pub fn new(activity: Activity, time: impl Into<String>) -> Self {
        Self {
            activity,
            time: time.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hawker() -> Activity {
        Activity {
            name: "Maxwell Food Centre".to_string(),
            location: "Chinatown".to_string(),
            personality_match: vec!["foodie".to_string()],
            social_level: "Small Group".to_string(),
            energy_required: "Low".to_string(),
            price_range: "$".to_string(),
            best_for: vec!["food".to_string()],
        }
    }

    #[test]
    fn test_timed_activity_serializes_flat() {
        let slot = ActivityAndTime::new(hawker(), "12:30 PM");
        let value = serde_json::to_value(&slot).unwrap();

        assert_eq!(value["name"], "Maxwell Food Centre");
        assert_eq!(value["time"], "12:30 PM");
        assert!(value.get("activity").is_none());
    }

    #[test]
    fn test_timed_activity_reads_flat_json() {
        let slot: ActivityAndTime = serde_json::from_value(json!({
            "name": "Maxwell Food Centre",
            "location": "Chinatown",
            "personality_match": ["foodie"],
            "social_level": "Small Group",
            "energy_required": "Low",
            "price_range": "$",
            "best_for": ["food"],
            "time": "Lunch"
        }))
        .unwrap();

        assert_eq!(slot.activity, hawker());
        assert_eq!(slot.time, "Lunch");
    }
}
