#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::{collections::HashMap, sync::Mutex};
use trip_planner_rs::{ChatModel, PlannerError, Result, StructuredRequest};

pub const SAMPLE_INPUT: &str = "I am an extrovert, I like history and food, I am medium energy, \
                                I prefer small groups, and I have a budget of $200";

/// Answers each request from a canned payload keyed by schema name.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    answers: HashMap<&'static str, Value>,
    failures: HashMap<&'static str, String>,
    calls: Mutex<Vec<StructuredRequest>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model that answers every trip-planner stage successfully.
    pub fn trip_planner() -> Self {
        Self::new()
            .answer("PersonalityProfile", profile_json())
            .answer("ActivitiesAndReason", recommendations_json())
            .answer("TripPlan", trip_plan_json(2))
    }

    pub fn answer(mut self, schema: &'static str, payload: Value) -> Self {
        self.answers.insert(schema, payload);
        self
    }

    pub fn fail(mut self, schema: &'static str, message: &str) -> Self {
        self.failures.insert(schema, message.to_string());
        self
    }

    pub fn schemas_called(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.schema.schema_name())
            .collect()
    }

    pub fn calls(&self) -> Vec<StructuredRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: &StructuredRequest) -> Result<Value> {
        self.calls.lock().unwrap().push(request.clone());
        let schema = request.schema.schema_name();

        if let Some(message) = self.failures.get(schema) {
            return Err(PlannerError::Api {
                status: 503,
                message: message.clone(),
            });
        }

        self.answers
            .get(schema)
            .cloned()
            .ok_or_else(|| PlannerError::Unknown(format!("no scripted answer for {schema}")))
    }
}

pub fn profile_json() -> Value {
    json!({
        "personality_traits": ["extroverted", "sociable"],
        "interests": ["history", "food"],
        "energy_level": "Medium",
        "social_preference": "Small Group",
        "budget_level": "$$$"
    })
}

fn activity(name: &str, location: &str, best_for: &[&str]) -> Value {
    json!({
        "name": name,
        "location": location,
        "personality_match": ["extroverted"],
        "social_level": "Small Group",
        "energy_required": "Medium",
        "price_range": "$$",
        "best_for": best_for
    })
}

pub fn recommendations_json() -> Value {
    json!({
        "activities": [
            activity("Chinatown Heritage Walk", "Chinatown", &["history"]),
            activity("Maxwell Food Centre Hawker Crawl", "Tanjong Pagar", &["food"]),
            activity("Fort Canning Park Ghost Tour", "Fort Canning", &["history", "nightlife"])
        ],
        "reason": "History walks and hawker food suit an extroverted, food-loving traveller."
    })
}

pub fn trip_plan_json(days: usize) -> Value {
    let itinerary: Vec<Value> = (1..=days)
        .map(|day| {
            let mut morning = activity("Chinatown Heritage Walk", "Chinatown", &["history"]);
            morning["time"] = json!("9:00 AM");
            let mut lunch = activity("Maxwell Food Centre Hawker Crawl", "Tanjong Pagar", &["food"]);
            lunch["time"] = json!("12:30 PM");
            json!({ "day": format!("Day {day}"), "activities": [morning, lunch] })
        })
        .collect();

    json!({ "itinerary": itinerary })
}
