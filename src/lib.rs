//! trip-planner-rs: personality-based Singapore trip planning on top of an LLM
//!
//! Free text about a traveller goes through three structured LLM calls in a
//! fixed order (extract a profile, recommend activities, compose a two-day
//! itinerary). Every call asks for JSON matching a declared schema, which is
//! validated and decoded into the types in [`types`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{AgentState, OpenAIClient, Pipeline, PlannerConfig, UserInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlannerConfig::from_env()?;
//!     let client = OpenAIClient::new(&config)?;
//!     let pipeline = Pipeline::trip_planner(&config);
//!
//!     let input = UserInput::new("I love street food and history, medium energy, $$");
//!     let state = pipeline.run(&client, AgentState::new(input)).await?;
//!     println!("{:#?}", state.final_trip_plan);
//!     Ok(())
//! }
//! ```

extern crate self as trip_planner_rs;

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod schemas;
pub mod services;
pub mod types;

pub use crate::core::{
    ComposeItinerary, ExtractPreferences, GenerateQuestion, ManageMemory, Pipeline,
    RecommendActivities, Stage, Summarise,
};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use schemas::{CompletionSchema, SchemaHandle};
pub use services::{complete_structured, ChatModel, OpenAIClient, Sampling, StructuredRequest};
pub use trip_planner_macros::completion_schema;
pub use types::{
    ActivitiesAndReason, Activity, ActivityAndTime, AgentState, DiscussionState, Itinerary,
    PersonalityProfile, PipelineRun, StageProgress, StageRecord, TripPlan, UserInput,
};

pub use schemas as schema;

#[cfg(feature = "cli")]
pub mod cli;
