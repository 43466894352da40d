pub mod activity;
pub mod discussion;
pub mod itinerary;
pub mod profile;
pub mod response;
pub mod result;
pub mod state;

pub use activity::{ActivitiesAndReason, Activity, ActivityAndTime};
pub use discussion::{
    DiscussionState, MemoryManagementResponse, QuestionGenerationResponse, SummarisationResponse,
    TimestampedEntry,
};
pub use itinerary::{Itinerary, TripPlan};
pub use profile::{PersonalityProfile, UserInput};
pub use response::{deserialize_structured_response, StructuredPayload};
pub use result::{PipelineRun, StageRecord};
pub use state::{AgentState, StageProgress};
