pub mod discussion;
pub mod pipeline;
pub mod trip;

pub use discussion::{GenerateQuestion, ManageMemory, Summarise};
pub use pipeline::{Pipeline, Stage};
pub use trip::{ComposeItinerary, ExtractPreferences, RecommendActivities};
