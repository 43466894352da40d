pub mod model;
pub mod openai_client;
pub mod structured;

pub use model::{ChatModel, StructuredRequest};
pub use openai_client::{ChatCompletionRequest, OpenAIClient};
pub use structured::{complete_structured, Sampling};
