use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;

use crate::{error::Result, schemas::SchemaHandle};

/// One structured chat completion: a system instruction, a user message, and
/// the schema the answer has to follow.
#[derive(Clone, Debug)]
pub struct StructuredRequest {
    pub system: String,
    pub user: String,
    pub schema: SchemaHandle,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl StructuredRequest {
    pub fn messages(&self) -> Vec<Value> {
        vec![
            json!({ "role": "system", "content": self.system }),
            json!({ "role": "user", "content": self.user }),
        ]
    }
}

/// A chat model that answers with a JSON payload.
///
/// Each call is independent; no conversation state is kept between calls.
#[async_trait]
pub trait ChatModel: Send + Sync + fmt::Debug {
    async fn complete(&self, request: &StructuredRequest) -> Result<Value>;
}
