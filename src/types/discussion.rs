use crate::completion_schema;
use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A piece of text stamped with the time it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimestampedEntry {
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub content: String,
}

impl TimestampedEntry {
    pub fn now(content: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            content: content.into(),
        }
    }
}

/// Record carried through the discussion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionState {
    pub current_question: String,
    /// Participant answers to `current_question`
    #[serde(default)]
    pub discussions: Vec<String>,
    #[serde(default)]
    pub summaries: Vec<TimestampedEntry>,
    #[serde(default)]
    pub memories: Vec<TimestampedEntry>,
    #[serde(default)]
    pub next_question: Option<String>,
}

impl DiscussionState {
    pub fn new(current_question: impl Into<String>, discussions: Vec<String>) -> Self {
        Self {
            current_question: current_question.into(),
            discussions,
            summaries: Vec::new(),
            memories: Vec::new(),
            next_question: None,
        }
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summaries.push(TimestampedEntry::now(summary));
        self
    }

    /// Push a memory, first evicting the oldest one when `window` is reached.
    ///
    /// Only one memory is evicted per call, so a state that arrives over the
    /// window shrinks by at most one.
    pub fn with_memory(mut self, memory: String, window: usize) -> Self {
        if !self.memories.is_empty() && self.memories.len() >= window.max(1) {
            self.memories.remove(0);
        }
        self.memories.push(TimestampedEntry::now(memory));
        self
    }

    pub fn with_next_question(self, question: String) -> Self {
        Self {
            next_question: Some(question),
            ..self
        }
    }

    /// Up to the `n` newest summaries, oldest first.
    pub fn recent_summaries(&self, n: usize) -> &[TimestampedEntry] {
        let start = self.summaries.len().saturating_sub(n);
        &self.summaries[start..]
    }
}

/// Short summary of one round of discussion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct SummarisationResponse {
    /// Concise summary of the discussion, at most 50 words
    pub summary: String,
}

/// Memories worth keeping after reading the latest summary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct MemoryManagementResponse {
    /// Updated memories: important points, still-relevant older points, and links between them
    pub new_memories: String,
}

/// Follow-up question for the next round.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct QuestionGenerationResponse {
    /// Thought-provoking follow-up question, under 100 words
    pub next_question: String,
}
