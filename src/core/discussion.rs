//! Discussion facilitation: summarise the latest answers, keep a rolling set
//! of memories, and ask the next question.

use async_trait::async_trait;
use serde_json::to_string_pretty;

use super::pipeline::{Pipeline, Stage};
use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    services::{complete_structured, ChatModel, Sampling},
    types::{
        DiscussionState, MemoryManagementResponse, QuestionGenerationResponse,
        SummarisationResponse,
    },
};

const SUMMARY_TOKENS: u32 = 1000;
const QUESTION_TOKENS: u32 = 100;

impl Pipeline<DiscussionState> {
    /// Summarise -> Manage memory -> Generate question.
    pub fn discussion(config: &PlannerConfig) -> Self {
        let base = Sampling::from(config);
        Pipeline::new()
            .then(Summarise {
                sampling: Sampling {
                    max_tokens: Some(SUMMARY_TOKENS),
                    ..base
                },
            })
            .then(ManageMemory {
                sampling: Sampling {
                    max_tokens: Some(SUMMARY_TOKENS),
                    ..base
                },
                window: config.memory_window,
            })
            .then(GenerateQuestion {
                sampling: Sampling {
                    max_tokens: Some(QUESTION_TOKENS),
                    ..base
                },
            })
    }
}

#[derive(Debug, Clone)]
pub struct Summarise {
    pub sampling: Sampling,
}

#[async_trait]
impl Stage<DiscussionState> for Summarise {
    fn name(&self) -> &'static str {
        "summarise"
    }

    async fn run(&self, model: &dyn ChatModel, state: DiscussionState) -> Result<DiscussionState> {
        let system = "You are a discussion summarizer. Create a concise summary of the \
                      discussion, extracting key points and insights from the answers. Focus on \
                      patterns, unique perspectives, and potential areas for deeper exploration.";
        let user = format!(
            "Question discussed: {}\n\nAnswers from participants:\n{}\n\nProvide a short summary of the discussion (max 50 words).",
            state.current_question,
            to_string_pretty(&state.discussions)?
        );

        let response: SummarisationResponse =
            complete_structured(model, system, user, self.sampling).await?;
        Ok(state.with_summary(response.summary))
    }
}

#[derive(Debug, Clone)]
pub struct ManageMemory {
    pub sampling: Sampling,
    pub window: usize,
}

#[async_trait]
impl Stage<DiscussionState> for ManageMemory {
    fn name(&self) -> &'static str {
        "manage_memory"
    }

    async fn run(&self, model: &dyn ChatModel, state: DiscussionState) -> Result<DiscussionState> {
        let latest = state
            .summaries
            .last()
            .ok_or(PlannerError::MissingStageInput("summaries"))?;

        let system = "You are a memory manager for an ongoing discussion. Analyze the new \
                      summary and existing memories to: 1. identify important points to \
                      remember, 2. determine which old memories are still relevant, 3. suggest \
                      connections between past and present discussions, 4. consider the \
                      temporal relevance of memories.";
        let user = format!(
            "New summary: {}\n\nExisting memories:\n{}\n\nDetermine which memories to keep, update, or create, and return the updated memories.",
            latest.content,
            to_string_pretty(&state.memories)?
        );

        let response: MemoryManagementResponse =
            complete_structured(model, system, user, self.sampling).await?;
        Ok(state.with_memory(response.new_memories, self.window))
    }
}

#[derive(Debug, Clone)]
pub struct GenerateQuestion {
    pub sampling: Sampling,
}

#[async_trait]
impl Stage<DiscussionState> for GenerateQuestion {
    fn name(&self) -> &'static str {
        "generate_question"
    }

    async fn run(&self, model: &dyn ChatModel, state: DiscussionState) -> Result<DiscussionState> {
        let system = "You are a discussion facilitator generating thought-provoking follow-up \
                      questions. Consider recent discussions, key memories, and the previous \
                      question to create an engaging question that deepens the conversation.";
        let user = format!(
            "Previous question: {}\n\nRecent discussion summaries:\n{}\n\nRelevant memories:\n{}\n\nGenerate a thought-provoking follow-up question in less than 100 words.",
            state.current_question,
            to_string_pretty(state.recent_summaries(2))?,
            to_string_pretty(&state.memories)?
        );

        let response: QuestionGenerationResponse =
            complete_structured(model, system, user, self.sampling).await?;
        Ok(state.with_next_question(response.next_question))
    }
}
