use async_trait::async_trait;
use serde::Serialize;
use std::{fmt, time::Instant};
use tracing::{error, info};

use crate::{
    error::Result,
    services::ChatModel,
    types::{PipelineRun, StageRecord},
};

/// One LLM-backed step. Takes the record produced so far and returns it with
/// this step's output added.
#[async_trait]
pub trait Stage<S>: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    async fn run(&self, model: &dyn ChatModel, state: S) -> Result<S>;
}

/// Fixed, linear sequence of stages.
///
/// Stages run strictly in insertion order. The first error is returned as-is
/// and whatever the earlier stages produced is dropped with the state.
pub struct Pipeline<S> {
    stages: Vec<Box<dyn Stage<S>>>,
}

impl<S> fmt::Debug for Pipeline<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl<S> Default for Pipeline<S> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<S> Pipeline<S>
where
    S: Send + 'static,
{
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn then(mut self, stage: impl Stage<S> + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub async fn run(&self, model: &dyn ChatModel, state: S) -> Result<S> {
        let start = Instant::now();
        let mut state = state;

        for stage in &self.stages {
            state = run_stage(stage.as_ref(), model, state).await?;
        }

        info!(
            target: "trip_planner::pipeline",
            stages = self.stages.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "pipeline finished"
        );
        Ok(state)
    }

    /// Like [`Pipeline::run`], also recording the serialized state after each stage.
    pub async fn run_traced(&self, model: &dyn ChatModel, state: S) -> Result<PipelineRun<S>>
    where
        S: Serialize,
    {
        let start = Instant::now();
        let mut state = state;
        let mut records = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            state = run_stage(stage.as_ref(), model, state).await?;
            records.push(StageRecord {
                stage: stage.name().to_string(),
                duration: stage_start.elapsed(),
                snapshot: serde_json::to_value(&state)?,
            });
        }

        Ok(PipelineRun::new(state, records, start.elapsed()))
    }
}

async fn run_stage<S>(stage: &dyn Stage<S>, model: &dyn ChatModel, state: S) -> Result<S>
where
    S: Send + 'static,
{
    let name = stage.name();
    let start = Instant::now();
    info!(target: "trip_planner::pipeline", stage = name, "stage started");

    match stage.run(model, state).await {
        Ok(next) => {
            info!(
                target: "trip_planner::pipeline",
                stage = name,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "stage completed"
            );
            Ok(next)
        }
        Err(err) => {
            error!(
                target: "trip_planner::pipeline",
                stage = name,
                code = err.error_code(),
                "stage failed: {}",
                err
            );
            Err(err)
        }
    }
}
