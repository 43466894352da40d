use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One completed stage of a traced pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    /// Stage name as reported by `Stage::name`
    pub stage: String,
    /// Wall-clock time spent in the stage
    pub duration: Duration,
    /// The state as it looked right after the stage returned
    pub snapshot: Value,
}

/// Result of a traced pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun<S> {
    /// Final state handed back by the last stage
    pub state: S,
    /// Per-stage records, in execution order
    pub stages: Vec<StageRecord>,
    /// Total execution duration
    pub duration: Duration,
}

impl<S> PipelineRun<S> {
    pub fn new(state: S, stages: Vec<StageRecord>, duration: Duration) -> Self {
        Self {
            state,
            stages,
            duration,
        }
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|record| record.stage.as_str()).collect()
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &Value> {
        self.stages.iter().map(|record| &record.snapshot)
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Generate a human-readable replay of the execution
    pub fn replay(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Pipeline Execution Trace ===".to_string());
        lines.push(format!("Duration: {:.2}s", self.duration.as_secs_f64()));
        lines.push(format!("Stages: {}", self.stages.len()));
        lines.push(String::new());
        lines.push("--- Stages ---".to_string());

        for (idx, record) in self.stages.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({:.2}s)",
                idx + 1,
                record.stage,
                record.duration.as_secs_f64()
            ));
            lines.push(format!("   State: {}", record.snapshot));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run() -> PipelineRun<u8> {
        PipelineRun::new(
            3,
            vec![
                StageRecord {
                    stage: "extract_preferences".to_string(),
                    duration: Duration::from_millis(1200),
                    snapshot: json!({"step": 1}),
                },
                StageRecord {
                    stage: "recommend_activities".to_string(),
                    duration: Duration::from_millis(800),
                    snapshot: json!({"step": 2}),
                },
            ],
            Duration::from_secs(2),
        )
    }

    #[test]
    fn test_stage_names_in_order() {
        assert_eq!(
            run().stage_names(),
            vec!["extract_preferences", "recommend_activities"]
        );
    }

    #[test]
    fn test_replay_format() {
        let replay = run().replay();

        assert!(replay.contains("Pipeline Execution Trace"));
        assert!(replay.contains("Duration: 2.00s"));
        assert!(replay.contains("1. extract_preferences (1.20s)"));
        assert!(replay.contains(r#"State: {"step":2}"#));
    }
}
