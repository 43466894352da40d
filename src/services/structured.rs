use tracing::debug;

use super::model::{ChatModel, StructuredRequest};
use crate::{
    config::PlannerConfig,
    error::Result,
    schemas::{
        validation::{schema_instructions, validate_structured_payload},
        CompletionSchema,
    },
    types::StructuredPayload,
};

/// Sampling settings a stage passes along with its prompt.
#[derive(Clone, Copy, Debug)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: Some(2000),
        }
    }
}

impl From<&PlannerConfig> for Sampling {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Ask `model` for a `T`, then check the answer against `T`'s schema and decode it.
///
/// The model's answer is never repaired or re-requested here.
pub async fn complete_structured<T: CompletionSchema>(
    model: &dyn ChatModel,
    system: &str,
    user: String,
    sampling: Sampling,
) -> Result<T> {
    let schema = T::schema();
    let mut system = system.to_string();
    system.push_str(&schema_instructions(schema));

    let request = StructuredRequest {
        system,
        user,
        schema: schema.clone(),
        temperature: sampling.temperature,
        max_tokens: sampling.max_tokens,
    };

    let value = model.complete(&request).await?;
    debug!(schema = schema.schema_name(), payload = %value, "structured payload received");

    validate_structured_payload(schema, &value)?;
    StructuredPayload::new(schema.clone(), value).deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PlannerError, types::PersonalityProfile};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct FixedModel {
        answer: Value,
        seen: Mutex<Vec<StructuredRequest>>,
    }

    #[async_trait]
    impl ChatModel for FixedModel {
        async fn complete(&self, request: &StructuredRequest) -> Result<Value> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.answer.clone())
        }
    }

    #[tokio::test]
    async fn test_decodes_valid_answer() {
        let model = FixedModel {
            answer: json!({
                "personality_traits": ["calm"],
                "interests": ["gardens"],
                "energy_level": "Low",
                "social_preference": "Solo",
                "budget_level": "$"
            }),
            seen: Mutex::new(Vec::new()),
        };

        let profile: PersonalityProfile =
            complete_structured(&model, "Extract.", "I like gardens".to_string(), Sampling::default())
                .await
                .unwrap();
        assert_eq!(profile.interests, vec!["gardens"]);

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].system.starts_with("Extract."));
        assert!(seen[0].system.contains("`PersonalityProfile`"));
        assert_eq!(seen[0].schema.schema_name(), "PersonalityProfile");
    }

    #[test]
    fn test_rejects_schema_violation() {
        let model = FixedModel {
            answer: json!({ "personality_traits": "not a list" }),
            seen: Mutex::new(Vec::new()),
        };

        let result = tokio_test::block_on(complete_structured::<PersonalityProfile>(
            &model,
            "Extract.",
            String::new(),
            Sampling::default(),
        ));
        assert!(matches!(result, Err(PlannerError::Validation(_))));
    }
}
