use crate::{error::PlannerError, schemas::SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate an LLM payload against the schema it was asked to follow.
pub(crate) fn validate_structured_payload(
    schema: &SchemaHandle,
    payload: &Value,
) -> Result<(), PlannerError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx == MAX_SCHEMA_ERRORS {
                truncated = true;
                break;
            }
            let path = error.instance_path.to_string();
            let path = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            details.push(format!("{}: {}", path, error));
        }

        let mut detail_str = details.join("; ");
        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "LLM output does not match `{}` schema: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

/// Suffix appended to a stage's system prompt so providers without native
/// `response_format` support still answer with bare JSON.
pub(crate) fn schema_instructions(schema: &SchemaHandle) -> String {
    format!(
        "\n\nStructured response requirement: reply with a single JSON object that strictly conforms to the `{}` schema below. Do not wrap it in prose.\n{}",
        schema.schema_name(),
        schema.schema_json()
    )
}
