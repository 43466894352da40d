use crate::completion_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-text description of the traveller, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserInput {
    /// User's input
    pub user_input: String,
}

impl UserInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            user_input: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.user_input
    }
}

impl From<&str> for UserInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Personality profile extracted from the user's free-text input.
///
/// Every field is model-produced free text; nothing checks that the
/// combination is coherent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[completion_schema]
pub struct PersonalityProfile {
    /// Personality traits (e.g., 'extroverted', 'adventurous', 'organized')
    pub personality_traits: Vec<String>,
    /// Specific interests (e.g., 'photography', 'history', 'food')
    pub interests: Vec<String>,
    /// Preferred activity intensity (Low/Medium/High)
    pub energy_level: String,
    /// Solo/Small Group/Large Group
    pub social_preference: String,
    /// $ (0-20), $$ (20-100), $$$ (100+)
    pub budget_level: String,
}

impl PersonalityProfile {
    /// Case-insensitive substring match against the extracted interests.
    pub fn mentions_interest(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.interests
            .iter()
            .any(|interest| interest.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CompletionSchema;

    #[test]
    fn test_profile_schema_lists_all_fields() {
        let schema = PersonalityProfile::schema().schema_json();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        for field in [
            "personality_traits",
            "interests",
            "energy_level",
            "social_preference",
            "budget_level",
        ] {
            assert!(required.contains(&field), "missing {field}");
        }
        assert_eq!(
            schema["properties"]["energy_level"]["description"],
            "Preferred activity intensity (Low/Medium/High)"
        );
    }

    #[test]
    fn test_mentions_interest_is_fuzzy() {
        let profile = PersonalityProfile {
            personality_traits: vec!["extroverted".to_string()],
            interests: vec!["Local History".to_string(), "street food".to_string()],
            energy_level: "Medium".to_string(),
            social_preference: "Small Group".to_string(),
            budget_level: "$$$".to_string(),
        };

        assert!(profile.mentions_interest("history"));
        assert!(profile.mentions_interest("FOOD"));
        assert!(!profile.mentions_interest("hiking"));
    }
}
