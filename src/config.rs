use crate::error::{PlannerError, Result};
use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TRIP_DAYS: u32 = 2;

/// Settings shared by every stage of a pipeline run
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
    pub max_retries: usize,
    /// Number of day entries the composition stage asks for
    pub trip_days: u32,
    /// How many memories the discussion pipeline keeps
    pub memory_window: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: Some(2000),
            timeout: Duration::from_secs(120),
            max_retries: 2,
            trip_days: DEFAULT_TRIP_DAYS,
            memory_window: 1,
        }
    }
}

impl PlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_trip_days(mut self, trip_days: u32) -> Self {
        self.trip_days = trip_days;
        self
    }

    pub fn with_memory_window(mut self, memory_window: usize) -> Self {
        self.memory_window = memory_window;
        self
    }

    /// Build a config from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            PlannerError::Config(
                "OPENAI_API_KEY environment variable must be set before starting the planner"
                    .to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("OPENAI_BASE_URL").or_else(|_| env::var("OPENROUTER_BASE_URL"))
        {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("PLANNER_MODEL") {
            config.model = model;
        }
        if let Some(temperature) = parse_var("PLANNER_TEMPERATURE")? {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = parse_var("PLANNER_MAX_TOKENS")? {
            config.max_tokens = Some(max_tokens);
        }
        if let Some(secs) = parse_var::<u64>("PLANNER_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(max_retries) = parse_var("PLANNER_MAX_RETRIES")? {
            config.max_retries = max_retries;
        }
        if let Some(trip_days) = parse_var("PLANNER_TRIP_DAYS")? {
            config.trip_days = trip_days;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PlannerError::Config(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_plan_two_days() {
        let config = PlannerConfig::new("key");
        assert_eq!(config.trip_days, 2);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.memory_window, 1);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let config = PlannerConfig::new("key")
            .with_model("openai/gpt-4.1-mini")
            .with_trip_days(3)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "openai/gpt-4.1-mini");
        assert_eq!(config.trip_days, 3);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("PLANNER_TEST_GARBAGE_DAYS", "two");
        let parsed = parse_var::<u32>("PLANNER_TEST_GARBAGE_DAYS");
        env::remove_var("PLANNER_TEST_GARBAGE_DAYS");

        assert!(matches!(parsed, Err(PlannerError::Config(_))));
        assert!(parse_var::<u32>("PLANNER_TEST_UNSET_VAR").unwrap().is_none());
    }
}
