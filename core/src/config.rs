use std::time::Duration;

use crate::error::{ProfilerError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the hosted assistants API.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ProfilerError::MissingEnv("OPENAI_API_KEY"))?;
        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = get("OPENAI_BASE_URL");

        Ok(Self { api_key, model, api_base })
    }
}

/// Timing knobs for the run driver.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Pause between two status polls.
    pub poll_interval: Duration,
    /// Simulated work per tool call.
    pub tool_delay: Duration,
    /// Give up on a run that has not completed after this long.
    pub max_poll_duration: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            tool_delay: Duration::from_millis(100),
            max_poll_duration: Duration::from_secs(600),
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let read = |key: &'static str| -> Result<Option<u64>> {
            match get(key) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|_| ProfilerError::InvalidEnv { key, value: raw }),
            }
        };

        Ok(Self {
            poll_interval: read("PROFILER_POLL_INTERVAL_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            tool_delay: read("PROFILER_TOOL_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.tool_delay),
            max_poll_duration: read("PROFILER_MAX_POLL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.max_poll_duration),
        })
    }
}
