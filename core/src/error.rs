use std::time::Duration;

use async_openai::error::OpenAIError;
use thiserror::Error;

use crate::service::RunStatus;

pub type Result<T> = std::result::Result<T, ProfilerError>;

#[derive(Debug, Error)]
pub enum ProfilerError {
    /// Any failure reported by the remote assistant service (network, auth, bad request).
    #[error("assistant service error: {0}")]
    Api(#[from] OpenAIError),

    #[error("{0} must be set in the environment or .env")]
    MissingEnv(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    /// The run reached a terminal status other than `completed`.
    #[error("run {run_id} ended with status {status}: {}", .message.as_deref().unwrap_or("no error details"))]
    RunFailed {
        run_id: String,
        status: RunStatus,
        message: Option<String>,
    },

    #[error("run {run_id} requires action but carries no tool calls")]
    MissingRequiredAction { run_id: String },

    #[error("run {run_id} did not complete within {waited:?}")]
    PollTimeout { run_id: String, waited: Duration },

    #[error("failed to encode results: {0}")]
    Serialize(#[from] serde_json::Error),
}
