use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Everything needed to register one assistant with the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSpec {
    pub name: String,
    pub instructions: String,
    pub model: String,
    pub tool: FunctionSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Lifecycle status of a remote run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
}

/// What the polling loop should do with a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Keep waiting.
    Pending,
    /// Answer the pending tool calls.
    ActionRequired,
    Completed,
    /// The run is over and will never complete.
    Terminated,
}

impl RunStatus {
    pub fn phase(&self) -> RunPhase {
        match self {
            RunStatus::Queued | RunStatus::InProgress | RunStatus::Cancelling => RunPhase::Pending,
            RunStatus::RequiresAction => RunPhase::ActionRequired,
            RunStatus::Completed => RunPhase::Completed,
            RunStatus::Cancelled
            | RunStatus::Failed
            | RunStatus::Incomplete
            | RunStatus::Expired => RunPhase::Terminated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::RequiresAction => "requires_action",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Failed => "failed",
            RunStatus::Completed => "completed",
            RunStatus::Incomplete => "incomplete",
            RunStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function call the model wants answered before the run can continue.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToolCall {
    pub id: String,
    pub name: String,
    /// Raw JSON argument string as produced by the model.
    pub arguments: String,
}

/// Snapshot of a run as last seen by `retrieve_run`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSnapshot {
    pub id: String,
    pub status: RunStatus,
    /// `None` unless the status is `requires_action`.
    pub tool_calls: Option<Vec<PendingToolCall>>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

/// The slice of the hosted assistants API the profiler drives.
#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn create_assistant(&self, spec: &AssistantSpec) -> Result<String>;

    async fn delete_assistant(&self, assistant_id: &str) -> Result<()>;

    async fn create_thread(&self) -> Result<String>;

    /// Posts a user-role message to the thread.
    async fn create_message(&self, thread_id: &str, content: &str) -> Result<()>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunSnapshot>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<RunSnapshot>;

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> Result<()>;
}
