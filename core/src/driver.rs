use serde::Serialize;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::error::{ProfilerError, Result};
use crate::schema::Complexity;
use crate::service::{AssistantService, RunPhase, ToolOutput};
use crate::tool::simple_tool;

/// Timings and tool-call batching observed for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Seconds from thread creation to run completion.
    pub total_time: f64,
    /// Seconds from run start to run completion.
    pub tool_execution_time: f64,
    /// One entry per `requires_action` poll: how many calls that batch held.
    pub tool_calls: Vec<usize>,
    pub num_tools: u32,
    pub parallel: bool,
    pub complexity: Complexity,
}

impl RunResult {
    pub fn total_invocations(&self) -> usize {
        self.tool_calls.iter().sum()
    }
}

pub fn user_message(num_tools: u32, complexity: Complexity) -> String {
    format!(
        "Please make {num_tools} tool calls to process this message. {}",
        complexity.hint()
    )
}

/// Drives one conversation to completion, answering tool calls locally.
pub struct RunDriver<'a> {
    service: &'a dyn AssistantService,
    config: DriverConfig,
}

impl<'a> RunDriver<'a> {
    pub fn new(service: &'a dyn AssistantService, config: DriverConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Runs the assistant against a fresh thread and polls until the run completes.
    ///
    /// Does not delete the assistant; the caller owns its lifetime.
    pub async fn run_assistant(
        &self,
        assistant_id: &str,
        num_tools: u32,
        parallel: bool,
        complexity: Complexity,
    ) -> Result<RunResult> {
        let start = Instant::now();

        let thread_id = self.service.create_thread().await?;
        self.service
            .create_message(&thread_id, &user_message(num_tools, complexity))
            .await?;
        let run = self.service.create_run(&thread_id, assistant_id).await?;
        info!(thread_id = %thread_id, run_id = %run.id, "run started");

        let tool_start = Instant::now();
        let mut tool_calls = Vec::new();

        loop {
            let run = self.service.retrieve_run(&thread_id, &run.id).await?;
            debug!(run_id = %run.id, status = %run.status, "polled");

            match run.status.phase() {
                RunPhase::Completed => break,
                RunPhase::Terminated => {
                    return Err(ProfilerError::RunFailed {
                        run_id: run.id,
                        status: run.status,
                        message: run.last_error,
                    });
                }
                RunPhase::ActionRequired => {
                    let pending = run
                        .tool_calls
                        .ok_or_else(|| ProfilerError::MissingRequiredAction {
                            run_id: run.id.clone(),
                        })?;
                    tool_calls.push(pending.len());

                    let mut outputs = Vec::with_capacity(pending.len());
                    for call in pending {
                        let output = simple_tool(&call.arguments, self.config.tool_delay).await;
                        outputs.push(ToolOutput {
                            tool_call_id: call.id,
                            output,
                        });
                    }
                    self.service
                        .submit_tool_outputs(&thread_id, &run.id, outputs)
                        .await?;
                }
                RunPhase::Pending => {}
            }

            let waited = tool_start.elapsed();
            if waited >= self.config.max_poll_duration {
                return Err(ProfilerError::PollTimeout {
                    run_id: run.id,
                    waited,
                });
            }

            sleep(self.config.poll_interval).await;
        }

        let tool_execution_time = tool_start.elapsed().as_secs_f64();
        let total_time = start.elapsed().as_secs_f64();
        info!(
            total_time,
            tool_execution_time,
            batches = tool_calls.len(),
            "run completed"
        );

        Ok(RunResult {
            total_time,
            tool_execution_time,
            tool_calls,
            num_tools,
            parallel,
            complexity,
        })
    }
}
