use tracing::info;

use crate::error::Result;
use crate::schema::Complexity;
use crate::service::{AssistantService, AssistantSpec, FunctionSpec};
use crate::tool::{TOOL_DESCRIPTION, TOOL_NAME};

pub const ASSISTANT_NAME: &str = "Function Profiler";

/// Creates and removes the per-scenario remote assistant.
pub struct Provisioner<'a> {
    service: &'a dyn AssistantService,
    model: String,
}

impl<'a> Provisioner<'a> {
    pub fn new(service: &'a dyn AssistantService, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    pub fn spec(&self, parallel: bool, complexity: Complexity) -> AssistantSpec {
        AssistantSpec {
            name: ASSISTANT_NAME.to_string(),
            instructions: instructions(parallel, complexity),
            model: self.model.clone(),
            tool: FunctionSpec {
                name: TOOL_NAME.to_string(),
                description: TOOL_DESCRIPTION.to_string(),
                parameters: complexity.schema(),
            },
        }
    }

    pub async fn create_assistant(&self, parallel: bool, complexity: Complexity) -> Result<String> {
        let spec = self.spec(parallel, complexity);
        let id = self.service.create_assistant(&spec).await?;
        info!(assistant_id = %id, parallel, %complexity, "assistant created");
        Ok(id)
    }

    pub async fn delete_assistant(&self, assistant_id: &str) -> Result<()> {
        self.service.delete_assistant(assistant_id).await?;
        info!(assistant_id, "assistant deleted");
        Ok(())
    }
}

/// The parallel/sequential hint is advisory; the model may batch however it likes.
pub fn instructions(parallel: bool, complexity: Complexity) -> String {
    let mode = if parallel { "in parallel" } else { "sequentially" };
    format!(
        "You are testing function call performance.\n\
         When asked to process something, you should make multiple tool calls {mode}.\n\
         If sequentially, you can only call one function at a time. If prompted for many tool calls,\n\
         wait for each tool call to finish before asking for the next.\n\
         Always use the {TOOL_NAME} function for processing.\n\
         Use appropriate complexity level ({complexity}) when making tool calls."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_carry_mode_and_tier() {
        let seq = instructions(false, Complexity::Medium);
        assert!(seq.contains("tool calls sequentially."));
        assert!(seq.contains("complexity level (medium)"));
        assert!(seq.contains("simple_tool"));

        let par = instructions(true, Complexity::Simple);
        assert!(par.contains("tool calls in parallel."));
    }
}
