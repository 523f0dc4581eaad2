use async_openai::{
    config::OpenAIConfig,
    types::{
        AssistantTools, AssistantToolsFunction, CreateAssistantRequestArgs,
        CreateMessageRequestArgs, CreateRunRequestArgs, CreateThreadRequest, FunctionObjectArgs,
        MessageRole, RunObject, RunStatus as ApiRunStatus, SubmitToolOutputsRunRequest,
        ToolsOutputs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::service::{
    AssistantService, AssistantSpec, PendingToolCall, RunSnapshot, RunStatus, ToolOutput,
};

/// `AssistantService` backed by the OpenAI assistants (beta) API.
///
/// Built once at startup and shared by reference for the whole batch.
pub struct OpenAiAssistants {
    client: Client<OpenAIConfig>,
}

impl OpenAiAssistants {
    pub fn new(config: &ServiceConfig) -> Self {
        let mut openai = OpenAIConfig::new().with_api_key(&config.api_key);
        if let Some(base) = &config.api_base {
            openai = openai.with_api_base(base);
        }
        let client = Client::with_config(openai);

        info!("Assistant service client ready. Model: {}", config.model);
        Self { client }
    }
}

#[async_trait]
impl AssistantService for OpenAiAssistants {
    async fn create_assistant(&self, spec: &AssistantSpec) -> Result<String> {
        let function = FunctionObjectArgs::default()
            .name(&spec.tool.name)
            .description(&spec.tool.description)
            .parameters(spec.tool.parameters.clone())
            .build()?;

        let request = CreateAssistantRequestArgs::default()
            .name(&spec.name)
            .instructions(&spec.instructions)
            .model(&spec.model)
            .tools(vec![AssistantTools::Function(AssistantToolsFunction { function })])
            .build()?;

        let assistant = self.client.assistants().create(request).await?;
        Ok(assistant.id)
    }

    async fn delete_assistant(&self, assistant_id: &str) -> Result<()> {
        let response = self.client.assistants().delete(assistant_id).await?;
        debug!("Assistant {} deleted: {}", response.id, response.deleted);
        Ok(())
    }

    async fn create_thread(&self) -> Result<String> {
        let thread = self
            .client
            .threads()
            .create(CreateThreadRequest::default())
            .await?;
        Ok(thread.id)
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<()> {
        let request = CreateMessageRequestArgs::default()
            .role(MessageRole::User)
            .content(content)
            .build()?;

        self.client
            .threads()
            .messages(thread_id)
            .create(request)
            .await?;
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunSnapshot> {
        let request = CreateRunRequestArgs::default()
            .assistant_id(assistant_id)
            .build()?;

        let run = self.client.threads().runs(thread_id).create(request).await?;
        Ok(snapshot(run))
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<RunSnapshot> {
        let run = self.client.threads().runs(thread_id).retrieve(run_id).await?;
        Ok(snapshot(run))
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> Result<()> {
        let request = SubmitToolOutputsRunRequest {
            tool_outputs: outputs
                .into_iter()
                .map(|o| ToolsOutputs {
                    tool_call_id: Some(o.tool_call_id),
                    output: Some(o.output),
                })
                .collect(),
            stream: None,
        };

        self.client
            .threads()
            .runs(thread_id)
            .submit_tool_outputs(run_id, request)
            .await?;
        Ok(())
    }
}

fn snapshot(run: RunObject) -> RunSnapshot {
    let tool_calls = run.required_action.map(|action| {
        action
            .submit_tool_outputs
            .tool_calls
            .into_iter()
            .map(|call| PendingToolCall {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect()
    });

    RunSnapshot {
        id: run.id,
        status: status(run.status),
        tool_calls,
        last_error: run.last_error.map(|e| e.message),
    }
}

fn status(status: ApiRunStatus) -> RunStatus {
    match status {
        ApiRunStatus::Queued => RunStatus::Queued,
        ApiRunStatus::InProgress => RunStatus::InProgress,
        ApiRunStatus::RequiresAction => RunStatus::RequiresAction,
        ApiRunStatus::Cancelling => RunStatus::Cancelling,
        ApiRunStatus::Cancelled => RunStatus::Cancelled,
        ApiRunStatus::Failed => RunStatus::Failed,
        ApiRunStatus::Completed => RunStatus::Completed,
        ApiRunStatus::Incomplete => RunStatus::Incomplete,
        ApiRunStatus::Expired => RunStatus::Expired,
    }
}
