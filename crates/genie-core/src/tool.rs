//! Genie as a callable tool.
//!
//! `GenieTool` lets an LLM-driven agent ask a Genie space a question on
//! demand. It advertises its name, description and argument schema so the
//! host framework can register it for function calling.

use std::future::Future;
use std::sync::Arc;

use genie_types::config::GenieConfig;
use genie_types::error::GenieError;
use genie_types::tool::{GenieToolInput, ToolDefinition};

use crate::backend::GenieConnector;

/// A tool an agent framework can register and invoke.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the arguments `invoke` accepts.
    fn args_schema(&self) -> &serde_json::Value;

    /// Run the tool with raw JSON arguments.
    fn invoke(
        &self,
        args: serde_json::Value,
    ) -> impl Future<Output = Result<String, GenieError>> + Send;

    /// Registration record for advertising the tool to an LLM.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.args_schema().clone(),
        }
    }
}

/// Tool asking a Genie space a question plus summarized chat history.
#[derive(Clone)]
pub struct GenieTool {
    space_id: String,
    name: String,
    description: String,
    args_schema: serde_json::Value,
    connector: Arc<dyn GenieConnector>,
}

impl GenieTool {
    pub fn new(
        space_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        connector: impl GenieConnector + 'static,
    ) -> Self {
        Self {
            space_id: space_id.into(),
            name: name.into(),
            description: description.into(),
            args_schema: GenieToolInput::json_schema(),
            connector: Arc::new(connector),
        }
    }

    pub fn from_config(config: &GenieConfig, connector: impl GenieConnector + 'static) -> Self {
        Self::new(
            &config.space_id,
            &config.agent_name,
            &config.tool_description,
            connector,
        )
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    /// Ask the space `input.question`.
    ///
    /// Returns the answer's `response` verbatim, or `""` when the space gave
    /// no answer. Backend errors are returned unchanged.
    #[tracing::instrument(
        name = "genie_tool_invoke",
        skip_all,
        fields(
            gen_ai.operation.name = "execute_tool",
            gen_ai.agent.id = %self.space_id,
            gen_ai.tool.name = %self.name,
        )
    )]
    pub async fn invoke_typed(&self, input: &GenieToolInput) -> Result<String, GenieError> {
        let genie = self.connector.connect(&self.space_id)?;
        let result = genie
            .ask_question_with_details(&input.question, &input.summarized_chat_history)
            .await?;

        tracing::debug!(answered = result.is_some(), "genie tool finished");
        Ok(result.map(|r| r.response).unwrap_or_default())
    }
}

impl Tool for GenieTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn args_schema(&self) -> &serde_json::Value {
        &self.args_schema
    }

    fn invoke(
        &self,
        args: serde_json::Value,
    ) -> impl Future<Output = Result<String, GenieError>> + Send {
        async move {
            let input: GenieToolInput = serde_json::from_value(args)
                .map_err(|e| GenieError::InvalidArguments(e.to_string()))?;
            self.invoke_typed(&input).await
        }
    }
}

impl std::fmt::Debug for GenieTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenieTool")
            .field("space_id", &self.space_id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
