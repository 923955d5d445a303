//! Tool argument and registration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments accepted by the Genie tool.
///
/// The derived JSON Schema is the tool's `args_schema`; both fields are
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenieToolInput {
    /// Question to ask the Genie space.
    pub question: String,
    /// Summarized chat history giving the space context on what has been
    /// talked about so far. Use "No history" when there is none.
    pub summarized_chat_history: String,
}

impl GenieToolInput {
    pub fn new(question: impl Into<String>, summarized_chat_history: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            summarized_chat_history: summarized_chat_history.into(),
        }
    }

    /// JSON Schema describing these arguments.
    pub fn json_schema() -> serde_json::Value {
        serde_json::Value::from(schemars::schema_for!(GenieToolInput))
    }
}

/// Registration record a host framework uses to advertise a tool to an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
