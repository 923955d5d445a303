//! Configuration types for a Genie space binding.
//!
//! `GenieConfig` represents a `genie.toml` naming the space to query and how
//! the agent step and tool present themselves to the host framework.

use serde::{Deserialize, Serialize};

/// Binding between a Genie space and its agent/tool adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenieConfig {
    /// Identifier of the Genie space to query.
    pub space_id: String,

    /// Display name for the agent step and tool.
    #[serde(default = "default_agent_name")]
    pub agent_name: String,

    /// Human-readable description advertised with the tool.
    #[serde(default = "default_tool_description")]
    pub tool_description: String,
}

pub fn default_agent_name() -> String {
    "Genie".to_string()
}

fn default_tool_description() -> String {
    "Ask a Genie space questions about its data in natural language.".to_string()
}

impl GenieConfig {
    /// Config for `space_id` with the default name and description.
    pub fn new(space_id: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            agent_name: default_agent_name(),
            tool_description: default_tool_description(),
        }
    }
}
