//! Agent step envelopes.
//!
//! An agent step receives an [`AgentInput`] (`{"messages": [...]}`) and
//! answers with an [`AgentMessage`] holding the AI messages it produced.

use serde::{Deserialize, Serialize};

use crate::chat::ChatTurn;

/// Payload handed to an agent step by the host framework.
///
/// Generic over the turn shape so hosts can pass typed [`ChatTurn`]s or raw
/// JSON objects (`AgentInput<serde_json::Value>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInput<T = ChatTurn> {
    #[serde(default = "Vec::new")]
    pub messages: Vec<T>,
}

impl<T> AgentInput<T> {
    pub fn new(messages: Vec<T>) -> Self {
        Self { messages }
    }
}

/// A message authored by the AI side of the conversation.
///
/// Serialized as `{"type": "ai", "content": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "ai")]
pub struct AiMessage {
    pub content: String,
}

impl AiMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Output envelope of an agent step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub messages: Vec<AiMessage>,
}

impl AgentMessage {
    /// An envelope holding exactly one AI message.
    pub fn single(content: impl Into<String>) -> Self {
        Self {
            messages: vec![AiMessage::new(content)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ai_message_serializes_with_type_tag() {
        let message = AgentMessage::single("It is sunny.");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({"messages": [{"type": "ai", "content": "It is sunny."}]})
        );
    }

    #[test]
    fn test_agent_input_from_json_turns() {
        let input: AgentInput = serde_json::from_value(json!({
            "messages": [
                {"role": "user", "content": "What is the weather?"},
                {"role": "assistant"}
            ]
        }))
        .unwrap();
        assert_eq!(input.messages.len(), 2);
        assert_eq!(input.messages[0], ChatTurn::new("user", "What is the weather?"));
        assert!(input.messages[1].content.is_none());
    }

    #[test]
    fn test_agent_input_missing_messages_is_empty() {
        let input: AgentInput<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert!(input.messages.is_empty());
    }
}
