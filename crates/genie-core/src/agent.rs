//! Genie as an agent step.
//!
//! The step flattens the incoming conversation into a transcript, asks the
//! Genie space about it, and answers with a single AI message. A space that
//! gives no answer yields an empty message, never a missing one.

use std::future::Future;
use std::sync::Arc;

use genie_types::agent::{AgentInput, AgentMessage};
use genie_types::chat::{ChatTurn, ChatTurnLike};
use genie_types::config::GenieConfig;
use genie_types::error::GenieError;

use crate::backend::GenieConnector;
use crate::transcript::concat_messages;

/// A step in a multi-step agent pipeline.
///
/// The host framework only supplies the message payload; everything else the
/// step needs is bound at construction.
pub trait AgentStep<T = ChatTurn>: Send + Sync {
    fn name(&self) -> &str;

    fn invoke(
        &self,
        input: &AgentInput<T>,
    ) -> impl Future<Output = Result<AgentMessage, GenieError>> + Send;
}

/// Ask the Genie space `space_id` about the conversation in `input`.
///
/// Backend errors are returned unchanged. A `None` or empty answer becomes
/// an AI message with empty content.
#[tracing::instrument(
    name = "query_genie_as_agent",
    skip_all,
    fields(
        gen_ai.operation.name = "invoke_agent",
        gen_ai.agent.id = %space_id,
        gen_ai.agent.name = %name,
        message_count = input.messages.len(),
    )
)]
pub async fn query_genie_as_agent<T: ChatTurnLike + Sync>(
    input: &AgentInput<T>,
    connector: &dyn GenieConnector,
    space_id: &str,
    name: &str,
) -> Result<AgentMessage, GenieError> {
    let genie = connector.connect(space_id)?;
    let transcript = concat_messages(&input.messages);

    let response = genie.ask_question(&transcript).await?;
    tracing::debug!(
        transcript_len = transcript.len(),
        answered = response.as_deref().is_some_and(|r| !r.is_empty()),
        "genie agent step finished"
    );

    Ok(AgentMessage::single(response.unwrap_or_default()))
}

/// [`query_genie_as_agent`] with the space id and agent name bound ahead of
/// time.
#[derive(Clone)]
pub struct GenieAgent {
    space_id: String,
    name: String,
    connector: Arc<dyn GenieConnector>,
}

impl GenieAgent {
    pub fn new(
        space_id: impl Into<String>,
        name: impl Into<String>,
        connector: impl GenieConnector + 'static,
    ) -> Self {
        Self {
            space_id: space_id.into(),
            name: name.into(),
            connector: Arc::new(connector),
        }
    }

    pub fn from_config(config: &GenieConfig, connector: impl GenieConnector + 'static) -> Self {
        Self::new(&config.space_id, &config.agent_name, connector)
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }
}

impl<T: ChatTurnLike + Sync> AgentStep<T> for GenieAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(
        &self,
        input: &AgentInput<T>,
    ) -> impl Future<Output = Result<AgentMessage, GenieError>> + Send {
        query_genie_as_agent(input, self.connector.as_ref(), &self.space_id, &self.name)
    }
}

impl std::fmt::Debug for GenieAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenieAgent")
            .field("space_id", &self.space_id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
