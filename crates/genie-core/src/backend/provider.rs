//! GenieBackend trait definition.
//!
//! This is the port that every Genie client implements. The bridge treats it
//! as opaque: transport, polling, retries and authentication all live behind
//! it.

use std::future::Future;
use std::sync::Arc;

use genie_types::error::GenieError;
use genie_types::genie::GenieResult;

/// Trait for clients of a single Genie space.
///
/// Uses native async fn in traits (RPITIT). `Ok(None)` means the space gave
/// no answer; it is not an error.
pub trait GenieBackend: Send + Sync {
    /// Ask a question, passing the whole conversation as one transcript.
    fn ask_question(
        &self,
        conversation: &str,
    ) -> impl Future<Output = Result<Option<String>, GenieError>> + Send;

    /// Ask a question with a summary of the prior conversation, returning
    /// the answer together with any generated query metadata.
    fn ask_question_with_details(
        &self,
        question: &str,
        summarized_chat_history: &str,
    ) -> impl Future<Output = Result<Option<GenieResult>, GenieError>> + Send;
}

impl<T: GenieBackend> GenieBackend for Arc<T> {
    fn ask_question(
        &self,
        conversation: &str,
    ) -> impl Future<Output = Result<Option<String>, GenieError>> + Send {
        (**self).ask_question(conversation)
    }

    fn ask_question_with_details(
        &self,
        question: &str,
        summarized_chat_history: &str,
    ) -> impl Future<Output = Result<Option<GenieResult>, GenieError>> + Send {
        (**self).ask_question_with_details(question, summarized_chat_history)
    }
}
