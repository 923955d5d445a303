//! BoxGenieBackend -- object-safe dynamic dispatch wrapper for GenieBackend.
//!
//! 1. Define an object-safe `GenieBackendDyn` trait with boxed futures
//! 2. Blanket-impl `GenieBackendDyn` for all `T: GenieBackend`
//! 3. `BoxGenieBackend` wraps `Box<dyn GenieBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use genie_types::error::GenieError;
use genie_types::genie::GenieResult;

use super::provider::GenieBackend;

/// Object-safe version of [`GenieBackend`] with boxed futures.
pub trait GenieBackendDyn: Send + Sync {
    fn ask_question_boxed<'a>(
        &'a self,
        conversation: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, GenieError>> + Send + 'a>>;

    fn ask_question_with_details_boxed<'a>(
        &'a self,
        question: &'a str,
        summarized_chat_history: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<GenieResult>, GenieError>> + Send + 'a>>;
}

impl<T: GenieBackend> GenieBackendDyn for T {
    fn ask_question_boxed<'a>(
        &'a self,
        conversation: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, GenieError>> + Send + 'a>> {
        Box::pin(self.ask_question(conversation))
    }

    fn ask_question_with_details_boxed<'a>(
        &'a self,
        question: &'a str,
        summarized_chat_history: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<GenieResult>, GenieError>> + Send + 'a>> {
        Box::pin(self.ask_question_with_details(question, summarized_chat_history))
    }
}

/// Type-erased Genie backend.
///
/// Since `GenieBackend` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxGenieBackend` provides equivalent methods that delegate to
/// the inner `GenieBackendDyn` trait object.
pub struct BoxGenieBackend {
    inner: Box<dyn GenieBackendDyn + Send + Sync>,
}

impl BoxGenieBackend {
    /// Wrap a concrete `GenieBackend` in a type-erased box.
    pub fn new<T: GenieBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub async fn ask_question(&self, conversation: &str) -> Result<Option<String>, GenieError> {
        self.inner.ask_question_boxed(conversation).await
    }

    pub async fn ask_question_with_details(
        &self,
        question: &str,
        summarized_chat_history: &str,
    ) -> Result<Option<GenieResult>, GenieError> {
        self.inner
            .ask_question_with_details_boxed(question, summarized_chat_history)
            .await
    }
}

impl std::fmt::Debug for BoxGenieBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxGenieBackend").finish_non_exhaustive()
    }
}
