//! Mock Genie backend shared by the adapter tests.

use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use genie_types::error::GenieError;
use genie_types::genie::GenieResult;

use crate::backend::{BoxGenieBackend, GenieBackend, GenieConnector};

/// Backend returning canned answers and recording every call.
#[derive(Default)]
pub struct MockGenie {
    answer: Mutex<Option<String>>,
    details: Mutex<Option<GenieResult>>,
    failure: Option<String>,
    ask_calls: AtomicUsize,
    details_calls: AtomicUsize,
    last_conversation: Mutex<Option<String>>,
    last_details_args: Mutex<Option<(String, String)>>,
}

impl MockGenie {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Mutex::new(Some(answer.to_string())),
            ..Default::default()
        }
    }

    pub fn with_details(details: Option<GenieResult>) -> Self {
        Self {
            details: Mutex::new(details),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn set_answer(&self, answer: Option<&str>) {
        *self.answer.lock().unwrap() = answer.map(str::to_string);
    }

    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    pub fn last_conversation(&self) -> Option<String> {
        self.last_conversation.lock().unwrap().clone()
    }

    pub fn last_details_args(&self) -> Option<(String, String)> {
        self.last_details_args.lock().unwrap().clone()
    }

    fn outcome<T>(&self, value: T) -> Result<T, GenieError> {
        match &self.failure {
            Some(message) => Err(GenieError::Backend {
                message: message.clone(),
            }),
            None => Ok(value),
        }
    }
}

impl GenieBackend for MockGenie {
    fn ask_question(
        &self,
        conversation: &str,
    ) -> impl Future<Output = Result<Option<String>, GenieError>> + Send {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_conversation.lock().unwrap() = Some(conversation.to_string());
        let result = self.outcome(self.answer.lock().unwrap().clone());
        async move { result }
    }

    fn ask_question_with_details(
        &self,
        question: &str,
        summarized_chat_history: &str,
    ) -> impl Future<Output = Result<Option<GenieResult>, GenieError>> + Send {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_details_args.lock().unwrap() =
            Some((question.to_string(), summarized_chat_history.to_string()));
        let result = self.outcome(self.details.lock().unwrap().clone());
        async move { result }
    }
}

/// Connector handing out the shared mock and recording requested space ids.
pub fn connector_for(
    mock: &Arc<MockGenie>,
    spaces: &Arc<Mutex<Vec<String>>>,
) -> impl GenieConnector + 'static {
    let mock = Arc::clone(mock);
    let spaces = Arc::clone(spaces);
    move |space_id: &str| -> Result<BoxGenieBackend, GenieError> {
        spaces.lock().unwrap().push(space_id.to_string());
        Ok(BoxGenieBackend::new(Arc::clone(&mock)))
    }
}
