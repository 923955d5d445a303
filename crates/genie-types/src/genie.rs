//! Result types returned by a Genie space.

use serde::{Deserialize, Serialize};

/// Detailed answer from a Genie space.
///
/// `description` and `sql_query` are present when Genie answered by
/// generating and running a query; `response` is the rendered answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenieResult {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sql_query: Option<String>,
    pub response: String,
}

impl GenieResult {
    /// A result carrying only a response, with no query metadata.
    pub fn from_response(response: impl Into<String>) -> Self {
        Self {
            description: None,
            sql_query: None,
            response: response.into(),
        }
    }
}
