//! Connecting to a Genie space.

use genie_types::error::GenieError;

use super::box_backend::BoxGenieBackend;

/// Builds a backend bound to one Genie space.
///
/// The adapters connect once per invocation, so a connector must be cheap to
/// call. Any `Fn(&str) -> Result<BoxGenieBackend, GenieError>` closure is a
/// connector.
pub trait GenieConnector: Send + Sync {
    fn connect(&self, space_id: &str) -> Result<BoxGenieBackend, GenieError>;
}

impl<F> GenieConnector for F
where
    F: Fn(&str) -> Result<BoxGenieBackend, GenieError> + Send + Sync,
{
    fn connect(&self, space_id: &str) -> Result<BoxGenieBackend, GenieError> {
        self(space_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenie;
    use std::sync::Mutex;

    #[test]
    fn test_closure_connector_receives_space_id() {
        let seen = Mutex::new(Vec::new());
        let connector = |space_id: &str| -> Result<BoxGenieBackend, GenieError> {
            seen.lock().unwrap().push(space_id.to_string());
            Ok(BoxGenieBackend::new(MockGenie::answering("ok")))
        };

        assert!(connector.connect("space-id").is_ok());
        assert_eq!(*seen.lock().unwrap(), vec!["space-id".to_string()]);
    }

    #[test]
    fn test_closure_connector_propagates_error() {
        let connector = |_: &str| -> Result<BoxGenieBackend, GenieError> {
            Err(GenieError::Unavailable("no workspace host".to_string()))
        };

        let err = connector.connect("space-id").unwrap_err();
        assert!(matches!(err, GenieError::Unavailable(_)));
    }
}
