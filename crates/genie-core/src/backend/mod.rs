//! Genie backend abstractions.
//!
//! - `GenieBackend`: RPITIT trait for concrete Genie clients
//! - `BoxGenieBackend`: object-safe wrapper for dynamic dispatch
//! - `GenieConnector`: builds a backend bound to one Genie space

pub mod box_backend;
pub mod connector;
pub mod provider;

pub use box_backend::BoxGenieBackend;
pub use connector::GenieConnector;
pub use provider::GenieBackend;
