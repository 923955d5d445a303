//! Shared domain types for the Genie agent bridge.
//!
//! This crate contains the data shapes exchanged between a host agent
//! framework and a Genie Q&A backend: chat turns, Genie results, agent
//! envelopes, tool arguments, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, schemars, thiserror.

pub mod agent;
pub mod chat;
pub mod config;
pub mod error;
pub mod genie;
pub mod tool;
