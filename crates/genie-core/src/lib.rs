//! Genie backend port and agent-framework adapters.
//!
//! This crate defines the `GenieBackend` port that concrete Genie clients
//! implement, and the two adapters a host agent framework registers: the
//! `GenieAgent` step and the `GenieTool`. It depends only on `genie-types`
//! and never on a concrete client or network crate.

pub mod agent;
pub mod backend;
pub mod config;
pub mod tool;
pub mod transcript;

#[cfg(test)]
pub(crate) mod testing;
