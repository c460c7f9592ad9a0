//! Error handling
//!
//! Defines error types and handling for the filesystem simulator.

pub mod types;

pub use types::*;
