//! Testing infrastructure for humidor integration tests.
//!
//! - `TestWorld`: isolated data directory plus a way to run the CLI in it
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: sample collection documents

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
