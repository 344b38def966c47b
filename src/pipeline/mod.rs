// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod orchestrator;
pub mod progress;

pub use orchestrator::{ProfilePipeline, write_output};
pub use progress::{FetchProgress, RunStats};
