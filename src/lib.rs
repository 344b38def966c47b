// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod pipeline;
pub mod profile;
pub mod utils;

pub use config::{Config, GitHubConfig, GroupConfig, Layout, ProfileConfig};
pub use error::{ProfileError, Result};
pub use github::{ApiRepository, GitHubClient, RepositoryFetcher, RepositorySource};
pub use models::RepositoryRecord;
pub use pipeline::{FetchProgress, ProfilePipeline, RunStats};
pub use profile::{
    Columns, DocumentAssembler, Group, GroupRule, NameMatcher, ProfileDocument, RecencySorter,
    RepositoryClassifier, SortDirection, TableRenderer, build_document,
};
pub use utils::Validator;
