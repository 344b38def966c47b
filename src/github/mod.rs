// file: src/github/mod.rs
// description: GitHub API access module exports
// reference: internal module structure

pub mod client;
pub mod fetcher;

pub use client::{ApiRepository, GitHubClient, RepositorySource};
pub use fetcher::RepositoryFetcher;
