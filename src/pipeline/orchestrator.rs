// file: src/pipeline/orchestrator.rs
// description: fetch, build and write the organization profile in one pass
// reference: pipeline orchestration

use crate::config::Config;
use crate::error::{ProfileError, Result};
use crate::github::{GitHubClient, RepositoryFetcher, RepositorySource};
use crate::pipeline::progress::{FetchProgress, RunStats};
use crate::profile::{ProfileDocument, build_document};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct ProfilePipeline<S> {
    config: Config,
    fetcher: RepositoryFetcher<S>,
}

impl ProfilePipeline<GitHubClient> {
    pub fn from_config(config: Config) -> Result<Self> {
        let client = GitHubClient::new(&config.github)?;
        Ok(Self::new(config, client))
    }
}

impl<S: RepositorySource> ProfilePipeline<S> {
    pub fn new(config: Config, source: S) -> Self {
        let fetcher = RepositoryFetcher::new(source, config.github.per_page);
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches every repository and builds the document without touching disk.
    pub async fn generate(
        &self,
        progress: &mut FetchProgress,
        now: DateTime<Utc>,
    ) -> Result<(ProfileDocument, RunStats)> {
        let org = &self.config.github.org;
        info!("Listing repositories for organization {}", org);

        let records = self.fetcher.fetch_all(org, progress).await?;
        progress.finish();

        let fetched = records.len();
        let document = build_document(records, org, &self.config.profile, now);

        for section in &document.sections {
            debug!("Section '{}': {} repositories", section.title, section.count);
        }

        let stats = RunStats {
            pages_fetched: progress.pages(),
            repositories_fetched: fetched,
            repositories_rendered: document.repository_count(),
            duration: progress.elapsed(),
        };

        Ok((document, stats))
    }

    /// Generates the document and overwrites the configured output file. The
    /// file is only written once the whole document has been built.
    pub async fn run(&self, progress: &mut FetchProgress, now: DateTime<Utc>) -> Result<RunStats> {
        let (document, stats) = self.generate(progress, now).await?;
        write_output(&self.config.profile.output_path, &document.content)?;

        info!(
            "Wrote {} ({} repositories, {} skipped)",
            self.config.profile.output_path.display(),
            stats.repositories_rendered,
            stats.repositories_skipped()
        );
        Ok(stats)
    }

    /// Confirms the organization is reachable by requesting a single page.
    pub async fn check(&self) -> Result<usize> {
        let org = &self.config.github.org;
        let mut progress = FetchProgress::hidden();
        let page = self.fetcher.fetch_first_page(org, &mut progress).await?;
        info!("Organization {} is accessible ({} repositories on first page)", org, page.len());
        Ok(page.len())
    }
}

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ProfileError::FileOperation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| ProfileError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
