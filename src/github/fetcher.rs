// file: src/github/fetcher.rs
// description: sequential pagination over an organization's repositories
// reference: https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api

use crate::error::Result;
use crate::github::client::RepositorySource;
use crate::models::RepositoryRecord;
use crate::pipeline::progress::FetchProgress;
use tracing::{debug, info};

pub struct RepositoryFetcher<S> {
    source: S,
    per_page: usize,
}

impl<S: RepositorySource> RepositoryFetcher<S> {
    pub fn new(source: S, per_page: usize) -> Self {
        Self {
            source,
            per_page: per_page.max(1),
        }
    }

    /// Requests pages one after another until a short page comes back. Any
    /// failed page aborts the whole listing.
    pub async fn fetch_all(
        &self,
        org: &str,
        progress: &mut FetchProgress,
    ) -> Result<Vec<RepositoryRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_page(org, page, progress).await?;
            let count = batch.len();
            records.extend(batch);

            if count < self.per_page {
                break;
            }
            page += 1;
        }

        info!(
            "Fetched {} repositories for {} in {} page(s)",
            records.len(),
            org,
            page
        );
        Ok(records)
    }

    pub async fn fetch_first_page(
        &self,
        org: &str,
        progress: &mut FetchProgress,
    ) -> Result<Vec<RepositoryRecord>> {
        self.fetch_page(org, 1, progress).await
    }

    async fn fetch_page(
        &self,
        org: &str,
        page: u32,
        progress: &mut FetchProgress,
    ) -> Result<Vec<RepositoryRecord>> {
        let batch = self.source.fetch_page(org, page, self.per_page).await?;
        debug!("Page {} returned {} repositories", page, batch.len());

        progress.page_fetched(org, batch.len());
        Ok(batch.into_iter().map(RepositoryRecord::from).collect())
    }
}
