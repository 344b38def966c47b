// file: src/models/repository.rs
// description: normalized repository record shared by the profile pipeline
// reference: internal data structures

use chrono::{DateTime, Utc};

/// One repository of the organization, normalized from the API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: String,
    pub url: String,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub archived: bool,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            url: url.into(),
            homepage: None,
            topics: Vec::new(),
            updated_at,
            archived: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Empty homepages are treated as absent.
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        let homepage = homepage.into();
        self.homepage = if homepage.trim().is_empty() {
            None
        } else {
            Some(homepage)
        };
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_builder() {
        let updated = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = RepositoryRecord::new("widget", "https://github.com/acme/widget", updated)
            .with_description("A widget")
            .with_homepage("https://widget.dev")
            .with_topics(["rust", "cli"]);

        assert_eq!(record.name, "widget");
        assert_eq!(record.description, "A widget");
        assert_eq!(record.homepage.as_deref(), Some("https://widget.dev"));
        assert_eq!(record.topics, vec!["rust", "cli"]);
        assert!(!record.archived);
    }

    #[test]
    fn test_blank_homepage_is_absent() {
        let updated = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = RepositoryRecord::new("widget", "https://github.com/acme/widget", updated)
            .with_homepage("  ");
        assert_eq!(record.homepage, None);
    }
}
