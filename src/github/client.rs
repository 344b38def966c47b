// file: src/github/client.rs
// description: GitHub REST API client for listing organization repositories
// reference: https://docs.github.com/en/rest/repos/repos#list-organization-repositories

use crate::config::GitHubConfig;
use crate::error::{ProfileError, Result};
use crate::models::RepositoryRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Subset of the API payload we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
}

impl From<ApiRepository> for RepositoryRecord {
    fn from(api: ApiRepository) -> Self {
        RepositoryRecord::new(api.name, api.html_url, api.updated_at)
            .with_description(api.description.unwrap_or_default())
            .with_homepage(api.homepage.unwrap_or_default())
            .with_topics(api.topics)
            .archived(api.archived)
    }
}

/// One page of an organization's repositories, 1-based.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_page(&self, org: &str, page: u32, per_page: usize)
    -> Result<Vec<ApiRepository>>;
}

pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn page_url(&self, org: &str) -> String {
        format!("{}/orgs/{}/repos", self.api_url, org)
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_page(
        &self,
        org: &str,
        page: u32,
        per_page: usize,
    ) -> Result<Vec<ApiRepository>> {
        let url = self.page_url(org);
        debug!("Requesting {} (page {}, per_page {})", url, page, per_page);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProfileError::OrganizationNotFound {
                org: org.to_string(),
            });
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProfileError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

pub fn parse_page(body: &str) -> Result<Vec<ApiRepository>> {
    serde_json::from_str(body).map_err(|e| {
        ProfileError::Serialization(format!("Failed to parse repository listing: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers one request with `status` and `body`, returning the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn client_for(api_url: String, token: Option<&str>) -> GitHubClient {
        let mut config = Config::default_config().github;
        config.api_url = api_url;
        config.token = token.map(str::to_string);
        GitHubClient::new(&config).unwrap()
    }

    const PAGE: &str = r#"[
        {
            "name": "widget",
            "description": "Makes widgets",
            "html_url": "https://github.com/acme/widget",
            "homepage": "https://widget.dev",
            "topics": ["rust", "cli"],
            "updated_at": "2025-03-14T08:30:00Z",
            "archived": false,
            "stargazers_count": 12
        },
        {
            "name": "legacy",
            "description": null,
            "html_url": "https://github.com/acme/legacy",
            "homepage": "",
            "updated_at": "2019-01-01T00:00:00Z",
            "archived": true
        }
    ]"#;

    #[test]
    fn test_parse_page_and_normalize() {
        let records: Vec<RepositoryRecord> = parse_page(PAGE)
            .unwrap()
            .into_iter()
            .map(RepositoryRecord::from)
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "widget");
        assert_eq!(records[0].homepage.as_deref(), Some("https://widget.dev"));
        assert_eq!(records[0].topics, vec!["rust", "cli"]);
        assert_eq!(records[0].updated_at.to_rfc3339(), "2025-03-14T08:30:00+00:00");

        assert_eq!(records[1].description, "");
        assert_eq!(records[1].homepage, None);
        assert!(records[1].topics.is_empty());
        assert!(records[1].archived);
    }

    #[test]
    fn test_parse_page_rejects_garbage() {
        assert!(matches!(
            parse_page(r#"{"message": "Bad credentials"}"#),
            Err(ProfileError::Serialization(_))
        ));
    }

    #[test]
    fn test_page_url_trims_trailing_slash() {
        let mut config = Config::default_config().github;
        config.api_url = "https://github.example.com/api/v3/".to_string();
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(
            client.page_url("acme"),
            "https://github.example.com/api/v3/orgs/acme/repos"
        );
    }

    #[test]
    fn test_not_found_status_maps_to_missing_org() {
        let (url, server) = serve_once("404 Not Found", r#"{"message": "Not Found"}"#);
        let client = client_for(url, Some("test-token"));

        let result = tokio_test::block_on(client.fetch_page("acme", 1, 100));
        let request = server.join().unwrap();

        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, ProfileError::OrganizationNotFound { ref org } if org == "acme"));

        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /orgs/acme/repos?per_page=100&page=1&sort=updated&direction=desc HTTP/1.1"
        );
        assert!(request
            .to_lowercase()
            .contains("authorization: bearer test-token"));
    }

    #[test]
    fn test_server_error_maps_to_api_error() {
        let (url, server) = serve_once("500 Internal Server Error", "upstream exploded");
        let client = client_for(url, None);

        let result = tokio_test::block_on(client.fetch_page("acme", 2, 50));
        let request = server.join().unwrap();

        match result {
            Err(ProfileError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        assert!(request.starts_with("GET /orgs/acme/repos?per_page=50&page=2&"));
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[test]
    fn test_success_body_is_parsed() {
        let (url, server) = serve_once("200 OK", PAGE);
        let client = client_for(url, None);

        let repositories = tokio_test::block_on(client.fetch_page("acme", 1, 100)).unwrap();
        server.join().unwrap();

        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].name, "widget");
        assert!(repositories[1].archived);
    }
}
