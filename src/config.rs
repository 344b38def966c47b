// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ProfileError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ORG: &str = "example-org";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub github: GitHubConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    pub org: String,
    #[serde(default)]
    pub token: Option<String>,
    pub api_url: String,
    pub per_page: usize,
    pub user_agent: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub output_path: PathBuf,
    pub layout: Layout,
    /// Name order among recently updated repositories.
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Repositories whose name starts with `prefix` first, everything else after.
    Split {
        prefix: String,
        prefixed_title: String,
        other_title: String,
    },
    /// Every repository in one table.
    Single { title: String },
    Custom { groups: Vec<GroupConfig> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupConfig {
    pub title: String,
    /// Catch-all when absent.
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub include_link: bool,
    #[serde(default)]
    pub include_tags: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        Self::load_with(
            path,
            std::env::var("GITHUB_TOKEN").ok(),
            std::env::var("GITHUB_ORG").ok(),
        )
    }

    /// Layers defaults, the optional file, `ORG_PROFILE__*` variables and the
    /// given token/org overrides, in that order.
    pub fn load_with(
        path: Option<&Path>,
        token: Option<String>,
        org: Option<String>,
    ) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ProfileError::Config(e.to_string()))?;

        let file_path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(file_path).required(path.is_some()))
            .add_source(
                config::Environment::with_prefix("ORG_PROFILE")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("github.token", token.filter(|t| !t.trim().is_empty()))
            .and_then(|b| b.set_override_option("github.org", org.filter(|o| !o.trim().is_empty())))
            .map_err(|e| ProfileError::Config(e.to_string()))?;

        let settings = builder
            .build()
            .map_err(|e| ProfileError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ProfileError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            github: GitHubConfig {
                org: DEFAULT_ORG.to_string(),
                token: None,
                api_url: "https://api.github.com".to_string(),
                per_page: 100,
                user_agent: concat!("org_profile/", env!("CARGO_PKG_VERSION")).to_string(),
                timeout_secs: None,
            },
            profile: ProfileConfig {
                output_path: PathBuf::from("profile/README.md"),
                layout: Layout::Split {
                    prefix: "awesome-".to_string(),
                    prefixed_title: "Projects".to_string(),
                    other_title: "Other Repositories".to_string(),
                },
                descending: false,
                banner: None,
                footer: None,
            },
        }
    }

    /// Applies command line overrides and re-validates.
    pub fn with_overrides(mut self, org: Option<String>, output: Option<PathBuf>) -> Result<Self> {
        if let Some(org) = org {
            self.github.org = org;
        }
        if let Some(output) = output {
            self.profile.output_path = output;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_org_name(&self.github.org)?;
        Validator::validate_url(&self.github.api_url)?;

        if self.github.per_page == 0 || self.github.per_page > 100 {
            return Err(ProfileError::Config(
                "per_page must be between 1 and 100".to_string(),
            ));
        }

        if self.profile.output_path.as_os_str().is_empty() {
            return Err(ProfileError::Config(
                "output_path must not be empty".to_string(),
            ));
        }

        match &self.profile.layout {
            Layout::Split { prefix, .. } => Validator::validate_prefix(prefix)?,
            Layout::Single { .. } => {}
            Layout::Custom { groups } => {
                if groups.is_empty() {
                    return Err(ProfileError::Config(
                        "custom layout needs at least one group".to_string(),
                    ));
                }
                for group in groups {
                    if let Some(prefix) = &group.prefix {
                        Validator::validate_prefix(prefix)?;
                    }
                }
            }
        }

        Ok(())
    }
}
