// file: src/profile/mod.rs
// description: classification, ordering and markdown rendering of the profile
// reference: internal module structure

pub mod classifier;
pub mod document;
pub mod render;
pub mod sorter;

pub use classifier::{Group, GroupRule, NameMatcher, RepositoryClassifier};
pub use document::DocumentAssembler;
pub use render::{Columns, TableRenderer, relative_time};
pub use sorter::{RecencySorter, SortDirection, elapsed_days, is_recent};

use crate::config::ProfileConfig;
use crate::models::RepositoryRecord;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ProfileDocument {
    pub content: String,
    pub sections: Vec<SectionSummary>,
}

impl ProfileDocument {
    pub fn repository_count(&self) -> usize {
        self.sections.iter().map(|s| s.count).sum()
    }
}

/// Classifies, sorts and renders `records` into the final markdown. Groups
/// with no repositories are left out. Pure for a given `now`.
pub fn build_document(
    records: Vec<RepositoryRecord>,
    org: &str,
    config: &ProfileConfig,
    now: DateTime<Utc>,
) -> ProfileDocument {
    let classifier = RepositoryClassifier::from_layout(&config.layout);
    let sorter = RecencySorter::new(now, SortDirection::from_descending(config.descending));
    let renderer = TableRenderer::new(now);

    let mut sections = Vec::new();
    let mut rendered = Vec::new();

    for group in classifier.classify(records) {
        if group.is_empty() {
            debug!("Skipping empty group '{}'", group.title);
            continue;
        }

        let ordered = sorter.sort(&group.records);
        debug!("Rendering group '{}' with {} repositories", group.title, ordered.len());

        rendered.push(renderer.render_section(&group.title, &ordered, group.columns));
        sections.push(SectionSummary {
            title: group.title,
            count: ordered.len(),
        });
    }

    let assembler =
        DocumentAssembler::new(org, config.banner.as_deref(), config.footer.as_deref());

    ProfileDocument {
        content: assembler.assemble(&rendered),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Layout};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn repo(name: &str, age: Duration) -> RepositoryRecord {
        RepositoryRecord::new(name, format!("https://github.com/acme/{}", name), now() - age)
    }

    fn profile_config() -> ProfileConfig {
        let mut config = Config::default_config().profile;
        config.layout = Layout::Split {
            prefix: "awesome-".to_string(),
            prefixed_title: "Lists".to_string(),
            other_title: "Tools".to_string(),
        };
        config.banner = Some("# {org}".to_string());
        config.footer = Some("_generated_".to_string());
        config
    }

    fn fixture() -> Vec<RepositoryRecord> {
        vec![
            repo("awesome-zeta", Duration::days(1))
                .with_description("Z list")
                .with_topics(["list"])
                .with_homepage("https://zeta.dev"),
            repo("cli", Duration::days(10)).with_description("Command line"),
            repo("awesome-alpha", Duration::days(2)).with_description("A list"),
            repo("awesome-old", Duration::days(400)).archived(true),
            repo("server", Duration::days(40)),
        ]
    }

    #[test]
    fn test_full_document() {
        let doc = build_document(fixture(), "acme", &profile_config(), now());

        let expected = "\
# acme

### Lists (2)

| Name | Description | Tags | Link | Updated |
| --- | --- | --- | --- | --- |
| [awesome-alpha](https://github.com/acme/awesome-alpha) | A list |  |  | recently |
| [awesome-zeta](https://github.com/acme/awesome-zeta) | Z list | list | [Link](https://zeta.dev) | recently |

### Tools (2)

| Name | Description | Updated |
| --- | --- | --- |
| [cli](https://github.com/acme/cli) | Command line | 1 week ago |
| [server](https://github.com/acme/server) |  | 1 month ago |

_generated_
";
        assert_eq!(doc.content, expected);
        assert_eq!(
            doc.sections,
            vec![
                SectionSummary {
                    title: "Lists".to_string(),
                    count: 2
                },
                SectionSummary {
                    title: "Tools".to_string(),
                    count: 2
                },
            ]
        );
        assert_eq!(doc.repository_count(), 4);
    }

    #[test]
    fn test_archived_never_rendered() {
        let doc = build_document(fixture(), "acme", &profile_config(), now());
        assert!(!doc.content.contains("awesome-old"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = build_document(fixture(), "acme", &profile_config(), now());
        let second = build_document(fixture(), "acme", &profile_config(), now());
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let records = vec![
            repo("cli", Duration::days(10)),
            repo("awesome-gone", Duration::days(5)).archived(true),
        ];
        let doc = build_document(records, "acme", &profile_config(), now());

        assert!(!doc.content.contains("### Lists"));
        assert_eq!(
            doc.sections,
            vec![SectionSummary {
                title: "Tools".to_string(),
                count: 1
            }]
        );
        assert!(doc.content.starts_with("# acme\n\n### Tools (1)\n"));
    }

    #[test]
    fn test_no_repositories_renders_banner_and_footer_only() {
        let doc = build_document(vec![], "acme", &profile_config(), now());
        assert_eq!(doc.content, "# acme\n\n_generated_\n");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_descending_flag_reverses_recent_names() {
        let mut config = profile_config();
        config.descending = true;
        let doc = build_document(fixture(), "acme", &config, now());

        let zeta = doc.content.find("[awesome-zeta]").unwrap();
        let alpha = doc.content.find("[awesome-alpha]").unwrap();
        assert!(zeta < alpha);
    }
}
