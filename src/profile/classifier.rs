// file: src/profile/classifier.rs
// description: partitions non-archived repositories into named groups
// reference: configurable name-based classification

use crate::config::Layout;
use crate::models::RepositoryRecord;
use crate::profile::render::Columns;
use tracing::debug;

pub const CATCH_ALL_TITLE: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatcher {
    Prefix(String),
    Any,
}

impl NameMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Prefix(prefix) => name.starts_with(prefix.as_str()),
            NameMatcher::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRule {
    pub title: String,
    pub matcher: NameMatcher,
    pub columns: Columns,
}

impl GroupRule {
    pub fn new(title: impl Into<String>, matcher: NameMatcher, columns: Columns) -> Self {
        Self {
            title: title.into(),
            matcher,
            columns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
    pub columns: Columns,
    pub records: Vec<RepositoryRecord>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct RepositoryClassifier {
    rules: Vec<GroupRule>,
}

impl RepositoryClassifier {
    /// Appends a [`CATCH_ALL_TITLE`] group when no rule matches every name,
    /// so each record always lands somewhere.
    pub fn new(mut rules: Vec<GroupRule>) -> Self {
        if !rules.iter().any(|rule| rule.matcher == NameMatcher::Any) {
            rules.push(GroupRule::new(
                CATCH_ALL_TITLE,
                NameMatcher::Any,
                Columns::minimal(),
            ));
        }
        Self { rules }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        let rules = match layout {
            Layout::Split {
                prefix,
                prefixed_title,
                other_title,
            } => vec![
                GroupRule::new(
                    prefixed_title.clone(),
                    NameMatcher::Prefix(prefix.clone()),
                    Columns::all(),
                ),
                GroupRule::new(other_title.clone(), NameMatcher::Any, Columns::minimal()),
            ],
            Layout::Single { title } => {
                vec![GroupRule::new(title.clone(), NameMatcher::Any, Columns::all())]
            }
            Layout::Custom { groups } => groups
                .iter()
                .map(|group| {
                    let matcher = match &group.prefix {
                        Some(prefix) => NameMatcher::Prefix(prefix.clone()),
                        None => NameMatcher::Any,
                    };
                    GroupRule::new(
                        group.title.clone(),
                        matcher,
                        Columns {
                            include_link: group.include_link,
                            include_tags: group.include_tags,
                        },
                    )
                })
                .collect(),
        };

        Self::new(rules)
    }

    pub fn rules(&self) -> &[GroupRule] {
        &self.rules
    }

    /// Drops archived records, then places each remaining record in the first
    /// matching group. Groups come back in rule order, records in input order.
    pub fn classify(&self, records: Vec<RepositoryRecord>) -> Vec<Group> {
        let mut groups: Vec<Group> = self
            .rules
            .iter()
            .map(|rule| Group {
                title: rule.title.clone(),
                columns: rule.columns,
                records: Vec::new(),
            })
            .collect();

        for record in records {
            if record.archived {
                debug!("Skipping archived repository: {}", record.name);
                continue;
            }

            if let Some(index) = self
                .rules
                .iter()
                .position(|rule| rule.matcher.matches(&record.name))
            {
                groups[index].records.push(record);
            }
        }

        groups
    }
}
