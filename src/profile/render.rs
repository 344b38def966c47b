// file: src/profile/render.rs
// description: markdown table rendering for repository groups
// reference: https://github.github.com/gfm/#tables-extension-

use crate::models::RepositoryRecord;
use crate::profile::sorter::{elapsed_days, is_recent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional table columns. Name, description and "Updated" are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Columns {
    pub include_link: bool,
    pub include_tags: bool,
}

impl Columns {
    pub fn all() -> Self {
        Self {
            include_link: true,
            include_tags: true,
        }
    }

    pub fn minimal() -> Self {
        Self::default()
    }

    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Name", "Description"];
        if self.include_tags {
            headers.push("Tags");
        }
        if self.include_link {
            headers.push("Link");
        }
        headers.push("Updated");
        headers
    }
}

/// Relative age for a whole number of elapsed days, using 7/30/365-day
/// weeks, months and years.
pub fn relative_time(days: i64) -> String {
    let days = days.max(0);
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if weeks == 1 {
        "1 week ago".to_string()
    } else if weeks < 4 {
        format!("{} weeks ago", weeks)
    } else if months == 1 {
        "1 month ago".to_string()
    } else if months < 12 {
        format!("{} months ago", months)
    } else if years == 1 {
        "1 year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    now: DateTime<Utc>,
}

impl TableRenderer {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn updated_label(&self, updated_at: DateTime<Utc>) -> String {
        if is_recent(updated_at, self.now) {
            "recently".to_string()
        } else {
            relative_time(elapsed_days(updated_at, self.now))
        }
    }

    /// Header line followed by the separator line.
    pub fn render_header(&self, columns: Columns) -> String {
        let headers = columns.headers();
        let separator = vec!["---"; headers.len()];
        format!("{}\n{}", table_row(&headers), table_row(&separator))
    }

    pub fn render_row(&self, record: &RepositoryRecord, columns: Columns) -> String {
        let mut cells = vec![
            format!("[{}]({})", record.name, record.url),
            record.description.clone(),
        ];

        if columns.include_tags {
            cells.push(record.topics.join(", "));
        }

        if columns.include_link {
            cells.push(
                record
                    .homepage
                    .as_ref()
                    .map(|homepage| format!("[Link]({})", homepage))
                    .unwrap_or_default(),
            );
        }

        cells.push(self.updated_label(record.updated_at));
        table_row(&cells)
    }

    pub fn render_rows(&self, records: &[RepositoryRecord], columns: Columns) -> Vec<String> {
        records
            .iter()
            .map(|record| self.render_row(record, columns))
            .collect()
    }

    /// Title line, blank line, then the table. The count in the title is the
    /// number of rendered rows.
    pub fn render_section(
        &self,
        title: &str,
        records: &[RepositoryRecord],
        columns: Columns,
    ) -> String {
        let rows = self.render_rows(records, columns);
        let mut section = format!(
            "### {} ({})\n\n{}",
            title,
            rows.len(),
            self.render_header(columns)
        );
        for row in &rows {
            section.push('\n');
            section.push_str(row);
        }
        section
    }
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells
        .iter()
        .map(|cell| cell.as_ref())
        .collect::<Vec<&str>>()
        .join(" | ");
    format!("| {} |", joined)
}
