//! Journal export.

use std::fmt;

use qs_core::JournalEntry;

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::CampaignResult;

/// Output format for [`Campaign::export_journal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown with one heading per entry.
    Markdown,
    /// Plain text.
    Text,
}

impl ExportFormat {
    /// Parse "markdown"/"md" or "text"/"txt".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "text" | "txt" | "plain" => Some(Self::Text),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Text => write!(f, "text"),
        }
    }
}

const TIMESTAMP: &str = "%Y-%m-%d %H:%M";

/// Render entries as markdown, oldest first.
pub fn export_markdown(name: &str, entries: &[&JournalEntry]) -> String {
    let mut out = format!("# Journal of {name}\n\n");
    for entry in entries {
        out.push_str(&format!(
            "## {}\n\n",
            entry.created_at.format(TIMESTAMP)
        ));
        out.push_str(&entry.content);
        out.push_str("\n\n");
        if entry.image.is_some() {
            out.push_str("*Image attached*\n\n");
        }
    }
    out
}

/// Render entries as plain text, oldest first.
pub fn export_text(name: &str, entries: &[&JournalEntry]) -> String {
    let title = format!("Journal of {name}");
    let mut out = format!("{title}\n{}\n\n", "=".repeat(title.chars().count()));
    for entry in entries {
        out.push_str(&format!("[{}]\n", entry.created_at.format(TIMESTAMP)));
        out.push_str(&entry.content);
        out.push('\n');
        if entry.image.is_some() {
            out.push_str("(image attached)\n");
        }
        out.push('\n');
    }
    out
}

impl<B: Backend> Campaign<B> {
    /// Export the whole journal in chronological order.
    pub fn export_journal(&self, format: ExportFormat) -> CampaignResult<String> {
        let name = &self.character()?.name;
        let mut entries = self.journal();
        entries.reverse();
        Ok(match format {
            ExportFormat::Markdown => export_markdown(name, &entries),
            ExportFormat::Text => export_text(name, &entries),
        })
    }
}
