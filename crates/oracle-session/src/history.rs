//! Draw history: a chronological record of drawn cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use oracle_deck::{Category, Kind};

/// One drawn card as recorded in the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Category the card was drawn from.
    pub category: Category,
    /// Kind the weighted roll selected.
    pub kind: Kind,
    /// Labeled card text as shown to the players.
    pub text: String,
    /// Who invoked the draw.
    pub invoker: String,
    /// When the card was drawn.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of draws.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Fate Draw History\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "- **{}** {} (invoked by {})\n",
                entry.category, entry.text, entry.invoker
            ));
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Fate Draw History\n=================\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {} (invoked by {})\n",
                entry.category, entry.text, entry.invoker
            ));
        }
        out
    }
}
