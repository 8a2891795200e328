use serde::{Deserialize, Serialize};

use super::Asin;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub asin: Asin,
    pub title: String,
    pub current_price: f64,
    pub url: String,
}

/// In-memory search history for one session. Append-only, deduplicated
/// by ASIN, cleared when the session ends.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the entry unless an entry with the same ASIN exists.
    /// Returns true when the entry was added.
    pub fn append_if_absent(&mut self, entry: HistoryEntry) -> bool {
        if self.entries.iter().any(|e| e.asin == entry.asin) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
