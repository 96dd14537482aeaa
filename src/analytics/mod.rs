//! Aggregations over the quotes table
//!
//! Everything here is a pure function of the table contents:
//! - distinct tag count and tag histogram
//! - per-author quote counts and top-N rankings
//! - the most popular author
//! - the "top" (first) N quotes
//!
//! Rankings are ordered by count descending. Equal counts keep the order in
//! which the label first appeared in the table.

pub mod aggregate;

pub use aggregate::{
    author_quote_counts, distinct_tag_count, most_popular_author, summary, top_n_authors,
    top_n_quotes, top_tags, DEFAULT_TOP_N,
};

use serde::{Deserialize, Serialize};

/// One labelled bar of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub label: String,
    pub count: usize,
}

impl RankEntry {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Ordered label -> count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    pub fn new(entries: Vec<RankEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankEntry> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&RankEntry> {
        self.entries.first()
    }

    /// Largest count in the ranking, 0 when empty
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// Keep only the first `n` entries
    pub fn truncate(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    /// Count for a label, if ranked
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.count)
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankEntry;
    type IntoIter = std::slice::Iter<'a, RankEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Headline numbers for the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_quotes: usize,
    pub total_authors: usize,
    pub total_tags: usize,
}

impl std::fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dashboard Summary:")?;
        writeln!(f, "  Quotes: {}", self.total_quotes)?;
        writeln!(f, "  Authors: {}", self.total_authors)?;
        writeln!(f, "  Tags: {}", self.total_tags)
    }
}
