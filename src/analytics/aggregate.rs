//! Aggregation functions

use std::collections::{HashMap, HashSet};

use super::{DashboardSummary, RankEntry, Ranking};
use crate::dataset::Dataset;
use crate::record::QuoteRecord;

/// N used when a query names no number, and the fixed size of the tag chart
pub const DEFAULT_TOP_N: usize = 5;

/// Count labels in order of first appearance, then stable-sort by count.
fn rank<'a>(labels: impl Iterator<Item = &'a str>) -> Ranking {
    let mut entries: Vec<RankEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(label, entries.len());
                entries.push(RankEntry::new(label, 1));
            }
        }
    }

    // sort_by is stable, so ties keep first-appearance order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Ranking::new(entries)
}

/// Number of distinct tags across all rows
pub fn distinct_tag_count(quotes: &[QuoteRecord]) -> usize {
    quotes
        .iter()
        .flat_map(QuoteRecord::tag_list)
        .collect::<HashSet<_>>()
        .len()
}

/// Quote count per author, most prolific first
pub fn author_quote_counts(quotes: &[QuoteRecord]) -> Ranking {
    rank(quotes.iter().map(|q| q.author.as_str()))
}

/// The first `n` entries of `author_quote_counts`
pub fn top_n_authors(quotes: &[QuoteRecord], n: usize) -> Ranking {
    author_quote_counts(quotes).truncate(n)
}

/// Author with the most quotes and their count.
///
/// Ties go to the author that appears first in the table. `None` when there
/// are no quotes.
pub fn most_popular_author(quotes: &[QuoteRecord]) -> Option<(String, usize)> {
    author_quote_counts(quotes)
        .first()
        .map(|entry| (entry.label.clone(), entry.count))
}

/// The first `n` rows in stored order. "Top" means first, not best.
pub fn top_n_quotes(quotes: &[QuoteRecord], n: usize) -> &[QuoteRecord] {
    &quotes[..n.min(quotes.len())]
}

/// Most frequent `n` tags
pub fn top_tags(quotes: &[QuoteRecord], n: usize) -> Ranking {
    rank(quotes.iter().flat_map(QuoteRecord::tag_list)).truncate(n)
}

/// Home page counts
pub fn summary(dataset: &Dataset) -> DashboardSummary {
    DashboardSummary {
        total_quotes: dataset.quotes().len(),
        total_authors: dataset.author_names().len(),
        total_tags: distinct_tag_count(dataset.quotes()),
    }
}
