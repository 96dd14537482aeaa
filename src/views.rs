//! Page models - what each dashboard page shows
//!
//! Views only read the dataset. The terminal renderer in `ui` and the JSON
//! routes in `server` both build on these.

use serde::Serialize;

use crate::analytics::{self, DashboardSummary};
use crate::dataset::Dataset;
use crate::export::ExportFormat;
use crate::query::{QueryInterpreter, QueryResult};
use crate::record::{AuthorRecord, QuoteRecord};
use crate::{Error, Result};

/// The four pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    QuotesExplorer,
    AuthorExplorer,
    Analytics,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Quotes Intelligence Dashboard",
            Page::QuotesExplorer => "Quotes Explorer",
            Page::AuthorExplorer => "Author Explorer",
            Page::Analytics => "Smart Analytics",
        }
    }
}

/// A download offered on the home page
#[derive(Debug, Clone, Serialize)]
pub struct Download {
    pub format: ExportFormat,
    pub file_name: &'static str,
    pub content_type: &'static str,
}

impl From<ExportFormat> for Download {
    fn from(format: ExportFormat) -> Self {
        Self {
            format,
            file_name: format.file_name(),
            content_type: format.content_type(),
        }
    }
}

/// Home page: headline cards and downloads
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub summary: DashboardSummary,
    pub downloads: Vec<Download>,
}

pub fn home(dataset: &Dataset) -> HomeView {
    HomeView {
        summary: analytics::summary(dataset),
        downloads: ExportFormat::all().iter().copied().map(Download::from).collect(),
    }
}

/// A quote paired with its row in the quotes table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteHit<'a> {
    pub row: usize,
    #[serde(flatten)]
    pub quote: &'a QuoteRecord,
}

/// Quotes Explorer filter.
///
/// Case-insensitive substring match of the term as typed on quote text or
/// author. A blank term keeps every row. Hits keep their source row index.
pub fn search_quotes<'a>(quotes: &'a [QuoteRecord], term: &str) -> Vec<QuoteHit<'a>> {
    let rows = quotes.iter().enumerate().map(|(row, quote)| QuoteHit { row, quote });
    if term.trim().is_empty() {
        return rows.collect();
    }
    let needle = term.to_lowercase();
    rows.filter(|hit| hit.quote.matches(&needle)).collect()
}

/// Author Explorer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfile {
    pub name: String,
    pub born: String,
    pub description: String,
    pub quote_count: usize,
}

impl AuthorProfile {
    fn from_record(record: &AuthorRecord, quotes: &[QuoteRecord]) -> Self {
        Self {
            name: record.author.clone(),
            born: record.born_line(),
            description: record.description.clone(),
            quote_count: analytics::author_quote_counts(quotes)
                .get(&record.author)
                .unwrap_or(0),
        }
    }
}

/// Card for the selected author
pub fn author_profile(dataset: &Dataset, name: &str) -> Result<AuthorProfile> {
    dataset
        .find_author(name)
        .map(|record| AuthorProfile::from_record(record, dataset.quotes()))
        .ok_or_else(|| Error::AuthorNotFound(name.to_string()))
}

/// Analytics page. A blank request shows nothing.
pub fn analytics(dataset: &Dataset, query: &str) -> Option<QueryResult> {
    if query.trim().is_empty() {
        return None;
    }
    Some(QueryInterpreter::new(dataset).interpret(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                QuoteRecord::new("The world as we have created it", "Albert Einstein").with_tags("world"),
                QuoteRecord::new("It is our choices, Harry", "J.K. Rowling").with_tags("choices"),
                QuoteRecord::new("There are only two ways to live your life", "Albert Einstein"),
            ],
            vec![
                AuthorRecord::new("Albert Einstein")
                    .with_birth("March 14, 1879", "in Ulm, Germany")
                    .with_description("Physicist"),
                AuthorRecord::new("Anonymous"),
            ],
        )
    }

    #[test]
    fn test_search_empty_term_keeps_all() {
        let dataset = sample_dataset();
        assert_eq!(search_quotes(dataset.quotes(), "").len(), 3);
        assert_eq!(search_quotes(dataset.quotes(), "   ").len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_quote_and_author() {
        let dataset = sample_dataset();

        let by_author = search_quotes(dataset.quotes(), "EINSTEIN");
        assert_eq!(by_author.len(), 2);

        let by_text = search_quotes(dataset.quotes(), "harry");
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].quote.author, "J.K. Rowling");

        assert!(search_quotes(dataset.quotes(), "banana").is_empty());
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let quotes = vec![
            QuoteRecord::new("there is no spoon", "Neo"),
            QuoteRecord::new("stay the course", "Anonymous"),
        ];
        let hits = search_quotes(&quotes, "the ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].quote.quote, "stay the course");
    }

    #[test]
    fn test_search_keeps_source_rows() {
        let quotes = vec![
            QuoteRecord::new("alpha", "A"),
            QuoteRecord::new("beta", "B"),
            QuoteRecord::new("gamma", "C"),
        ];
        let hits = search_quotes(&quotes, "gamma");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].row, 2);

        let table = crate::ui::quotes_table(hits.iter().map(|hit| (hit.row, hit.quote)));
        assert!(table.contains("│ 2 │ gamma"));
        assert!(!table.contains("│ 0 │"));

        let json = serde_json::to_value(hits[0]).unwrap();
        assert_eq!(json["row"], 2);
        assert_eq!(json["quote"], "gamma");
        assert_eq!(json["author"], "C");
    }

    #[test]
    fn test_author_profile() {
        let dataset = sample_dataset();
        let profile = author_profile(&dataset, "Albert Einstein").unwrap();
        assert_eq!(profile.born, "March 14, 1879 in Ulm, Germany");
        assert_eq!(profile.quote_count, 2);

        let anonymous = author_profile(&dataset, "Anonymous").unwrap();
        assert_eq!(anonymous.born, "");
        assert_eq!(anonymous.description, "");
        assert_eq!(anonymous.quote_count, 0);
    }

    #[test]
    fn test_author_profile_unknown() {
        let dataset = sample_dataset();
        assert!(matches!(
            author_profile(&dataset, "Nobody"),
            Err(Error::AuthorNotFound(name)) if name == "Nobody"
        ));
    }

    #[test]
    fn test_home_view() {
        let home = home(&sample_dataset());
        assert_eq!(home.summary.total_quotes, 3);
        assert_eq!(home.summary.total_authors, 2);
        assert_eq!(home.summary.total_tags, 2);
        assert_eq!(home.downloads.len(), 2);
        assert_eq!(home.downloads[0].file_name, "quotes_data.csv");
    }

    #[test]
    fn test_blank_analytics_request_shows_nothing() {
        let dataset = sample_dataset();
        assert!(analytics(&dataset, "  ").is_none());
        assert_eq!(analytics(&dataset, "banana"), Some(QueryResult::Unrecognized));
    }
}
