//! Analytics query interpreter
//!
//! A free-text request is lowercased and run through an ordered list of
//! keyword rules. The first rule whose predicate matches decides the intent
//! and produces the result; nothing is combined or retried.
//!
//! | order | predicate                         | intent        | count            |
//! |-------|-----------------------------------|---------------|------------------|
//! | 1     | "top" and "author"                | AuthorRanking | digits, else 5   |
//! | 2     | "most popular author"             | PopularAuthor | -                |
//! | 3     | "quote"                           | QuoteList     | digits, else 5   |
//! | 4     | "tag"                             | TagRanking    | always 5         |
//! | -     | anything else                     | Unrecognized  | -                |

use serde::{Deserialize, Serialize};

use crate::analytics::{self, Ranking, DEFAULT_TOP_N};
use crate::dataset::Dataset;
use crate::record::QuoteRecord;

/// Hint shown for requests no rule understands
pub const QUERY_HINT: &str = "Try: top 5 authors | most popular author | top tags";

/// Example requests, in rule order
pub const QUERY_EXAMPLES: &[&str] = &[
    "top 5 authors",
    "most popular author",
    "top 10 quotes",
    "top tags",
];

/// What a request is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AuthorRanking,
    PopularAuthor,
    QuoteList,
    TagRanking,
    Unrecognized,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AuthorRanking => "author_ranking",
            Intent::PopularAuthor => "popular_author",
            Intent::QuoteList => "quote_list",
            Intent::TagRanking => "tag_ranking",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer to an analytics request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "data", rename_all = "snake_case")]
pub enum QueryResult {
    /// Authors ranked by quote count
    AuthorRanking(Ranking),
    /// The single most prolific author
    PopularAuthor { author: String, count: usize },
    /// Leading rows of the quotes table
    QuoteList(Vec<QuoteRecord>),
    /// Tags ranked by frequency
    TagRanking(Ranking),
    /// The intent was understood but the quotes table has nothing to answer with
    NoData(Intent),
    /// No rule matched
    Unrecognized,
}

impl QueryResult {
    pub fn intent(&self) -> Intent {
        match self {
            QueryResult::AuthorRanking(_) => Intent::AuthorRanking,
            QueryResult::PopularAuthor { .. } => Intent::PopularAuthor,
            QueryResult::QuoteList(_) => Intent::QuoteList,
            QueryResult::TagRanking(_) => Intent::TagRanking,
            QueryResult::NoData(intent) => *intent,
            QueryResult::Unrecognized => Intent::Unrecognized,
        }
    }
}

/// One entry of the cascade. `query` is already lowercased.
struct Rule {
    intent: Intent,
    matches: fn(&str) -> bool,
    run: fn(&Dataset, &str) -> QueryResult,
}

const RULES: &[Rule] = &[
    Rule {
        intent: Intent::AuthorRanking,
        matches: asks_top_authors,
        run: run_top_authors,
    },
    Rule {
        intent: Intent::PopularAuthor,
        matches: asks_popular_author,
        run: run_popular_author,
    },
    Rule {
        intent: Intent::QuoteList,
        matches: asks_quotes,
        run: run_top_quotes,
    },
    Rule {
        intent: Intent::TagRanking,
        matches: asks_tags,
        run: run_top_tags,
    },
];

fn asks_top_authors(query: &str) -> bool {
    query.contains("top") && query.contains("author")
}

fn asks_popular_author(query: &str) -> bool {
    query.contains("most popular author")
}

fn asks_quotes(query: &str) -> bool {
    query.contains("quote")
}

fn asks_tags(query: &str) -> bool {
    query.contains("tag")
}

fn run_top_authors(dataset: &Dataset, query: &str) -> QueryResult {
    let n = extract_count(query, DEFAULT_TOP_N);
    QueryResult::AuthorRanking(analytics::top_n_authors(dataset.quotes(), n))
}

fn run_popular_author(dataset: &Dataset, _query: &str) -> QueryResult {
    match analytics::most_popular_author(dataset.quotes()) {
        Some((author, count)) => QueryResult::PopularAuthor { author, count },
        None => QueryResult::NoData(Intent::PopularAuthor),
    }
}

fn run_top_quotes(dataset: &Dataset, query: &str) -> QueryResult {
    let n = extract_count(query, DEFAULT_TOP_N);
    QueryResult::QuoteList(analytics::top_n_quotes(dataset.quotes(), n).to_vec())
}

// Digits in the request are deliberately not consulted here.
fn run_top_tags(dataset: &Dataset, _query: &str) -> QueryResult {
    QueryResult::TagRanking(analytics::top_tags(dataset.quotes(), DEFAULT_TOP_N))
}

/// Count parameter of a request.
///
/// Every ASCII digit in the text is concatenated left to right, so
/// "top 1 of 5 authors" asks for 15. No digits gives `default`; a number too
/// large for `usize` saturates.
pub fn extract_count(query: &str, default: usize) -> usize {
    let digits: String = query.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return default;
    }
    digits.parse().unwrap_or(usize::MAX)
}

fn find_rule(lowered: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(lowered))
}

/// Intent of a request without evaluating it
pub fn classify(query: &str) -> Intent {
    find_rule(&query.to_lowercase())
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unrecognized)
}

/// Evaluates analytics requests against a dataset
pub struct QueryInterpreter<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryInterpreter<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Classify and answer a free-text request
    pub fn interpret(&self, query: &str) -> QueryResult {
        let lowered = query.to_lowercase();
        match find_rule(&lowered) {
            Some(rule) => {
                tracing::debug!("Query {:?} classified as {}", query, rule.intent);
                (rule.run)(self.dataset, &lowered)
            }
            None => {
                tracing::debug!("Query {:?} matched no rule", query);
                QueryResult::Unrecognized
            }
        }
    }
}

/// Shorthand for `QueryInterpreter::new(dataset).interpret(query)`
pub fn interpret(dataset: &Dataset, query: &str) -> QueryResult {
    QueryInterpreter::new(dataset).interpret(query)
}
