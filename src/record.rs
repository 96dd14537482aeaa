//! Record types - one row of each input table
//!
//! - `QuoteRecord`: a quote, its author and optional comma-separated tags
//! - `AuthorRecord`: biography row keyed by author name
//!
//! Both are immutable after load; identity is positional (row index).

use serde::{Deserialize, Serialize};

/// Separator between individual tags inside the `Tags` column.
pub const TAG_SEPARATOR: &str = ", ";

/// A row of the quotes table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote text
    pub quote: String,
    /// Author name (soft reference into the authors table)
    pub author: String,
    /// Raw tags field, `None` when the cell was empty
    pub tags: Option<String>,
}

impl QuoteRecord {
    /// Create a new quote record without tags
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            tags: None,
        }
    }

    /// Set the raw tags field. Blank input is stored as `None`.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        let tags = tags.into();
        self.tags = if tags.trim().is_empty() { None } else { Some(tags) };
        self
    }

    /// Individual tags, split on `", "`.
    ///
    /// Absent or blank fields yield nothing, and so do blank tokens.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .as_deref()
            .into_iter()
            .flat_map(|tags| tags.split(TAG_SEPARATOR))
            .filter(|tag| !tag.trim().is_empty())
    }

    /// Case-insensitive substring match against quote text or author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.quote.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// A row of the authors table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Author name, unique within the authors table
    pub author: String,
    /// Free-text birth date, blank when unknown
    pub born_date: String,
    /// Free-text birth place, blank when unknown
    pub born_place: String,
    /// Biography
    pub description: String,
}

impl AuthorRecord {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            born_date: String::new(),
            born_place: String::new(),
            description: String::new(),
        }
    }

    pub fn with_birth(mut self, date: impl Into<String>, place: impl Into<String>) -> Self {
        self.born_date = date.into();
        self.born_place = place.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// "<date> <place>" line shown on the author card
    pub fn born_line(&self) -> String {
        format!("{} {}", self.born_date, self.born_place).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_splits_on_comma_space() {
        let quote = QuoteRecord::new("q", "a").with_tags("life, love, humor");
        let tags: Vec<_> = quote.tag_list().collect();
        assert_eq!(tags, vec!["life", "love", "humor"]);
    }

    #[test]
    fn test_tag_list_ignores_blank_fields() {
        assert_eq!(QuoteRecord::new("q", "a").tag_list().count(), 0);
        assert_eq!(QuoteRecord::new("q", "a").with_tags("   ").tag_list().count(), 0);

        let quote = QuoteRecord {
            quote: "q".into(),
            author: "a".into(),
            tags: Some("a, , b".into()),
        };
        let tags: Vec<_> = quote.tag_list().collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_tag_list_keeps_comma_without_space_together() {
        let quote = QuoteRecord::new("q", "a").with_tags("a,b");
        let tags: Vec<_> = quote.tag_list().collect();
        assert_eq!(tags, vec!["a,b"]);
    }

    #[test]
    fn test_matches_quote_or_author() {
        let quote = QuoteRecord::new("The world as we have created it", "Albert Einstein");
        assert!(quote.matches("world"));
        assert!(quote.matches("einstein"));
        assert!(!quote.matches("twain"));
    }

    #[test]
    fn test_born_line_trims_missing_parts() {
        let author = AuthorRecord::new("Jane Austen").with_birth("December 16, 1775", "in Steventon Rectory, Hampshire, The United Kingdom");
        assert_eq!(author.born_line(), "December 16, 1775 in Steventon Rectory, Hampshire, The United Kingdom");
        assert_eq!(AuthorRecord::new("Unknown").born_line(), "");
    }
}
