//! Data Source - the two read-only input tables
//!
//! Both tables are read once from CSV files with a fixed header:
//! - quotes(Quote, Author, Tags)
//! - authors(Author, Born Date, Born Place, Description)
//!
//! The resulting `Dataset` is never mutated and is passed explicitly to every
//! aggregation, query and view.

pub mod loader;
pub mod schema;

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::record::{AuthorRecord, QuoteRecord};
use crate::Result;

/// Failure to load one of the input tables. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{origin}: file not found")]
    Missing { origin: String },

    #[error("{origin}: failed to read: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: malformed CSV: {source}")]
    Parse {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin}: missing required column '{column}'")]
    MissingColumn { origin: String, column: &'static str },
}

impl LoadError {
    pub(crate) fn parse(origin: &str, source: csv::Error) -> Self {
        LoadError::Parse {
            origin: origin.to_string(),
            source,
        }
    }
}

/// Locations of the two input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub quotes: PathBuf,
    pub authors: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            quotes: PathBuf::from(schema::DEFAULT_QUOTES_FILE),
            authors: PathBuf::from(schema::DEFAULT_AUTHORS_FILE),
        }
    }
}

/// The loaded quotes and authors tables
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    quotes: Vec<QuoteRecord>,
    authors: Vec<AuthorRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed tables
    pub fn new(quotes: Vec<QuoteRecord>, authors: Vec<AuthorRecord>) -> Self {
        Self { quotes, authors }
    }

    /// Load both tables from disk. Either file failing aborts the whole load.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let quotes = loader::read_quotes(open(&paths.quotes)?, &paths.quotes.display().to_string())?;
        let authors = loader::read_authors(open(&paths.authors)?, &paths.authors.display().to_string())?;

        tracing::info!(
            "Loaded {} quotes and {} authors",
            quotes.len(),
            authors.len()
        );
        Ok(Self::new(quotes, authors))
    }

    /// Parse both tables from in-memory or streamed CSV
    pub fn from_readers(quotes: impl Read, authors: impl Read) -> Result<Self> {
        let quotes = loader::read_quotes(quotes, "<quotes>")?;
        let authors = loader::read_authors(authors, "<authors>")?;
        Ok(Self::new(quotes, authors))
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn authors(&self) -> &[AuthorRecord] {
        &self.authors
    }

    /// Distinct author names from the authors table, first appearance order.
    ///
    /// This is the list offered by the author picker.
    pub fn author_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.authors.len());
        self.authors
            .iter()
            .map(|a| a.author.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First author row with exactly this name
    pub fn find_author(&self, name: &str) -> Option<&AuthorRecord> {
        self.authors.iter().find(|a| a.author == name)
    }
}

fn open(path: &Path) -> std::result::Result<BufReader<File>, LoadError> {
    File::open(path).map(BufReader::new).map_err(|source| {
        let origin = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::Missing { origin }
        } else {
            LoadError::Read { origin, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const QUOTES: &str = "Quote,Author,Tags\nq1,Albert Einstein,\"change, world\"\nq2,J.K. Rowling,abilities\n";
    const AUTHORS: &str = "Author,Born Date,Born Place,Description\nAlbert Einstein,\"March 14, 1879\",\"in Ulm, Germany\",Physicist\nJ.K. Rowling,\"July 31, 1965\",\"in Yate, United Kingdom\",Writer\nAlbert Einstein,,,duplicate\n";

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths {
            quotes: write(dir.path(), "quotes.csv", QUOTES),
            authors: write(dir.path(), "authors.csv", AUTHORS),
        };

        let dataset = Dataset::load(&paths).unwrap();
        assert_eq!(dataset.quotes().len(), 2);
        assert_eq!(dataset.authors().len(), 3);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths {
            quotes: write(dir.path(), "quotes.csv", QUOTES),
            authors: dir.path().join("absent.csv"),
        };

        let err = Dataset::load(&paths).unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::Missing { .. })));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_author_names_are_distinct_in_order() {
        let dataset = Dataset::from_readers(QUOTES.as_bytes(), AUTHORS.as_bytes()).unwrap();
        assert_eq!(dataset.author_names(), vec!["Albert Einstein", "J.K. Rowling"]);
    }

    #[test]
    fn test_find_author_returns_first_match() {
        let dataset = Dataset::from_readers(QUOTES.as_bytes(), AUTHORS.as_bytes()).unwrap();

        let einstein = dataset.find_author("Albert Einstein").unwrap();
        assert_eq!(einstein.description, "Physicist");
        assert_eq!(einstein.born_place, "in Ulm, Germany");
        assert!(dataset.find_author("Nobody").is_none());
    }
}
