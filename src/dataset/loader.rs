//! CSV readers for the quotes and authors tables

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{schema, LoadError};
use crate::record::{AuthorRecord, QuoteRecord};

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader)
}

/// Map each required column name to its position in the header row.
fn resolve_columns(
    headers: &StringRecord,
    required: &[&'static str],
    origin: &str,
) -> Result<Vec<usize>, LoadError> {
    required
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| LoadError::MissingColumn {
                    origin: origin.to_string(),
                    column: *column,
                })
        })
        .collect()
}

/// Short rows are tolerated; a missing trailing cell reads as blank.
fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Parse the quotes table (`Quote, Author, Tags`).
pub fn read_quotes<R: Read>(reader: R, origin: &str) -> Result<Vec<QuoteRecord>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| LoadError::parse(origin, e))?
        .clone();
    let cols = resolve_columns(&headers, schema::QUOTE_COLUMNS, origin)?;

    let mut quotes = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| LoadError::parse(origin, e))?;
        quotes.push(
            QuoteRecord::new(cell(&row, cols[0]), cell(&row, cols[1]))
                .with_tags(cell(&row, cols[2])),
        );
    }

    tracing::debug!("Read {} quotes from {}", quotes.len(), origin);
    Ok(quotes)
}

/// Parse the authors table (`Author, Born Date, Born Place, Description`).
pub fn read_authors<R: Read>(reader: R, origin: &str) -> Result<Vec<AuthorRecord>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| LoadError::parse(origin, e))?
        .clone();
    let cols = resolve_columns(&headers, schema::AUTHOR_COLUMNS, origin)?;

    let mut authors = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| LoadError::parse(origin, e))?;
        authors.push(
            AuthorRecord::new(cell(&row, cols[0]))
                .with_birth(cell(&row, cols[1]), cell(&row, cols[2]))
                .with_description(cell(&row, cols[3])),
        );
    }

    tracing::debug!("Read {} authors from {}", authors.len(), origin);
    Ok(authors)
}
