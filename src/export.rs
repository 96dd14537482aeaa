//! Downloadable exports of the full quotes table
//!
//! Exports always cover the whole table as loaded, never a filtered view.
//! Columns are `Quote, Author, Tags`; absent tags are written as empty cells.

use std::str::FromStr;

use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};

use crate::dataset::schema;
use crate::record::QuoteRecord;
use crate::{Error, Result};

/// Export file formats offered for download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Xlsx]
    }

    /// Suggested download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "quotes_data.csv",
            ExportFormat::Xlsx => "quotes_data.xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Encode the quotes table in this format
    pub fn render(&self, quotes: &[QuoteRecord]) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Csv => to_csv(quotes),
            ExportFormat::Xlsx => to_xlsx(quotes),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" | "spreadsheet" => Ok(ExportFormat::Xlsx),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Quotes table as RFC 4180 CSV with a header row
pub fn to_csv(quotes: &[QuoteRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(schema::QUOTE_COLUMNS)?;
    for quote in quotes {
        writer.write_record([
            quote.quote.as_str(),
            quote.author.as_str(),
            quote.tags.as_deref().unwrap_or(""),
        ])?;
    }
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Quotes table as a single-sheet XLSX workbook
pub fn to_xlsx(quotes: &[QuoteRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, name) in schema::QUOTE_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, quote) in quotes.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &quote.quote)?;
        sheet.write_string(row, 1, &quote.author)?;
        if let Some(tags) = &quote.tags {
            sheet.write_string(row, 2, tags)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader;
    use calamine::{DataType, Reader, Xlsx};
    use std::io::Cursor;

    fn sample_quotes() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord::new(
                "“The world as we have created it is a process of our thinking.”",
                "Albert Einstein",
            )
            .with_tags("change, deep-thoughts, thinking, world"),
            QuoteRecord::new("He said \"no\",\nthen left.", "Anonymous"),
            QuoteRecord::new("  leading spaces stay", "Jane Austen").with_tags("humor"),
        ]
    }

    #[test]
    fn test_csv_round_trip() {
        let quotes = sample_quotes();
        let bytes = to_csv(&quotes).unwrap();
        let reparsed = loader::read_quotes(bytes.as_slice(), "export").unwrap();
        assert_eq!(reparsed, quotes);
    }

    #[test]
    fn test_csv_header_and_empty_tags() {
        let bytes = to_csv(&sample_quotes()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Quote,Author,Tags\n"));
        assert!(text.contains("\"He said \"\"no\"\",\nthen left.\",Anonymous,\n"));
    }

    #[test]
    fn test_csv_of_empty_table_is_header_only() {
        let bytes = to_csv(&[]).unwrap();
        assert_eq!(bytes, b"Quote,Author,Tags\n");
    }

    #[test]
    fn test_xlsx_reads_back() {
        let quotes = sample_quotes();
        let bytes = to_xlsx(&quotes).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let sheet_name = workbook.sheet_names()[0].clone();
        let range = match workbook.worksheet_range(&sheet_name) {
            Some(Ok(range)) => range,
            _ => panic!("missing worksheet"),
        };

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        DataType::String(s) => s.clone(),
                        DataType::Empty => String::new(),
                        other => panic!("unexpected cell {:?}", other),
                    })
                    .collect()
            })
            .collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["Quote", "Author", "Tags"]);
        assert_eq!(rows[1][1], "Albert Einstein");
        assert_eq!(rows[1][2], "change, deep-thoughts, thinking, world");
        assert_eq!(rows[2][2], "");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Xlsx.file_name(), "quotes_data.xlsx");
    }
}
