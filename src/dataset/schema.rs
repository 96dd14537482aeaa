//! Column layout of the two input files

/// Quotes file: `Quote` column
pub const QUOTE: &str = "Quote";
/// Quotes file: `Author` column (also the authors file key)
pub const AUTHOR: &str = "Author";
/// Quotes file: `Tags` column, nullable
pub const TAGS: &str = "Tags";

/// Authors file: `Born Date` column
pub const BORN_DATE: &str = "Born Date";
/// Authors file: `Born Place` column
pub const BORN_PLACE: &str = "Born Place";
/// Authors file: `Description` column
pub const DESCRIPTION: &str = "Description";

/// Header of the quotes file, in export order
pub const QUOTE_COLUMNS: &[&str] = &[QUOTE, AUTHOR, TAGS];

/// Header of the authors file
pub const AUTHOR_COLUMNS: &[&str] = &[AUTHOR, BORN_DATE, BORN_PLACE, DESCRIPTION];

/// Default file names, resolved against the working directory
pub const DEFAULT_QUOTES_FILE: &str = "quotes_data.csv";
pub const DEFAULT_AUTHORS_FILE: &str = "authors_data.csv";
