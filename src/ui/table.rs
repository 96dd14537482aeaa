use tabled::{
    settings::{object::Columns, Modify, Style, Width},
    Table, Tabled,
};

use crate::record::QuoteRecord;

/// Wrap width of the quote column
const QUOTE_COLUMN_WIDTH: usize = 60;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

#[derive(Tabled)]
struct QuoteRow<'a> {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Quote")]
    quote: &'a str,
    #[tabled(rename = "Author")]
    author: &'a str,
    #[tabled(rename = "Tags")]
    tags: &'a str,
}

/// Quotes as a rounded table. `#` is the row index in the quotes table.
pub fn quotes_table<'a>(quotes: impl IntoIterator<Item = (usize, &'a QuoteRecord)>) -> String {
    let rows: Vec<QuoteRow<'a>> = quotes
        .into_iter()
        .map(|(index, q)| QuoteRow {
            index,
            quote: &q.quote,
            author: &q.author,
            tags: q.tags.as_deref().unwrap_or(""),
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Width::wrap(QUOTE_COLUMN_WIDTH)))
        .to_string()
}
