use crate::{emit_success, OutputMode};
use owo_colors::OwoColorize;
use quotelens::config::{self, QuotelensConfig};
use quotelens::query::{classify, QueryResult, QUERY_EXAMPLES, QUERY_HINT};
use quotelens::ui::{
    banner, bar_chart, chart, header, info, quotes_table, section, stats_table, success,
    summary_row, theme, warn, Icons, DEFAULT_CHART_WIDTH,
};
use quotelens::views::{self, Page};
use quotelens::{Dataset, ExportFormat};
use std::path::{Path, PathBuf};

pub fn run_home(dataset: &Dataset, output_mode: OutputMode) -> anyhow::Result<()> {
    let home = views::home(dataset);

    if !output_mode.is_human() {
        return emit_success(output_mode, "home", serde_json::to_value(&home)?);
    }

    banner(Page::Home.title(), "Web Scraping & Crawling with Interactive Analytics");

    let total_quotes = home.summary.total_quotes.to_string();
    let total_authors = home.summary.total_authors.to_string();
    let total_tags = home.summary.total_tags.to_string();
    println!(
        "{}",
        stats_table(&[
            ("Total Quotes", total_quotes.as_str()),
            ("Total Authors", total_authors.as_str()),
            ("Total Tags", total_tags.as_str()),
        ])
    );

    section(&format!("{} Download Data", Icons::DOWN));
    for download in &home.downloads {
        summary_row(
            download.file_name,
            &format!("quotelens export --format {}", download.format),
        );
    }
    Ok(())
}

pub fn run_quotes(
    dataset: &Dataset,
    search: Option<&str>,
    limit: Option<usize>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let term = search.unwrap_or("");
    let matches = views::search_quotes(dataset.quotes(), term);
    let shown = limit.unwrap_or(matches.len()).min(matches.len());

    if !output_mode.is_human() {
        let data = serde_json::json!({
            "search": term,
            "total": dataset.quotes().len(),
            "count": matches.len(),
            "quotes": &matches[..shown],
        });
        return emit_success(output_mode, "quotes", data);
    }

    header(Icons::SCROLL, Page::QuotesExplorer.title());
    if !term.trim().is_empty() {
        info("Search", term);
    }

    if matches.is_empty() {
        warn("No quotes match your search.");
        return Ok(());
    }

    println!(
        "{}",
        quotes_table(matches[..shown].iter().map(|hit| (hit.row, hit.quote)))
    );
    if shown < matches.len() {
        println!(
            "{}",
            format!("… {} more (use --limit to show more)", matches.len() - shown)
                .style(theme().muted.clone())
        );
    }
    Ok(())
}

pub fn run_authors(dataset: &Dataset, output_mode: OutputMode) -> anyhow::Result<()> {
    let names = dataset.author_names();

    if !output_mode.is_human() {
        return emit_success(output_mode, "authors", serde_json::to_value(&names)?);
    }

    header(Icons::BRAIN, Page::AuthorExplorer.title());
    for name in names {
        println!("  {} {}", Icons::PERSON, name);
    }
    Ok(())
}

pub fn run_author(dataset: &Dataset, name: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let profile = views::author_profile(dataset, name)?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "author", serde_json::to_value(&profile)?);
    }

    header(Icons::BRAIN, Page::AuthorExplorer.title());
    section(&profile.name);
    println!("{} {}", "Born:".bold(), profile.born);
    println!("{} {}", "Quotes:".bold(), profile.quote_count);
    println!();
    println!("{}", profile.description);
    Ok(())
}

pub fn run_analytics(dataset: &Dataset, query: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let result = views::analytics(dataset, query);

    if !output_mode.is_human() {
        let data = serde_json::json!({
            "query": query,
            "result": result,
        });
        return emit_success(output_mode, "analytics", data);
    }

    header(Icons::STATS, Page::Analytics.title());
    let Some(result) = result else {
        info("Try", &QUERY_EXAMPLES.join(" | "));
        return Ok(());
    };
    info("Intent", classify(query).as_str());

    match result {
        QueryResult::AuthorRanking(ranking) => {
            section(&format!("Top {} Authors", ranking.len()));
            chart(&bar_chart(&ranking, DEFAULT_CHART_WIDTH));
        }
        QueryResult::PopularAuthor { author, count } => {
            success(&format!(
                "{} Most Popular Author: {} ({} quotes)",
                Icons::TROPHY,
                author.bold(),
                count
            ));
        }
        QueryResult::QuoteList(quotes) => {
            section(&format!("Top {} Quotes", quotes.len()));
            // The top quotes are the head of the table, so position is the row
            println!("{}", quotes_table(quotes.iter().enumerate()));
        }
        QueryResult::TagRanking(ranking) => {
            section(&format!("{} Top Tags", Icons::TAG));
            chart(&bar_chart(&ranking, DEFAULT_CHART_WIDTH));
        }
        QueryResult::NoData(_) => warn("No quotes loaded."),
        QueryResult::Unrecognized => warn(QUERY_HINT),
    }
    Ok(())
}

pub fn run_export(
    dataset: &Dataset,
    format: &str,
    output: Option<PathBuf>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse()?;
    let path = output.unwrap_or_else(|| PathBuf::from(format.file_name()));
    let bytes = format.render(dataset.quotes())?;
    std::fs::write(&path, &bytes)?;
    tracing::info!("Exported {} quotes to {}", dataset.quotes().len(), path.display());

    if output_mode.is_human() {
        success(&format!(
            "Wrote {} quotes ({} bytes) to {}",
            dataset.quotes().len(),
            bytes.len(),
            path.display()
        ));
    } else {
        let data = serde_json::json!({
            "format": format,
            "path": path.display().to_string(),
            "bytes": bytes.len(),
        });
        emit_success(output_mode, "export", data)?;
    }
    Ok(())
}

pub fn run_init(path: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    config::write_config(path, &QuotelensConfig::starter(), force)?;

    if output_mode.is_human() {
        success(&format!("Wrote config to {}", path.display()));
    } else {
        let data = serde_json::json!({ "path": path.display().to_string() });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}
