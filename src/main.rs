//! quotelens CLI - Quotes Intelligence Dashboard in the terminal

use anyhow::Context;
use clap::{Parser, Subcommand};
use quotelens::config::{self, Overrides};
use quotelens::Dataset;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "quotelens")]
#[command(version)]
#[command(about = "Quotes Intelligence Dashboard - explore quotes, authors and tags")]
#[command(long_about = r#"
quotelens loads a quotes table and an authors table and lets you:
  • See headline numbers and download the data (home)
  • Search quotes by text or author (quotes)
  • Look up an author's biography (author)
  • Ask canned analytics questions (analytics)
  • Serve everything as a local JSON API (serve)

Example usage:
  quotelens home
  quotelens quotes --search einstein
  quotelens author --name "Jane Austen"
  quotelens analytics --query "top 5 authors"
  quotelens export --format xlsx
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the quotes CSV file
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Path to the authors CSV file
    #[arg(long, global = true)]
    authors: Option<PathBuf>,

    /// Use the light color theme
    #[arg(long, global = true)]
    light: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total quotes, authors and tags
    Home,

    /// Browse quotes, optionally filtered by text or author
    Quotes {
        /// Case-insensitive search over quote text and author
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the authors available for lookup
    Authors,

    /// Show an author's biography
    Author {
        /// Author name, exactly as listed by `authors`
        #[arg(short, long)]
        name: String,
    },

    /// Answer an analytics request such as "top 5 authors"
    Analytics {
        /// Request text
        #[arg(short, long)]
        query: String,
    },

    /// Write the full quotes table as CSV or XLSX
    Export {
        /// Output format (csv, xlsx)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (defaults to quotes_data.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the dashboard as a JSON API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

/// Print a `{"ok": true, "command": .., "data": ..}` envelope
pub fn emit_success(
    output_mode: OutputMode,
    command: &str,
    data: serde_json::Value,
) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        let envelope = serde_json::json!({
            "ok": true,
            "command": command,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if let Commands::Init { force } = cli.command {
        let path = cli.config.unwrap_or_else(config::default_config_path);
        return commands::run_init(&path, force, output_mode);
    }

    let file_config = config::load_config(cli.config.as_deref())?;
    let overrides = Overrides {
        quotes: cli.quotes,
        authors: cli.authors,
        light: cli.light,
        port: match cli.command {
            Commands::Serve { port } => port,
            _ => None,
        },
    };
    let settings = config::resolve(file_config.as_ref(), &overrides);
    quotelens::ui::init_theme(settings.theme);

    let dataset = Dataset::load(&settings.paths).context("failed to load the quotes dataset")?;

    match cli.command {
        Commands::Home => commands::run_home(&dataset, output_mode)?,
        Commands::Quotes { search, limit } => {
            commands::run_quotes(&dataset, search.as_deref(), limit, output_mode)?
        }
        Commands::Authors => commands::run_authors(&dataset, output_mode)?,
        Commands::Author { name } => commands::run_author(&dataset, &name, output_mode)?,
        Commands::Analytics { query } => commands::run_analytics(&dataset, &query, output_mode)?,
        Commands::Export { format, output } => {
            commands::run_export(&dataset, &format, output, output_mode)?
        }
        Commands::Serve { .. } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(quotelens::server::start_server(settings.port, dataset))?;
        }
        Commands::Init { .. } => unreachable!("handled before loading the dataset"),
    }

    Ok(())
}
