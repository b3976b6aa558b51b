use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use cik::render::{self, Format};
use cik::{Config, Edgar};
use cik_feeds::{encode_latin1, DirectoryLoader};

#[derive(Parser)]
#[command(name = "cik", about = "Look up SEC EDGAR CIK codes and company names")]
struct Cli {
    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read the directory from this file instead of fetching it.
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exact CIK for a company name (names are uppercase in the directory).
    Cik { name: String },
    /// Exact company name for a CIK, leading zeros included.
    Name { cik: String },
    /// Rank every company by similarity to QUERY.
    Match {
        query: String,
        /// Number of results; defaults to `search.top_k` from the config.
        #[arg(long, short = 'n')]
        top: Option<usize>,
        /// Log scan progress.
        #[arg(long)]
        progress: bool,
    },
    /// Companies whose name contains every word of WORDS.
    Find {
        words: String,
        /// Include the CIK of each company.
        #[arg(long)]
        with_cik: bool,
    },
    /// Fetch the directory from EDGAR and save it for use with --cache.
    Download { output: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.cache {
        config.source.cache_path = Some(path.clone());
    }
    let format = if cli.json { Format::Json } else { Format::Text };

    let out = match cli.command {
        Command::Download { output } => return download(&config, &output),
        Command::Cik { name } => {
            render::single("cik", load(&config)?.cik_for_name(&name)?, format)?
        }
        Command::Name { cik } => {
            render::single("company_name", load(&config)?.name_for_cik(&cik)?, format)?
        }
        Command::Match { query, top, progress } => {
            let edgar = load(&config)?;
            let top_k = top.unwrap_or_else(|| edgar.top_k());
            render::matches(&edgar.match_company(&query, top_k, progress), format)?
        }
        Command::Find { words, with_cik: true } => {
            render::pairs(&load(&config)?.find_company_names_with_cik(&words), format)?
        }
        Command::Find { words, with_cik: false } => {
            render::names(&load(&config)?.find_company_names(&words), format)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if format == Format::Json {
        writeln!(stdout)?;
    }
    Ok(())
}

fn load(config: &Config) -> anyhow::Result<Edgar> {
    Edgar::load(config)
        .with_context(|| format!("failed to load directory from {}", config.source.url))
}

fn download(config: &Config, output: &Path) -> anyhow::Result<()> {
    let mut loader = DirectoryLoader::remote(&config.source, &config.retry)?;
    let fetched = loader.fetch_text()?;
    std::fs::write(output, encode_latin1(&fetched.text))
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(
        path = %output.display(),
        attempts = fetched.attempts,
        "directory saved"
    );
    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}
