// src/cli.rs
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use serde::Serialize;

use crate::config::consts::{BASE_URL, DEFAULT_FIXTURE_DIR, REQUEST_TIMEOUT_SECS};
use crate::config::{ClientOptions, Since};
use crate::core::HttpFetcher;
use crate::csv::{self, Row};
use crate::specs::SelectorTable;
use crate::{Trending, fixtures, log};

#[derive(Parser, Debug)]
#[command(name = "trending", version, about = "GitHub trending repositories, developers and languages")]
struct Cli {
    /// Origin of the trending pages (e.g. a GitHub Enterprise host)
    #[arg(long, env = "TRENDING_BASE_URL", default_value = BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Which generation of the page markup to read
    #[arg(long, value_enum, default_value_t = Layout::Current, global = true)]
    layout: Layout,

    /// -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trending repositories
    Projects(FilterArgs),
    /// Trending developers
    Developers(FilterArgs),
    /// Language filter menu
    Languages {
        /// Only the short list of currently trending languages
        #[arg(long)]
        trending: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Download the live pages into the test fixture directory
    RefreshFixtures {
        #[arg(long, default_value = DEFAULT_FIXTURE_DIR)]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// daily | weekly | monthly (omit for the site default)
    #[arg(long)]
    since: Option<Since>,

    /// Language token as printed by `languages` (e.g. "go")
    #[arg(short, long)]
    language: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    format: Format,

    /// Emit a header line (CSV/TSV only)
    #[arg(long)]
    headers: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Tsv,
    Json,
}

impl Format {
    fn delim(&self) -> char {
        match self { Format::Tsv => '\t', _ => ',' }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Current,
    Legacy,
}

impl Layout {
    fn selectors(&self) -> SelectorTable {
        match self {
            Layout::Current => SelectorTable::CURRENT,
            Layout::Legacy => SelectorTable::LEGACY,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    log::init(cli.verbose);

    let options = ClientOptions::default()
        .with_base_url(&cli.base_url)?
        .with_timeout(Duration::from_secs(cli.timeout));

    if let Command::RefreshFixtures { dir } = &cli.command {
        let fetcher = HttpFetcher::new(&options)?;
        for (path, bytes) in fixtures::refresh(&fetcher, &options.base_url, dir)? {
            eprintln!("Wrote {bytes} bytes to {}", path.display());
        }
        return Ok(());
    }

    let trend = Trending::with_options(options)?.selectors(cli.layout.selectors());

    match &cli.command {
        Command::Projects(f) => {
            let projects = trend.projects(f.since, f.language.as_deref())?;
            emit(&projects, &f.output)
        }
        Command::Developers(f) => {
            let developers = trend.developers(f.since, f.language.as_deref())?;
            emit(&developers, &f.output)
        }
        Command::Languages { trending, output } => {
            let languages = if *trending { trend.trending_languages()? } else { trend.languages()? };
            emit(&languages, output)
        }
        Command::RefreshFixtures { .. } => Ok(()),
    }
}

fn emit<R: Row + Serialize>(records: &[R], out: &OutputArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut w = BufWriter::new(stdout.lock());

    match out.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut w, records)?;
            writeln!(w)?;
        }
        Format::Csv | Format::Tsv => csv::write_records(&mut w, records, out.headers, out.format.delim())?,
    }
    w.flush()?;
    Ok(())
}
