use artbrowse::command::Command;
use artbrowse::error::ArtbrowseError;
use artbrowse::logger::initialize as LoggerInitialize;
use artbrowse::session::{execute, run_session, show_loading};
use artbrowse::terminal::render_filters;

use client_core::browser::{Browser, Filters};
use client_core::catalog_client::CatalogClient;
use client_core::config::{AppConfig, default_config_dir};
use client_core::reference_cache::{FileStore, ReferenceCache};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::{stderr, stdout};
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::{BufReader, stdin};

#[derive(Parser)]
#[command(name = "artbrowse")]
#[command(about = "Search and browse an art museum's object catalog")]
struct Cli {
    /// Classification to search for on start
    #[arg(long)]
    classification: Option<String>,
    /// Century to search for on start
    #[arg(long)]
    century: Option<String>,
    /// Keywords to search for on start
    #[arg(long)]
    keyword: Option<String>,
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Directory for artbrowse.log (defaults to <config dir>/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Forget the stored centuries and classifications before starting
    #[arg(long)]
    clear_cache: bool,
}

impl Cli {
    fn initial_search(&self) -> Option<Filters> {
        if self.classification.is_none() && self.century.is_none() && self.keyword.is_none() {
            return None;
        }
        Some(Filters {
            classification: self.classification.clone(),
            century: self.century.clone(),
            keyword: self.keyword.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ArtbrowseError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));

    create_dir_all(&log_dir).map_err(|e| ArtbrowseError::Artbrowse {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("artbrowse starting");
    info!("Log directory: {}", log_dir.display());

    let config = AppConfig::load(&config_dir)?;
    let api_key = config.resolve_api_key(&config_dir)?;
    let client = CatalogClient::new(&config.catalog.base_url, api_key)?;

    let cache_dir = config.cache_dir()?;
    info!("Reference cache: {}", cache_dir.display());
    let cache = ReferenceCache::new(FileStore::new(cache_dir));
    if cli.clear_cache {
        cache.clear()?;
    }

    let browser = Browser::new(client, cache)
        .with_page_size(config.catalog.page_size);

    tokio::spawn(show_loading(browser.busy().subscribe(), stderr()));

    let mut out = stdout();
    let options = browser.startup().await;
    render_filters(&mut out, &options)?;

    if let Some(filters) = cli.initial_search() {
        execute(&browser, Command::Search(filters), &mut out).await?;
    }

    run_session(&browser, BufReader::new(stdin()), &mut out).await
}
