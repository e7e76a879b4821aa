//! Command-line interface for mediashelf.
//!
//! Running without a subcommand generates the metadata files. The other
//! commands load the catalog the way a browser front end would and drive
//! the viewer from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};
use crate::core::{dropdown_options, CatalogLoader};
use crate::domain::MediaKind;
use crate::library::run_generator;

pub mod browse;

/// mediashelf - document and stream catalog
#[derive(Parser, Debug)]
#[command(name = "mediashelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate data/pdfs.json and data/youtube.json (default)
    Generate,

    /// Load both catalogs and print the selection options
    List {
        /// Load from a web server instead of the local site root
        #[arg(long, env = "MEDIASHELF_BASE_URL")]
        base_url: Option<String>,
    },

    /// Browse documents and streams interactively
    Browse {
        /// Load catalogs from a web server instead of the local site root
        #[arg(long, env = "MEDIASHELF_BASE_URL")]
        base_url: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?.clone();

        match self.command.unwrap_or(Commands::Generate) {
            Commands::Generate => generate(&config).await,
            Commands::List { base_url } => list_catalogs(with_base_url(config, base_url)).await,
            Commands::Browse { base_url } => browse::run(with_base_url(config, base_url)).await,
            Commands::Config => show_config(&config),
        }
    }
}

fn with_base_url(mut config: ResolvedConfig, base_url: Option<String>) -> ResolvedConfig {
    if base_url.is_some() {
        config.base_url = base_url;
    }
    config
}

/// Run both generations; only write failures are errors
async fn generate(config: &ResolvedConfig) -> Result<()> {
    println!("Generating catalog metadata in {}", config.root.display());
    println!("{}", "=".repeat(40));

    let report = run_generator(config)
        .await
        .context("Catalog generation failed")?;

    let note = |fallback: bool| if fallback { " (default list)" } else { "" };
    println!(
        "Wrote {} with {} documents{}",
        report.documents_path.display(),
        report.documents,
        note(report.documents_fallback)
    );
    println!(
        "Wrote {} with {} streams{}",
        report.streams_path.display(),
        report.streams,
        note(report.streams_fallback)
    );
    println!("{}", "=".repeat(40));
    println!("Done");

    Ok(())
}

/// Print both dropdowns as a browser would populate them
async fn list_catalogs(config: ResolvedConfig) -> Result<()> {
    let loader = CatalogLoader::from_config(&config)?;
    let library = loader.load_library(&config).await;

    for kind in [MediaKind::Document, MediaKind::Stream] {
        println!("[{}] via {}", kind, loader.source_name());
        for option in dropdown_options(&library, kind) {
            match option.value {
                Some(index) => println!("  {:>3}  {}", index, option.label),
                None => println!("    -  {}", option.label),
            }
        }
        println!();
    }

    Ok(())
}

fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("Site root:      {}", config.root.display());
    println!("Documents:      {}", config.documents_dir().display());
    println!("Stream config:  {}", config.stream_config_path().display());
    println!("Metadata:       {}, {}", config.documents_metadata(), config.streams_metadata());
    println!(
        "Probe:          {}NN.{} up to {} (timeout {:?})",
        config.probe.prefix, config.probe.extension, config.probe.max_candidates, config.probe.timeout
    );
    println!(
        "Base URL:       {}",
        config.base_url.as_deref().unwrap_or("(local root)")
    );
    match config.config_file {
        Some(ref path) => println!("Config file:    {}", path.display()),
        None => println!("Config file:    (none, using defaults)"),
    }
    Ok(())
}
