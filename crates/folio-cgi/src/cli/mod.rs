//! CLI for the folio portfolio page.
//!
//! Run without a subcommand (as a CGI server does) it renders the page.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio_core::config::{self, FolioConfig};
use std::ffi::OsString;
use std::path::PathBuf;

use commands::{run_check, run_list, run_render};

/// Set by the web server for every CGI request (RFC 3875).
const GATEWAY_ENV: &str = "GATEWAY_INTERFACE";

/// Top-level CLI for folio.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "folio: portfolio page CGI backed by a GitHub repository cache", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Config file (default: $FOLIO_CONFIG or ~/.config/folio/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project cache JSON, overriding `cache_path` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub cache: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write the CGI response (headers and HTML page) to stdout. Default.
    Render {
        /// Only write the HTML document, without CGI headers.
        #[arg(long)]
        no_headers: bool,
    },

    /// List the projects found in the cache.
    List {
        /// Print the normalized records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check that the cache can be loaded.
    Check,
}

impl Cli {
    /// Parses argv, except under CGI: there the server may pass the decoded
    /// query string (`folio?rust` runs `folio rust`), so argv is ignored and
    /// the page is rendered with default options.
    pub fn from_invocation<I, T>(args: I, under_cgi: bool) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if under_cgi {
            return Ok(Cli {
                global: GlobalArgs::default(),
                command: None,
            });
        }
        Cli::try_parse_from(args)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let under_cgi = std::env::var_os(GATEWAY_ENV).is_some();
        let cli =
            Cli::from_invocation(std::env::args_os(), under_cgi).unwrap_or_else(|e| e.exit());
        let cfg = load_config(&cli.global)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Render { no_headers: false }) {
            CliCommand::Render { no_headers } => run_render(&cfg, !no_headers)?,
            CliCommand::List { json } => run_list(&cfg, json)?,
            CliCommand::Check => run_check(&cfg)?,
        }

        Ok(())
    }
}

/// Explicit `--config` must exist; the default location may be absent.
fn load_config(args: &GlobalArgs) -> Result<FolioConfig> {
    let mut cfg = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => config::load_or_default()?,
    };
    if let Some(cache) = &args.cache {
        cfg.cache_path = cache.clone();
    }
    Ok(cfg)
}
