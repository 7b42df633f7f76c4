//! Logging setup for the CGI process.
//!
//! Stdout carries the HTTP response, so events go to `folio.log` in the XDG
//! state directory, or to stderr (the web server's error log) when that file
//! cannot be opened.

use anyhow::{anyhow, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,folio=debug,folio_core=debug";

/// `$XDG_STATE_HOME/folio/folio.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.get_state_file("folio.log"))
}

/// Shares one append handle across events; a failed clone sends that event to stderr.
struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::stderr()),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to [`log_file_path`]. Returns Err when the state dir is unusable
/// (no HOME under the web server, read-only chroot) so the caller can use
/// [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    tracing::info!("folio logging initialized at {}", path.display());
    Ok(())
}

pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
