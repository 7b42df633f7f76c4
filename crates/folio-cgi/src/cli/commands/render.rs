//! Render command: write the CGI response for the current cache.

use anyhow::{Context, Result};
use chrono::Datelike;
use folio_core::cgi;
use folio_core::config::FolioConfig;
use folio_core::loader;
use folio_core::render::{HtmlWriter, Page};
use std::io::{self, BufWriter, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the cache and write the page to stdout. A cache that cannot be
/// loaded renders the "no projects" page; only write errors fail.
pub fn run_render(cfg: &FolioConfig, headers: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let year = chrono::Local::now().year();
    write_response(cfg, headers, year, &mut out).context("write response")?;
    out.flush().context("flush response")?;
    Ok(())
}

fn write_response<W: Write>(
    cfg: &FolioConfig,
    headers: bool,
    year: i32,
    out: &mut W,
) -> io::Result<()> {
    let loaded = loader::load(&cfg.cache_path, cfg.max_projects);
    tracing::info!(
        ok = loaded.ok,
        count = loaded.projects.len(),
        "rendering portfolio from {}",
        cfg.cache_path.display()
    );

    if headers {
        cgi::write_headers(out, cfg.cache_max_age_secs)?;
    }
    let page = Page::new(&cfg.site, year, VERSION);
    let mut html = HtmlWriter::new(out);
    page.render(&loaded.projects, &mut html)
}
