//! Check command: verify that the cache loads.

use anyhow::{Context, Result};
use folio_core::config::FolioConfig;
use folio_core::loader;

pub fn run_check(cfg: &FolioConfig) -> Result<()> {
    let projects = loader::load_projects(&cfg.cache_path, 0)
        .with_context(|| format!("check {}", cfg.cache_path.display()))?;
    let shown = match cfg.max_projects {
        0 => projects.len(),
        max => projects.len().min(max),
    };
    println!("ok: {} projects ({} shown)", projects.len(), shown);
    Ok(())
}
