//! List command: show the projects found in the cache.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::loader;

pub fn run_list(cfg: &FolioConfig, json: bool) -> Result<()> {
    let projects = loader::load_projects(&cfg.cache_path, cfg.max_projects)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else if projects.is_empty() {
        println!("No projects in cache.");
    } else {
        println!("{:<24} {:<16} {}", "NAME", "BADGE", "URL");
        for p in &projects {
            println!("{:<24} {:<16} {}", p.name, p.badge(), p.url);
        }
    }
    Ok(())
}
