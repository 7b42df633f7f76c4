//! Project loader: reads the cached GitHub repository list into [`Project`]s.
//!
//! The cache is a JSON array of repository objects as returned by the GitHub
//! API. Only `name`, `description`, `html_url`, `language` and
//! `license.spdx_id` are read; each of them may be absent or of the wrong
//! type, in which case that single field falls back to its sentinel.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::project::{Language, License, Project, NO_DESCRIPTION, NO_NAME, NO_URL};

/// Why the cache could not be turned into a project list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read project cache {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse project cache JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project cache is not a JSON array (found {found})")]
    NotAnArray { found: &'static str },
}

/// Outcome of [`load`]: the projects plus whether the cache was usable.
///
/// `ok == false` always comes with an empty list; callers render the
/// "no projects" page either way.
#[derive(Debug, Default)]
pub struct Loaded {
    pub projects: Vec<Project>,
    pub ok: bool,
}

/// Loads the cache at `path`, degrading any failure to an empty list.
///
/// `max_projects` bounds the result (0 = unbounded).
pub fn load(path: &Path, max_projects: usize) -> Loaded {
    match load_projects(path, max_projects) {
        Ok(projects) => {
            tracing::debug!(count = projects.len(), "loaded project cache {}", path.display());
            Loaded { projects, ok: true }
        }
        Err(err) => {
            tracing::warn!("could not load projects: {err}");
            Loaded::default()
        }
    }
}

/// Reads and parses the cache file. The file handle is closed before return.
pub fn load_projects(path: &Path, max_projects: usize) -> Result<Vec<Project>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_projects(&bytes, max_projects)
}

/// Parses a JSON document into projects, preserving array order.
pub fn parse_projects(bytes: &[u8], max_projects: usize) -> Result<Vec<Project>, LoadError> {
    let doc: Value = serde_json::from_slice(bytes)?;
    let items = match doc {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let total = items.len();
    let limit = if max_projects == 0 {
        total
    } else {
        total.min(max_projects)
    };
    if limit < total {
        tracing::warn!("project cache has {total} entries, keeping first {limit}");
    }

    Ok(items.iter().take(limit).map(project_from_value).collect())
}

/// Builds one project from an array element. Never fails.
pub fn project_from_value(v: &Value) -> Project {
    let spdx_id = v
        .get("license")
        .and_then(|lic| lic.get("spdx_id"))
        .and_then(Value::as_str);
    let language = v.get("language").and_then(Value::as_str);

    Project {
        name: string_or(v, "name", NO_NAME),
        description: string_or(v, "description", NO_DESCRIPTION),
        url: string_or(v, "html_url", NO_URL),
        license: spdx_id.map(License::from_spdx).unwrap_or_default(),
        language: language.map(Language::from_github).unwrap_or_default(),
    }
}

fn string_or(v: &Value, key: &str, default: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
