//! Helpers for writing project cache files.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `json` to a temp file that lives as long as the returned handle.
pub fn cache_file(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

/// A GitHub-shaped repository object.
pub fn repo(name: &str, language: &str, spdx_id: &str) -> String {
    format!(
        r#"{{"name": "{name}", "description": "{name} desc", "html_url": "https://github.com/josegpt/{name}",
            "language": "{language}", "license": {{"key": "x", "spdx_id": "{spdx_id}"}}}}"#
    )
}
