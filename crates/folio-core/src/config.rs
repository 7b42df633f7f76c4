use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("locate config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A link in the footer navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab with `rel="noopener noreferrer"`.
    #[serde(default)]
    pub external: bool,
}

impl NavLink {
    fn new(label: &str, href: &str, external: bool) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            external,
        }
    }
}

/// Static page chrome: metadata, assets and footer (`[site]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name; the page title is `"{name} / {heading}"`.
    pub name: String,
    /// Heading shown next to the logo.
    pub heading: String,
    pub author: String,
    pub description: String,
    pub keywords: String,
    pub theme_color: String,
    pub url: String,
    pub og_image: String,
    pub logo: String,
    pub stylesheet: String,
    /// First year of the copyright range in the footer.
    pub since: i32,
    pub links: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "josegpt".to_string(),
            heading: "Projects".to_string(),
            author: "josegpt".to_string(),
            description: "software engineer".to_string(),
            keywords: "C, HTML, CSS, JSON".to_string(),
            theme_color: "#d90000".to_string(),
            url: "https://josegpt.com".to_string(),
            og_image: "/static/img/banner.png".to_string(),
            logo: "/static/img/logo.svg".to_string(),
            stylesheet: "/static/css/style.css".to_string(),
            since: 2017,
            links: vec![
                NavLink::new("Email", "mailto:josegpt27@gmail.com", false),
                NavLink::new("Sourcehut", "https://sr.ht/~josegpt/", true),
                NavLink::new("GitHub", "https://github.com/josegpt", true),
            ],
        }
    }
}

impl SiteConfig {
    pub fn title(&self) -> String {
        format!("{} / {}", self.name, self.heading)
    }
}

/// Global configuration loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// JSON cache written by the external fetch job.
    pub cache_path: PathBuf,
    /// Maximum number of projects rendered (0 = no limit).
    pub max_projects: usize,
    /// `Cache-Control: max-age` of the response in seconds (0 = no header).
    pub cache_max_age_secs: u64,
    pub site: SiteConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("/cache/projects.json"),
            max_projects: 32,
            cache_max_age_secs: 60 * 60,
            site: SiteConfig::default(),
        }
    }
}

/// `$FOLIO_CONFIG` if set, else the XDG config location.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from `path`. The file must exist.
pub fn load_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from the default location, using built-in defaults
/// when there is no file. Never writes: the CGI usually runs in a read-only
/// chroot.
pub fn load_or_default() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!("no config location ({err}); using defaults");
            return Ok(FolioConfig::default());
        }
    };
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(FolioConfig::default());
    }
    load_from(&path)
}
