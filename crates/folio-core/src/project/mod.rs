//! Project records shown on the portfolio page.
//!
//! A [`Project`] is built from one element of the GitHub repository cache.
//! Every field is always populated: missing strings become sentinels and
//! unrecognised license/language names map to [`License::None`] and
//! [`Language::Unknown`].

mod language;
mod license;
mod table;

pub use language::Language;
pub use license::License;

use serde::Serialize;

pub const NO_NAME: &str = "noname";
pub const NO_DESCRIPTION: &str = "nodescription";
pub const NO_URL: &str = "nourl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub license: License,
    pub language: Language,
}

impl Project {
    /// `language@license`, e.g. `c@isc`.
    pub fn badge(&self) -> String {
        format!("{}@{}", self.language, self.license)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: NO_NAME.to_string(),
            description: NO_DESCRIPTION.to_string(),
            url: NO_URL.to_string(),
            license: License::None,
            language: Language::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_uses_sentinels() {
        let p = Project::default();
        assert_eq!(p.name, "noname");
        assert_eq!(p.description, "nodescription");
        assert_eq!(p.url, "nourl");
        assert_eq!(p.license, License::None);
        assert_eq!(p.language, Language::Unknown);
        assert_eq!(p.badge(), "unknown@none");
    }

    #[test]
    fn badge_joins_labels() {
        let p = Project {
            language: Language::EmacsLisp,
            license: License::Gpl3,
            ..Project::default()
        };
        assert_eq!(p.badge(), "elisp@gpl3");
    }

    #[test]
    fn serializes_codes_as_labels() {
        let p = Project {
            name: "dwm".to_string(),
            language: Language::C,
            license: License::Mit,
            ..Project::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["name"], "dwm");
        assert_eq!(json["language"], "c");
        assert_eq!(json["license"], "mit");
    }
}
