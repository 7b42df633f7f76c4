//! Language codes derived from GitHub's `language` field.

use serde::Serialize;
use std::fmt;

use super::table::{self, Mapping};

/// Closed set of languages the portfolio knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Html,
    Shell,
    Makefile,
    #[serde(rename = "elisp")]
    EmacsLisp,
    #[serde(rename = "js")]
    JavaScript,
    #[default]
    Unknown,
}

/// GitHub language name → language code → label. Sorted by name (byte
/// order). Vue repositories are shown as JavaScript.
pub(crate) const GITHUB_TABLE: &[Mapping<Language>] = &[
    Mapping::new("C", Language::C, "c"),
    Mapping::new("Emacs Lisp", Language::EmacsLisp, "elisp"),
    Mapping::new("HTML", Language::Html, "html"),
    Mapping::new("JavaScript", Language::JavaScript, "js"),
    Mapping::new("Makefile", Language::Makefile, "makefile"),
    Mapping::new("Shell", Language::Shell, "shell"),
    Mapping::new("Vue", Language::JavaScript, "js"),
];

const UNKNOWN_LABEL: &str = "unknown";

impl Language {
    /// Resolves a GitHub language name. Exact, case-sensitive match;
    /// anything else is `Unknown`.
    pub fn from_github(name: &str) -> Language {
        table::resolve(GITHUB_TABLE, name).unwrap_or(Language::Unknown)
    }

    pub fn label(self) -> &'static str {
        table::label(GITHUB_TABLE, self).unwrap_or(UNKNOWN_LABEL)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_table_well_formed() {
        table::assert_well_formed(GITHUB_TABLE);
    }

    #[test]
    fn from_github_known_names() {
        assert_eq!(Language::from_github("C"), Language::C);
        assert_eq!(Language::from_github("HTML"), Language::Html);
        assert_eq!(Language::from_github("Shell"), Language::Shell);
        assert_eq!(Language::from_github("Makefile"), Language::Makefile);
        assert_eq!(Language::from_github("Emacs Lisp"), Language::EmacsLisp);
        assert_eq!(Language::from_github("JavaScript"), Language::JavaScript);
        assert_eq!(Language::from_github("Vue"), Language::JavaScript);
    }

    #[test]
    fn from_github_unknown() {
        assert_eq!(Language::from_github(""), Language::Unknown);
        assert_eq!(Language::from_github("Rust"), Language::Unknown);
        assert_eq!(Language::from_github("html"), Language::Unknown);
        assert_eq!(Language::from_github("EmacsLisp"), Language::Unknown);
    }

    #[test]
    fn labels() {
        let all = [
            (Language::C, "c"),
            (Language::Html, "html"),
            (Language::Shell, "shell"),
            (Language::Makefile, "makefile"),
            (Language::EmacsLisp, "elisp"),
            (Language::JavaScript, "js"),
            (Language::Unknown, "unknown"),
        ];
        for (lang, label) in all {
            assert_eq!(lang.label(), label);
            assert_eq!(lang.to_string(), label);
        }
    }

    #[test]
    fn github_names_round_trip_to_labels() {
        let expected = [
            ("C", "c"),
            ("Emacs Lisp", "elisp"),
            ("HTML", "html"),
            ("JavaScript", "js"),
            ("Makefile", "makefile"),
            ("Shell", "shell"),
            ("Vue", "js"),
        ];
        assert_eq!(GITHUB_TABLE.len(), expected.len());
        for (name, label) in expected {
            assert_eq!(Language::from_github(name).label(), label, "{name}");
        }
    }
}
