//! License codes derived from GitHub's `license.spdx_id`.

use serde::Serialize;
use std::fmt;

use super::table::{self, Mapping};

/// Closed set of licenses the portfolio knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum License {
    Isc,
    Mit,
    Gpl3,
    /// Missing `spdx_id` or an identifier not in [`SPDX_TABLE`].
    #[default]
    None,
}

/// SPDX identifier → license code → label. Sorted by SPDX id.
pub(crate) const SPDX_TABLE: &[Mapping<License>] = &[
    Mapping::new("GPL-3.0", License::Gpl3, "gpl3"),
    Mapping::new("ISC", License::Isc, "isc"),
    Mapping::new("MIT", License::Mit, "mit"),
];

const NONE_LABEL: &str = "none";

impl License {
    /// Resolves an SPDX identifier. Exact, case-sensitive match; anything
    /// else (including `NOASSERTION` and the empty string) is `None`.
    pub fn from_spdx(spdx_id: &str) -> License {
        table::resolve(SPDX_TABLE, spdx_id).unwrap_or(License::None)
    }

    /// Short display label used in the project badge.
    pub fn label(self) -> &'static str {
        table::label(SPDX_TABLE, self).unwrap_or(NONE_LABEL)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spdx_table_well_formed() {
        table::assert_well_formed(SPDX_TABLE);
    }

    #[test]
    fn from_spdx_known_ids() {
        assert_eq!(License::from_spdx("ISC"), License::Isc);
        assert_eq!(License::from_spdx("MIT"), License::Mit);
        assert_eq!(License::from_spdx("GPL-3.0"), License::Gpl3);
    }

    #[test]
    fn from_spdx_unknown_is_none() {
        assert_eq!(License::from_spdx(""), License::None);
        assert_eq!(License::from_spdx("NOASSERTION"), License::None);
        assert_eq!(License::from_spdx("Apache-2.0"), License::None);
        assert_eq!(License::from_spdx("mit"), License::None);
        assert_eq!(License::from_spdx("MIT "), License::None);
    }

    #[test]
    fn labels() {
        assert_eq!(License::Isc.label(), "isc");
        assert_eq!(License::Mit.label(), "mit");
        assert_eq!(License::Gpl3.label(), "gpl3");
        assert_eq!(License::None.label(), "none");
        assert_eq!(License::Gpl3.to_string(), "gpl3");
    }

    #[test]
    fn spdx_ids_round_trip_to_labels() {
        let expected = [("GPL-3.0", "gpl3"), ("ISC", "isc"), ("MIT", "mit")];
        assert_eq!(SPDX_TABLE.len(), expected.len());
        for (spdx_id, label) in expected {
            assert_eq!(License::from_spdx(spdx_id).label(), label, "{spdx_id}");
        }
    }
}
