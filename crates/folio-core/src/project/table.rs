//! Static code tables: external name ↔ code ↔ display label.

/// One row: the name GitHub reports, the code it maps to, and the label
/// shown on the page for that code.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mapping<T> {
    pub from: &'static str,
    pub code: T,
    pub label: &'static str,
}

impl<T> Mapping<T> {
    pub(crate) const fn new(from: &'static str, code: T, label: &'static str) -> Self {
        Self { from, code, label }
    }
}

/// Exact, case-sensitive lookup by external name. Rows are sorted by `from`.
pub(crate) fn resolve<T: Copy>(table: &[Mapping<T>], from: &str) -> Option<T> {
    table
        .binary_search_by(|row| row.from.cmp(from))
        .ok()
        .map(|i| table[i].code)
}

/// Label of the first row carrying `code`.
pub(crate) fn label<T: Copy + PartialEq>(table: &[Mapping<T>], code: T) -> Option<&'static str> {
    table.iter().find(|row| row.code == code).map(|row| row.label)
}

#[cfg(test)]
pub(crate) fn assert_well_formed<T: Copy + PartialEq + std::fmt::Debug>(table: &[Mapping<T>]) {
    for pair in table.windows(2) {
        assert!(pair[0].from < pair[1].from, "{} !< {}", pair[0].from, pair[1].from);
    }
    for row in table {
        assert_eq!(resolve(table, row.from), Some(row.code), "{}", row.from);
        assert_eq!(label(table, row.code), Some(row.label), "{}", row.from);
    }
}
