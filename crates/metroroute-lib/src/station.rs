use std::collections::HashMap;

use serde::Serialize;

/// Numeric identifier for a station.
pub type StationId = i64;

/// Station table keyed by identifier, as produced by the dataset loader.
pub type StationTable = HashMap<StationId, Station>;

/// One station on one line. A physical station served by several lines
/// appears once per line, with the same display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Cumulative distance in km from the origin of `line`.
    pub distance_from_line_start: f64,
    pub line: String,
    pub opening_date: String,
    pub layout: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    /// Display name with any bracketed annotation and trailing whitespace removed.
    ///
    /// Stations sharing a canonical name are joined by interchange edges.
    pub fn canonical_name(&self) -> &str {
        canonical_name(&self.name)
    }
}

/// Strip everything from the first `[` onwards, then trailing whitespace.
pub fn canonical_name(name: &str) -> &str {
    let base = match name.find('[') {
        Some(pos) => &name[..pos],
        None => name,
    };
    base.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_strips_bracketed_suffix() {
        assert_eq!(canonical_name("Kashmere Gate [Conn: Red]"), "Kashmere Gate");
        assert_eq!(canonical_name("Rajiv Chowk [Conn: Yellow] "), "Rajiv Chowk");
    }

    #[test]
    fn canonical_name_trims_trailing_whitespace_only() {
        assert_eq!(canonical_name("  Dwarka \t\r\n"), "  Dwarka");
        assert_eq!(canonical_name("Dwarka"), "Dwarka");
    }

    #[test]
    fn canonical_name_of_bracket_only_name_is_empty() {
        assert_eq!(canonical_name("[unnamed]"), "");
    }
}
