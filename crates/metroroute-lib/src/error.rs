use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the metro routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Raised when the dataset header does not carry the expected columns.
    #[error("dataset has {found} columns; expected at least {expected}")]
    MissingColumns { expected: usize, found: usize },

    /// Raised when a station name or id could not be found in the network.
    #[error("unknown station: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a routing mode string cannot be parsed.
    #[error("invalid routing mode '{value}'; expected distance, fare or interchanges")]
    InvalidRouteMode { value: String },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_without_suggestions() {
        let err = Error::UnknownStation {
            name: "Nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown station: Nowhere");
    }

    #[test]
    fn unknown_station_lists_suggestions() {
        let err = Error::UnknownStation {
            name: "Rajiv Chowk".to_string(),
            suggestions: vec!["Rajiv Chowk".to_string(), "Rajouri Garden".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("Did you mean one of: 'Rajiv Chowk', 'Rajouri Garden'?"));
    }
}
