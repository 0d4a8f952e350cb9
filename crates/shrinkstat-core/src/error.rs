//! Error types for loading and reducing statistic records.
//!
//! Every error here is fatal for a run: the aggregator is a batch tool and a
//! malformed dataset stops it rather than producing partial statistics.

use core::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering, parsing or reducing statistic records.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A record has no sequence for the requested area.
    #[error("{origin}: missing `{field}` entry for area '{area}'")]
    MissingArea {
        /// Top-level field that lacks the area (`totalLine` or `errorLine`).
        field: &'static str,
        /// Requested area name.
        area: String,
        /// Where the record came from.
        origin: String,
    },

    /// `totalLine[area]` exists but holds no samples.
    #[error("{origin}: `totalLine` for area '{area}' is empty")]
    EmptyTotalLine {
        /// Requested area name.
        area: String,
        /// Where the record came from.
        origin: String,
    },

    /// Integer overflow while accumulating counts for an area.
    #[error("arithmetic overflow while accumulating '{area}'")]
    Overflow {
        /// Area being reduced.
        area: String,
    },

    /// A directory or file could not be read.
    #[error("cannot read {}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A statistic file is not a valid record.
    #[error("cannot parse {}", path.display())]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The layout configuration could not be parsed.
    #[error("invalid layout configuration")]
    Layout(#[from] serde_yaml::Error),

    /// The layout configuration parsed but is not usable.
    #[error("invalid layout configuration: {0}")]
    InvalidLayout(String),

    /// A text file lacks the BEGIN/END markers of an area.
    #[error("marker `{marker}` not found")]
    MissingMarker {
        /// The marker that was looked for.
        marker: String,
    },

    /// A code line cannot be unwrapped during a finalizing prune.
    #[error("line {index} of area '{area}' has no `lineNo++;` wrapper")]
    MalformedLine {
        /// Area being pruned.
        area: String,
        /// Index of the code line within the area.
        index: usize,
    },
}

impl StatsError {
    /// Create a missing-area error.
    #[must_use]
    pub fn missing_area(
        field: &'static str,
        area: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self::MissingArea {
            field,
            area: area.into(),
            origin: origin.into(),
        }
    }

    /// Create an overflow error for an area.
    #[must_use]
    pub fn overflow(area: impl Into<String>) -> Self {
        Self::Overflow { area: area.into() }
    }

    /// Create an I/O error bound to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::MissingArea { .. }
            | StatsError::EmptyTotalLine { .. }
            | StatsError::Parse { .. }
            | StatsError::MissingMarker { .. }
            | StatsError::MalformedLine { .. } => ErrorCategory::Input,
            StatsError::Overflow { .. } => ErrorCategory::Arithmetic,
            StatsError::Io { .. } => ErrorCategory::Io,
            StatsError::Layout(_) | StatsError::InvalidLayout(_) => ErrorCategory::Config,
        }
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or incomplete input data
    Input,
    /// Counter overflow
    Arithmetic,
    /// Filesystem access
    Io,
    /// Layout configuration
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "Input"),
            ErrorCategory::Arithmetic => write!(f, "Arithmetic"),
            ErrorCategory::Io => write!(f, "IO"),
            ErrorCategory::Config => write!(f, "Config"),
        }
    }
}
