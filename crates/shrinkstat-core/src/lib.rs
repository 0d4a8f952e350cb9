//! Corpus reduction statistics for fuzzing result files.
//!
//! The reduction pipeline writes one JSON record per reduced test case. Each
//! record tracks, per area (a fuzz target or event-handler category), the
//! line count seen before every reduction pass and the number of lines the
//! pass removed. This crate aggregates those records into one
//! [`AreaReport`] per area.
//!
//! # Modules
//!
//! - [`record`]: the statistic record format
//! - [`align`]: element-wise sums of sequences with different lengths
//! - [`report`]: the per-area reducer
//! - [`layout`]: which directories to read and which areas to aggregate
//! - [`discover`]: file discovery and loading
//! - [`prune`]: removing failing lines from a marked area of a test case
//!
//! # Example
//!
//! ```
//! use shrinkstat_core::{AreaReport, RunRecord};
//!
//! let records = vec![
//!     RunRecord::from_json(r#"{"totalLine": {"A": [10, 4]}, "errorLine": {"A": [6]}}"#)?,
//!     RunRecord::from_json(r#"{"totalLine": {"A": [20, 20, 5]}, "errorLine": {"A": [0, 15]}}"#)?,
//! ];
//! let report = AreaReport::compute(&records, "A")?;
//! assert_eq!(report.line_error_aligned, vec![6, 15]);
//! assert_eq!(report.line_shrink, vec![30, 24, 9]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod align;
pub mod discover;
pub mod error;
pub mod layout;
pub mod prune;
pub mod record;
pub mod report;

pub use align::{align_pair, aligned_sum};
pub use discover::{discover_files, load_layout, load_record, load_records};
pub use error::{ErrorCategory, StatsError};
pub use layout::{StatLayout, StatSource, DEFAULT_LAYOUT_YAML};
pub use prune::{count_lines, prune_area, AreaSection};
pub use record::RunRecord;
pub use report::{reduce_areas, AreaReport};

/// A specialized `Result` type for statistic operations.
pub type Result<T> = std::result::Result<T, StatsError>;
