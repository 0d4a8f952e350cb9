//! Command implementations for shrinkstat

pub mod prune;
pub mod report;

pub use prune::PruneArgs;
pub use report::ReportArgs;
