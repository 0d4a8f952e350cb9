//! Per-area statistics report

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use shrinkstat_core::{load_layout, reduce_areas, StatLayout};

use crate::output;

/// Where to read statistics from and which areas to report.
///
/// Declared once on the top-level command and marked global, so the flags
/// are accepted on either side of the `report` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Directory containing the result folders
    #[arg(long, global = true, env = "SHRINKSTAT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Layout file overriding the built-in result layout
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Area to aggregate; repeat to list several (replaces the layout's areas)
    #[arg(long = "area", global = true, value_name = "AREA")]
    pub areas: Vec<String>,
}

/// Resolve the layout from the config file or the built-in default, then
/// apply any area override.
pub fn resolve_layout(args: &ReportArgs) -> Result<StatLayout> {
    let layout = match &args.config {
        Some(path) => StatLayout::load(path)?,
        None => StatLayout::builtin()?,
    };
    if args.areas.is_empty() {
        Ok(layout)
    } else {
        Ok(layout.with_areas(args.areas.clone())?)
    }
}

/// Execute the report command
pub fn execute(args: &ReportArgs, json: bool) -> Result<()> {
    let layout = resolve_layout(args)?;
    info!(
        root = %args.root.display(),
        areas = layout.areas.len(),
        sources = layout.sources.len(),
        "aggregating statistics"
    );

    let records = load_layout(&args.root, &layout)?;
    if records.is_empty() {
        warn!("no statistic files found; every area reports zero documents");
    }

    let reports = reduce_areas(&records, &layout.areas)?;
    output::print_reports(&reports, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn args() -> ReportArgs {
        ReportArgs {
            root: PathBuf::from("."),
            config: None,
            areas: Vec::new(),
        }
    }

    #[test]
    fn default_layout_is_builtin() -> TestResult {
        assert_eq!(resolve_layout(&args())?, StatLayout::builtin()?);
        Ok(())
    }

    #[test]
    fn area_override_replaces_list() -> TestResult {
        let mut args = args();
        args.areas = vec!["eventhandler2".into()];
        let layout = resolve_layout(&args)?;
        assert_eq!(layout.areas, ["eventhandler2"]);
        assert_eq!(layout.sources, StatLayout::builtin()?.sources);
        Ok(())
    }

    #[test]
    fn duplicate_area_override_is_rejected() {
        let mut args = args();
        args.areas = vec!["a".into(), "a".into()];
        assert!(resolve_layout(&args).is_err());
    }
}
