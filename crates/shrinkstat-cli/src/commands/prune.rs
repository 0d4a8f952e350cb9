//! Prune failing lines from one area of a test case

use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

use shrinkstat_core::{count_lines, prune_area, StatsError};

use crate::error::CliError;
use crate::output;

#[derive(Args, Debug, Clone)]
pub struct PruneArgs {
    /// Test case to prune
    pub input: PathBuf,

    /// Area whose code lines are pruned
    pub area: String,

    /// Code line indices to drop (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "INDEX")]
    pub drop: Vec<usize>,

    /// Reduce kept lines to bare statements
    #[arg(long)]
    pub finalize: bool,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rewrite the input file
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,
}

/// Execute the prune command
pub fn execute(args: &PruneArgs, json: bool) -> Result<()> {
    if args.drop.is_empty() && !args.finalize {
        return Err(CliError::InvalidArgument(
            "nothing to prune: pass --drop or --finalize".into(),
        )
        .into());
    }

    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| StatsError::io(&args.input, e))?;
    let before = count_lines(&text, &args.area)?;
    let pruned = prune_area(&text, &args.area, &args.drop, args.finalize)?;
    let dropped: BTreeSet<usize> = args.drop.iter().copied().filter(|&i| i < before).collect();
    let after = before.saturating_sub(dropped.len());

    let target = if args.in_place {
        Some(args.input.clone())
    } else {
        args.output.clone()
    };
    if let Some(path) = &target {
        std::fs::write(path, &pruned).map_err(|e| StatsError::io(path, e))?;
        info!(area = %args.area, before, after, path = %path.display(), "test case pruned");
    }

    output::print_prune_result(&args.area, before, after, target.as_deref(), &pruned, json);
    Ok(())
}
