//! Statistic file discovery and loading.
//!
//! Files are read one at a time: each is opened, read fully and released
//! before the next. Any failure aborts the run.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::StatsError;
use crate::layout::StatLayout;
use crate::record::RunRecord;
use crate::Result;

/// List the statistic files of every source in layout order. Within a
/// directory, files are sorted by name; subdirectories are skipped.
///
/// # Errors
///
/// Returns [`StatsError::Io`] if a source directory is missing or cannot be
/// listed.
pub fn discover_files(root: &Path, layout: &StatLayout) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in &layout.sources {
        let dir = source.resolve(root);
        let found = list_dir(&dir)?;
        debug!(dir = %dir.display(), files = found.len(), "statistic directory listed");
        files.extend(found);
    }
    Ok(files)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| StatsError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StatsError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| StatsError::io(&path, e))?;
        if file_type.is_dir() {
            trace!(path = %path.display(), "skipping subdirectory");
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Read and parse one statistic file, tagging the record with its path.
///
/// # Errors
///
/// Returns [`StatsError::Io`] if the file cannot be read and
/// [`StatsError::Parse`] if it is not a valid record.
pub fn load_record(path: &Path) -> Result<RunRecord> {
    trace!(path = %path.display(), "loading statistic file");
    let text = std::fs::read_to_string(path).map_err(|e| StatsError::io(path, e))?;
    let record = RunRecord::from_json(&text).map_err(|source| StatsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(record.with_origin(path))
}

/// Load every file in order, stopping at the first failure.
///
/// # Errors
///
/// See [`load_record`].
pub fn load_records(paths: &[PathBuf]) -> Result<Vec<RunRecord>> {
    paths.iter().map(|path| load_record(path)).collect()
}

/// Discover and load every statistic file of `layout` under `root`.
///
/// # Errors
///
/// See [`discover_files`] and [`load_record`].
pub fn load_layout(root: &Path, layout: &StatLayout) -> Result<Vec<RunRecord>> {
    let files = discover_files(root, layout)?;
    let records = load_records(&files)?;
    debug!(records = records.len(), "statistic files loaded");
    Ok(records)
}
