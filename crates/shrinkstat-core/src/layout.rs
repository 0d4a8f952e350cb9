//! Where statistic files live and which areas to aggregate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::StatsError;
use crate::Result;

/// Built-in layout, embedded at compile time.
pub const DEFAULT_LAYOUT_YAML: &str = include_str!("default_layout.yaml");

/// Input layout loaded from a static configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLayout {
    /// Areas to aggregate, in report order.
    pub areas: Vec<String>,
    /// Result directories, in read order.
    pub sources: Vec<StatSource>,
}

/// One result directory. Files are read from `dir/subdir` when `subdir` is
/// set, otherwise from `dir` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSource {
    /// Result directory, relative to the root.
    pub dir: PathBuf,
    /// Optional nested directory holding the files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdir: Option<String>,
}

impl StatSource {
    /// Directory holding this source's statistic files, relative to `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let base = root.join(&self.dir);
        match &self.subdir {
            Some(subdir) => base.join(subdir),
            None => base,
        }
    }
}

impl StatLayout {
    /// Load the built-in layout.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Layout`] if the embedded YAML does not parse.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(DEFAULT_LAYOUT_YAML)
    }

    /// Parse and validate a layout from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Layout`] on malformed YAML and
    /// [`StatsError::InvalidLayout`] if validation fails.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let layout: Self = serde_yaml::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout override from a file.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Io`] if the file cannot be read, otherwise as
    /// [`StatLayout::from_yaml`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StatsError::io(path, e))?;
        Self::from_yaml(&text)
    }

    /// Replace the area list, keeping the sources.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidLayout`] if the new list is empty or has
    /// duplicates.
    pub fn with_areas(mut self, areas: Vec<String>) -> Result<Self> {
        self.areas = areas;
        self.validate()?;
        Ok(self)
    }

    /// Check that the layout names at least one area and one source, and no
    /// area twice.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidLayout`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.areas.is_empty() {
            return Err(StatsError::InvalidLayout("no areas configured".into()));
        }
        if self.sources.is_empty() {
            return Err(StatsError::InvalidLayout("no sources configured".into()));
        }
        let mut seen = HashSet::new();
        for area in &self.areas {
            if area.is_empty() {
                return Err(StatsError::InvalidLayout("empty area name".into()));
            }
            if !seen.insert(area.as_str()) {
                return Err(StatsError::InvalidLayout(format!(
                    "area '{area}' listed twice"
                )));
            }
        }
        Ok(())
    }
}
