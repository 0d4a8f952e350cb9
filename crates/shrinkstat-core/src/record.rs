//! Statistic records written by the reduction pipeline.
//!
//! One record describes one reduced test case. For every area it holds the
//! line count seen before each reduction pass (`totalLine`) and the number of
//! failing lines removed by each pass (`errorLine`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StatsError;
use crate::Result;

const TOTAL_LINE: &str = "totalLine";
const ERROR_LINE: &str = "errorLine";

/// Per-area reduction history of a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// Line count observed at each pass, keyed by area.
    pub total_line: BTreeMap<String, Vec<u64>>,
    /// Lines removed by each pass, keyed by area.
    pub error_line: BTreeMap<String, Vec<u64>>,
    #[serde(skip)]
    origin: Option<PathBuf>,
}

impl RunRecord {
    /// Empty history with one empty sequence per area in both mappings.
    pub fn with_areas<I, S>(areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for area in areas {
            let area = area.into();
            record.total_line.insert(area.clone(), Vec::new());
            record.error_line.insert(area, Vec::new());
        }
        record
    }

    /// Append one pass observation for `area`.
    pub fn record_pass(&mut self, area: &str, total_lines: u64, error_lines: u64) {
        self.total_line
            .entry(area.to_string())
            .or_default()
            .push(total_lines);
        self.error_line
            .entry(area.to_string())
            .or_default()
            .push(error_lines);
    }

    /// Attach the path this record was read from.
    #[must_use]
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin = Some(path.into());
        self
    }

    /// Path this record was read from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Human-readable origin used in error messages.
    pub fn origin_label(&self) -> String {
        match &self.origin {
            Some(path) => path.display().to_string(),
            None => "<in-memory record>".to_string(),
        }
    }

    /// `totalLine[area]`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingArea`] if the record has no entry for `area`.
    pub fn total_line(&self, area: &str) -> Result<&[u64]> {
        self.total_line
            .get(area)
            .map(Vec::as_slice)
            .ok_or_else(|| StatsError::missing_area(TOTAL_LINE, area, self.origin_label()))
    }

    /// `errorLine[area]`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingArea`] if the record has no entry for `area`.
    pub fn error_line(&self, area: &str) -> Result<&[u64]> {
        self.error_line
            .get(area)
            .map(Vec::as_slice)
            .ok_or_else(|| StatsError::missing_area(ERROR_LINE, area, self.origin_label()))
    }

    /// Line count before any reduction pass ran.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingArea`] if the area is absent and
    /// [`StatsError::EmptyTotalLine`] if its sequence is empty.
    pub fn first_total(&self, area: &str) -> Result<u64> {
        self.total_line(area)?
            .first()
            .copied()
            .ok_or_else(|| StatsError::EmptyTotalLine {
                area: area.to_string(),
                origin: self.origin_label(),
            })
    }

    /// Number of samples recorded after the first one.
    ///
    /// # Errors
    ///
    /// Same as [`RunRecord::first_total`].
    pub fn extra_samples(&self, area: &str) -> Result<u64> {
        let samples = self.total_line(area)?;
        match samples.len().checked_sub(1) {
            Some(extra) => u64::try_from(extra)
                .ok()
                .ok_or_else(|| StatsError::overflow(area)),
            None => Err(StatsError::EmptyTotalLine {
                area: area.to_string(),
                origin: self.origin_label(),
            }),
        }
    }

    /// Parse a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the text is not a valid record.
    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
