//! Per-area reduction statistics.
//!
//! An [`AreaReport`] is a pure function of the record set and the area name.
//! It is recomputed for every invocation and never persisted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::align::aligned_sum;
use crate::error::StatsError;
use crate::record::RunRecord;
use crate::Result;

/// Summary of how one area's corpus shrank over successive passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaReport {
    /// Area name.
    pub area: String,
    /// Number of records aggregated.
    pub total_documents: usize,
    /// Records whose first `totalLine` sample is nonzero.
    pub nonzero_documents: usize,
    /// Sum over records of the samples recorded after the first one.
    pub extra_samples: u64,
    /// `extra_samples / total_documents`, or 0 when either is zero.
    pub average_reduce: f64,
    /// Sum of the first `totalLine` sample across records.
    pub line_first: u64,
    /// Remaining line count after each pass, starting at `line_first`.
    pub line_shrink: Vec<i64>,
    /// Per-pass `errorLine` sums aligned across records.
    pub line_error_aligned: Vec<u64>,
}

impl AreaReport {
    /// Reduce `records` for `area`.
    ///
    /// An empty record set yields a report of zeros with `line_shrink = [0]`.
    ///
    /// # Errors
    ///
    /// Fails on the first record that lacks the area or has an empty
    /// `totalLine` sequence, and on integer overflow.
    pub fn compute(records: &[RunRecord], area: &str) -> Result<Self> {
        let total_documents = records.len();
        let nonzero_documents = nonzero_documents(records, area)?;
        let extra_samples = extra_samples(records, area)?;
        let average_reduce = average_reduce(extra_samples, total_documents);
        let line_first = line_first(records, area)?;
        let line_error_aligned = aligned_sum(
            area,
            records
                .iter()
                .map(|record| record.error_line(area))
                .collect::<Result<Vec<_>>>()?,
        )?;
        let line_shrink = line_shrink(area, line_first, &line_error_aligned)?;

        debug!(
            area,
            total_documents,
            nonzero_documents,
            passes = line_error_aligned.len(),
            "area reduced"
        );

        Ok(Self {
            area: area.to_string(),
            total_documents,
            nonzero_documents,
            extra_samples,
            average_reduce,
            line_first,
            line_shrink,
            line_error_aligned,
        })
    }

    /// Line count left after every pass has run.
    pub fn final_lines(&self) -> i64 {
        self.line_shrink.last().copied().unwrap_or_default()
    }
}

/// Reduce every area in order, stopping at the first failure.
///
/// # Errors
///
/// Propagates the first [`AreaReport::compute`] error; no report is returned
/// for any area in that case.
pub fn reduce_areas<S: AsRef<str>>(
    records: &[RunRecord],
    areas: &[S],
) -> Result<Vec<AreaReport>> {
    areas
        .iter()
        .map(|area| AreaReport::compute(records, area.as_ref()))
        .collect()
}

/// Count records whose first `totalLine` sample is nonzero.
///
/// # Errors
///
/// See [`RunRecord::first_total`].
pub fn nonzero_documents(records: &[RunRecord], area: &str) -> Result<usize> {
    let mut count = 0usize;
    for record in records {
        if record.first_total(area)? != 0 {
            count = count.saturating_add(1);
        }
    }
    Ok(count)
}

/// Sum of post-first samples across records. Records with a single sample
/// contribute zero, so a set where no record has extras sums to zero.
///
/// # Errors
///
/// See [`RunRecord::extra_samples`]; also fails on overflow.
pub fn extra_samples(records: &[RunRecord], area: &str) -> Result<u64> {
    records.iter().try_fold(0u64, |sum, record| {
        sum.checked_add(record.extra_samples(area)?)
            .ok_or_else(|| StatsError::overflow(area))
    })
}

/// Guarded ratio of extra samples to documents.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "counts stay far below 2^52; the ratio is only reported"
)]
pub fn average_reduce(extra_samples: u64, total_documents: usize) -> f64 {
    if extra_samples == 0 || total_documents == 0 {
        0.0
    } else {
        extra_samples as f64 / total_documents as f64
    }
}

/// Sum of the first `totalLine` sample across records.
///
/// # Errors
///
/// See [`RunRecord::first_total`]; also fails on overflow.
pub fn line_first(records: &[RunRecord], area: &str) -> Result<u64> {
    records.iter().try_fold(0u64, |sum, record| {
        sum.checked_add(record.first_total(area)?)
            .ok_or_else(|| StatsError::overflow(area))
    })
}

/// Reconstruct the remaining line count after each pass from the per-pass
/// deltas. The result has one more element than `errors`.
///
/// # Errors
///
/// Returns [`StatsError::Overflow`] if the running sum or a shrink value
/// leaves the representable range.
pub fn line_shrink(area: &str, line_first: u64, errors: &[u64]) -> Result<Vec<i64>> {
    let first = i64::try_from(line_first)
        .ok()
        .ok_or_else(|| StatsError::overflow(area))?;

    let mut shrink = Vec::with_capacity(errors.len().saturating_add(1));
    shrink.push(first);

    let mut removed = 0i64;
    for &delta in errors {
        let delta = i64::try_from(delta)
            .ok()
            .ok_or_else(|| StatsError::overflow(area))?;
        removed = removed
            .checked_add(delta)
            .ok_or_else(|| StatsError::overflow(area))?;
        shrink.push(
            first
                .checked_sub(removed)
                .ok_or_else(|| StatsError::overflow(area))?,
        );
    }
    Ok(shrink)
}
