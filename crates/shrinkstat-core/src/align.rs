//! Element-wise sums of sequences with different lengths.
//!
//! Two sequences are aligned by summing the overlapping prefix and carrying
//! the unconsumed tail of the longer one unchanged. Folding this pairwise
//! alignment over many sequences yields a sequence as long as the longest
//! input, where index `i` sums every input that reaches `i`.

use crate::error::StatsError;
use crate::Result;

/// Align two sequences: pairwise sums over the shorter length followed by
/// the tail of the longer one.
///
/// # Errors
///
/// Returns [`StatsError::Overflow`] (labelled with `area`) if a sum overflows.
pub fn align_pair(area: &str, a: &[u64], b: &[u64]) -> Result<Vec<u64>> {
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let (head, tail) = longer.split_at(shorter.len());

    let mut aligned = Vec::with_capacity(longer.len());
    for (x, y) in head.iter().zip(shorter) {
        aligned.push(x.checked_add(*y).ok_or_else(|| StatsError::overflow(area))?);
    }
    aligned.extend_from_slice(tail);
    Ok(aligned)
}

/// Left fold of [`align_pair`] over `sequences`, starting from the empty
/// sequence. No input yields an empty result.
///
/// # Errors
///
/// Returns [`StatsError::Overflow`] if any sum overflows.
pub fn aligned_sum<'a, I>(area: &str, sequences: I) -> Result<Vec<u64>>
where
    I: IntoIterator<Item = &'a [u64]>,
{
    sequences
        .into_iter()
        .try_fold(Vec::new(), |acc, next| align_pair(area, &acc, next))
}
