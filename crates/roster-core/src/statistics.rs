//! Aggregate total-score statistics.

use crate::error::{Result, RosterError};
use crate::model::StudentRecord;

/// Highest and mean total score over a set of records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    /// Number of records aggregated.
    pub count: usize,
    /// Maximum total score.
    pub max_total_score: f64,
    /// Arithmetic mean of total scores (`sum / count`).
    pub mean_total_score: f64,
}

/// Compute statistics over `records`.
///
/// Returns [`RosterError::EmptyStore`] without computing anything when
/// `records` is empty.
pub fn compute_score_stats(records: &[StudentRecord]) -> Result<ScoreStats> {
    let (first, rest) = records.split_first().ok_or(RosterError::EmptyStore)?;

    let mut max = first.total_score();
    let mut sum = first.total_score();
    for record in rest {
        let total = record.total_score();
        if total > max {
            max = total;
        }
        sum += total;
    }

    Ok(ScoreStats {
        count: records.len(),
        max_total_score: max,
        mean_total_score: sum / records.len() as f64,
    })
}
