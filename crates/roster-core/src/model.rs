//! Student record type.
//!
//! A record's scores are fixed once it is built; the total score is derived
//! in the constructor and never recomputed.

use crate::error::{Result, RosterError};

/// Weight of the process (coursework) score in the total.
pub const PROCESS_WEIGHT: f64 = 0.4;
/// Weight of the final exam score in the total.
pub const FINAL_WEIGHT: f64 = 0.6;

/// Lowest score accepted when range enforcement is on.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score accepted when range enforcement is on.
pub const MAX_SCORE: f64 = 100.0;

/// One student's identifier, name, and scores.
///
/// Only [`StudentRecord::new`] builds one, so the total always matches the
/// two component scores.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    id: String,
    name: String,
    process_score: f64,
    final_score: f64,
    total_score: f64,
}

impl StudentRecord {
    /// Build a record, deriving the total score from the two components.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        process_score: f64,
        final_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            process_score,
            final_score,
            total_score: weighted_total(process_score, final_score),
        }
    }

    /// Student identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coursework score.
    pub fn process_score(&self) -> f64 {
        self.process_score
    }

    /// Final exam score.
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Weighted total, fixed at construction.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }
}

/// `0.4 * process + 0.6 * final`.
pub fn weighted_total(process_score: f64, final_score: f64) -> f64 {
    PROCESS_WEIGHT * process_score + FINAL_WEIGHT * final_score
}

/// Parse a score typed at a prompt.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` rejects, and
/// any non-finite value, is reported as [`RosterError::InvalidScore`].
pub fn parse_score(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RosterError::InvalidScore(trimmed.to_string())),
    }
}

/// Check that a score lies in `[MIN_SCORE, MAX_SCORE]`.
pub fn check_score_range(field: &'static str, value: f64) -> Result<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(RosterError::ScoreOutOfRange { field, value })
    }
}
