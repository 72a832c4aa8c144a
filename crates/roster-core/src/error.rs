//! Roster error types.
//!
//! Every variant is recoverable: the driver reports it and keeps looping.

use thiserror::Error;

/// Result alias used throughout `roster-core`.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors produced by the record store and by menu/input parsing.
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    /// The store holds no records, so there is nothing to show or aggregate.
    #[error("no records")]
    EmptyStore,

    /// A menu or sub-menu selection that does not name an option.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// An identifier already present in the store (only with duplicate rejection on).
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A score outside `[0, 100]` (only with range enforcement on).
    #[error("{field} score out of range: {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    /// Text that could not be parsed as a score.
    #[error("invalid score: {0:?}")]
    InvalidScore(String),
}
