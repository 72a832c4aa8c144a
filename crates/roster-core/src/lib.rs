//! roster-core — In-memory student record store.
//!
//! This crate holds the record model, the ordered store with its search,
//! sort, and statistics operations, and the configuration that shapes how
//! inserts are checked. It does no console I/O; `roster-cli` drives it.

pub mod config;
pub mod error;
pub mod model;
pub mod statistics;
pub mod store;

pub use config::{load_config_from, InsertPolicy, RosterConfig};
pub use error::{Result, RosterError};
pub use model::StudentRecord;
pub use statistics::ScoreStats;
pub use store::{RecordStore, SearchMode, SortKey};
