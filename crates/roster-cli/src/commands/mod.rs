//! One module per menu action.
//!
//! Each `execute` prompts for what it needs, calls into the store, and
//! renders the outcome. End of input mid-command abandons the command
//! without touching the store.

pub mod add;
pub mod display;
pub mod search;
pub mod sort;
pub mod stats;
