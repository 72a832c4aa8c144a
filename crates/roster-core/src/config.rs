//! Roster configuration.
//!
//! Nothing is read from disk unless a path is passed explicitly.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level roster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Refuse to insert a record whose id is already in the store.
    pub reject_duplicate_ids: bool,
    /// Refuse scores outside `[0, 100]`.
    pub enforce_score_range: bool,
}

impl RosterConfig {
    /// Insert policy derived from this configuration.
    pub fn insert_policy(&self) -> InsertPolicy {
        InsertPolicy {
            reject_duplicate_ids: self.reject_duplicate_ids,
            enforce_score_range: self.enforce_score_range,
        }
    }
}

/// Checks applied by [`RecordStore::insert`](crate::store::RecordStore::insert).
///
/// The default policy accepts everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertPolicy {
    pub reject_duplicate_ids: bool,
    pub enforce_score_range: bool,
}

/// Load config from an explicit path, or return defaults when none is given.
pub fn load_config_from(path: Option<&Path>) -> Result<RosterConfig> {
    let Some(path) = path else {
        return Ok(RosterConfig::default());
    };

    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<RosterConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    tracing::debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}
