//! In-memory record store.
//!
//! Records are kept in a `Vec` in insertion order until a sort reorders
//! them. Searches never copy records; they return references in store order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::config::InsertPolicy;
use crate::error::{Result, RosterError};
use crate::model::{check_score_range, StudentRecord};
use crate::statistics::{compute_score_stats, ScoreStats};

/// Which field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Exact match on the identifier.
    ById,
    /// Case-sensitive substring match on the name.
    ByName,
}

impl SearchMode {
    /// Whether `record` matches `query` under this mode.
    pub fn matches(self, record: &StudentRecord, query: &str) -> bool {
        match self {
            SearchMode::ById => record.id() == query,
            SearchMode::ByName => record.name().contains(query),
        }
    }
}

impl FromStr for SearchMode {
    type Err = RosterError;

    /// Parses the search sub-menu selection: `1` by id, `2` by name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<u32>() {
            Ok(1) => Ok(SearchMode::ById),
            Ok(2) => Ok(SearchMode::ByName),
            _ => Err(RosterError::InvalidChoice(input.to_string())),
        }
    }
}

/// Key a sort orders records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending lexicographic by id.
    Id,
    /// Ascending lexicographic by name.
    Name,
    /// Descending by total score.
    TotalScoreDescending,
}

/// Pure comparison between two records.
pub type Comparator = fn(&StudentRecord, &StudentRecord) -> Ordering;

impl SortKey {
    /// The comparison function this key sorts with.
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Id => by_id,
            SortKey::Name => by_name,
            SortKey::TotalScoreDescending => by_total_descending,
        }
    }
}

fn by_id(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    a.id().cmp(b.id())
}

fn by_name(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    a.name().cmp(b.name())
}

fn by_total_descending(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    b.total_score().total_cmp(&a.total_score())
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::Name => write!(f, "name"),
            SortKey::TotalScoreDescending => write!(f, "total score (descending)"),
        }
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    /// Parses the sort sub-menu selection: `1` id, `2` name, `3` total score.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<u32>() {
            Ok(1) => Ok(SortKey::Id),
            Ok(2) => Ok(SortKey::Name),
            Ok(3) => Ok(SortKey::TotalScoreDescending),
            _ => Err(RosterError::InvalidChoice(input.to_string())),
        }
    }
}

/// Ordered, in-memory collection of student records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    policy: InsertPolicy,
}

impl RecordStore {
    /// Create an empty store that accepts every insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that applies `policy` on insert.
    pub fn with_policy(policy: InsertPolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    /// Append a new record to the end of the store.
    ///
    /// With the default policy this never fails. A rejected insert leaves the
    /// store unchanged.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        process_score: f64,
        final_score: f64,
    ) -> Result<&StudentRecord> {
        let id = id.into();

        if self.policy.enforce_score_range {
            for (field, value) in [("process", process_score), ("final", final_score)] {
                if let Err(e) = check_score_range(field, value) {
                    tracing::warn!(%id, field, value, "rejected out-of-range score");
                    return Err(e);
                }
            }
        }
        if self.policy.reject_duplicate_ids && self.contains_id(&id) {
            tracing::warn!(%id, "rejected duplicate id");
            return Err(RosterError::DuplicateId(id));
        }

        let record = StudentRecord::new(id, name, process_score, final_score);
        tracing::debug!(
            id = record.id(),
            total = record.total_score(),
            count = self.records.len() + 1,
            "inserted record"
        );
        self.records.push(record);

        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// All records in current order.
    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Records matching `query` under `mode`, in store order.
    pub fn search(&self, mode: SearchMode, query: &str) -> Vec<&StudentRecord> {
        let matches: Vec<&StudentRecord> = self
            .records
            .iter()
            .filter(|r| mode.matches(r, query))
            .collect();
        tracing::debug!(?mode, query, hits = matches.len(), "search");
        matches
    }

    /// Stable in-place sort by `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        self.records.sort_by(key.comparator());
        tracing::debug!(%key, count = self.records.len(), "sorted records");
    }

    /// Highest and mean total score, or [`RosterError::EmptyStore`].
    pub fn stats(&self) -> Result<ScoreStats> {
        compute_score_stats(&self.records)
    }

    /// Whether any record has this id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The insert policy this store applies.
    pub fn policy(&self) -> InsertPolicy {
        self.policy
    }
}
