//! FILENAME: collapse-engine/src/visibility.rs
//! Visibility Synchronizer - merges toggle results into the hidden set.
//!
//! The hidden-columns configuration is owned by the host's visibility
//! mechanism. This module never mutates it in place: it copies the
//! current set, applies one toggle's columns, and returns the full
//! replacement.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use nested_headers::RealColumn;

use crate::engine::ToggleDirection;

/// The externally owned hidden-columns configuration.
///
/// `AllVisible` is the sentinel meaning no restriction; for computation
/// it is equivalent to an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HiddenColumns {
    AllVisible,
    Hidden(FxHashSet<RealColumn>),
}

impl Default for HiddenColumns {
    fn default() -> Self {
        HiddenColumns::AllVisible
    }
}

impl HiddenColumns {
    /// Builds an explicit configuration from a column listing.
    pub fn from_columns(columns: impl IntoIterator<Item = RealColumn>) -> Self {
        HiddenColumns::Hidden(columns.into_iter().collect())
    }

    /// True iff the column is currently hidden.
    pub fn contains(&self, column: RealColumn) -> bool {
        match self {
            HiddenColumns::AllVisible => false,
            HiddenColumns::Hidden(columns) => columns.contains(&column),
        }
    }

    /// Snapshot of the hidden set (the sentinel yields an empty set).
    pub fn to_set(&self) -> FxHashSet<RealColumn> {
        match self {
            HiddenColumns::AllVisible => FxHashSet::default(),
            HiddenColumns::Hidden(columns) => columns.clone(),
        }
    }

    /// Count of hidden columns.
    pub fn hidden_count(&self) -> usize {
        match self {
            HiddenColumns::AllVisible => 0,
            HiddenColumns::Hidden(columns) => columns.len(),
        }
    }
}

/// Computes the replacement hidden-columns configuration for one toggle.
///
/// Collapse unions the affected columns (already-hidden ones are simply
/// kept, no duplicates arise from set semantics); expand removes exactly
/// the affected columns and never touches columns hidden for unrelated
/// reasons. The caller's value is copied, never mutated.
pub fn apply_toggle(
    current: &HiddenColumns,
    affected: &[RealColumn],
    direction: ToggleDirection,
) -> HiddenColumns {
    let mut columns = current.to_set();

    match direction {
        ToggleDirection::Collapse => {
            columns.extend(affected.iter().copied());
        }
        ToggleDirection::Expand => {
            for column in affected {
                columns.remove(column);
            }
        }
    }

    HiddenColumns::Hidden(columns)
}
