//! FILENAME: collapse-engine/src/state.rs
//! Collapsed-state store - sparse record of collapsed header sections.
//!
//! Absence means expanded: the store only records departures from the
//! default expanded state, so "never touched" and "explicitly expanded"
//! are the same thing. Collapsed is a plain presence check, never a
//! nullable flag.

use rustc_hash::{FxHashMap, FxHashSet};

use nested_headers::{HeaderLevel, LevelColumn};

/// Sparse per-level record of which header sections are collapsed.
///
/// Single source of truth for indicator rendering and hit-testing. The
/// store performs no coordinate validation; that is the geometry
/// resolver's job. Created empty at session start and discarded with
/// the widget session.
#[derive(Debug, Clone, Default)]
pub struct CollapsedSections {
    levels: FxHashMap<HeaderLevel, FxHashSet<LevelColumn>>,
}

impl CollapsedSections {
    /// Creates an empty store (every section expanded).
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the section is explicitly marked collapsed.
    pub fn is_collapsed(&self, level: HeaderLevel, column: LevelColumn) -> bool {
        self.levels
            .get(&level)
            .map_or(false, |columns| columns.contains(&column))
    }

    /// Marks a section collapsed. Idempotent.
    pub fn set_collapsed(&mut self, level: HeaderLevel, column: LevelColumn) {
        self.levels.entry(level).or_default().insert(column);
    }

    /// Marks a section expanded by removing its entry rather than
    /// storing false. Idempotent; emptied per-level sets are pruned to
    /// keep the store sparse.
    pub fn set_expanded(&mut self, level: HeaderLevel, column: LevelColumn) {
        if let Some(columns) = self.levels.get_mut(&level) {
            columns.remove(&column);
            if columns.is_empty() {
                self.levels.remove(&level);
            }
        }
    }

    /// True when no section is collapsed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Count of collapsed sections across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(|columns| columns.len()).sum()
    }

    /// Drops every collapsed mark (widget session restart).
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
