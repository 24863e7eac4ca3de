//! FILENAME: collapse-engine/src/engine.rs
//! Section Toggle Engine - plans and commits a collapse or expand.
//!
//! A toggle resolves geometry first: the target section and every
//! descendant grouped section are walked in a pure planning pass that
//! can still fail, and only a fully resolved plan is committed to the
//! store. A failed toggle never leaves a partial update behind.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use nested_headers::{GeometryError, HeaderLayout, HeaderLevel, LevelColumn, RealColumn};

use crate::state::CollapsedSections;

/// Direction of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleDirection {
    Collapse,
    Expand,
}

/// Result of one toggle: the real columns to hide or reveal.
///
/// An empty outcome means the toggle was a no-op (single-column section,
/// or the section was already in the requested state); the external
/// hidden-columns configuration must then not be touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    /// Direction that was applied.
    pub direction: ToggleDirection,
    /// Affected real columns, sorted ascending. Never includes the
    /// toggled section's own leading column.
    pub affected_columns: Vec<RealColumn>,
}

impl ToggleOutcome {
    fn noop(direction: ToggleDirection) -> Self {
        ToggleOutcome {
            direction,
            affected_columns: Vec::new(),
        }
    }

    /// True when the toggle changed nothing.
    pub fn is_noop(&self) -> bool {
        self.affected_columns.is_empty()
    }
}

/// One planned state write: (level, column at that level).
type Mark = (HeaderLevel, LevelColumn);

/// Applies a collapse or expand to a section and every nested descendant.
///
/// The cascade is symmetric: both directions re-mark all descendant
/// grouped sections, so expanding a parent is the exact inverse of
/// collapsing it. Descendant ranges are subsets of the parent's, so the
/// accumulated column set for a span-N parent is its whole trailing
/// range `[start+1, start+N-1]`.
pub fn toggle(
    layout: &HeaderLayout,
    state: &mut CollapsedSections,
    level: HeaderLevel,
    column: LevelColumn,
    direction: ToggleDirection,
) -> Result<ToggleOutcome, GeometryError> {
    // Geometry comes first; an undefined coordinate aborts here with
    // the store untouched.
    let (_, span) = layout.real_column_range(level, column)?;

    // A single-column header has nothing to collapse.
    if span <= 1 {
        return Ok(ToggleOutcome::noop(direction));
    }

    // Already in the requested state: leave the hidden set alone.
    let collapsed = state.is_collapsed(level, column);
    match direction {
        ToggleDirection::Collapse if collapsed => return Ok(ToggleOutcome::noop(direction)),
        ToggleDirection::Expand if !collapsed => return Ok(ToggleOutcome::noop(direction)),
        _ => {}
    }

    let mut marks: SmallVec<[Mark; 8]> = SmallVec::new();
    let mut affected: FxHashSet<RealColumn> = FxHashSet::default();
    plan_section(layout, level, column, &mut marks, &mut affected)?;

    // The plan resolved fully; commit every mark.
    for (mark_level, mark_column) in marks {
        match direction {
            ToggleDirection::Collapse => state.set_collapsed(mark_level, mark_column),
            ToggleDirection::Expand => state.set_expanded(mark_level, mark_column),
        }
    }

    let mut affected_columns: Vec<RealColumn> = affected.into_iter().collect();
    affected_columns.sort_unstable();

    Ok(ToggleOutcome {
        direction,
        affected_columns,
    })
}

/// Recursive planning walk over a grouped section and its descendants.
/// Pure: only the plan accumulators are written.
fn plan_section(
    layout: &HeaderLayout,
    level: HeaderLevel,
    column: LevelColumn,
    marks: &mut SmallVec<[Mark; 8]>,
    affected: &mut FxHashSet<RealColumn>,
) -> Result<(), GeometryError> {
    let (start, span) = layout.real_column_range(level, column)?;

    marks.push((level, column));

    // All real columns in the span except its own leading column.
    for real in start + 1..start + span {
        affected.insert(real);
    }

    if level + 1 >= layout.level_count() {
        return Ok(());
    }

    // Visit each child section once, stepping by its span. Children
    // spanning a single column are leaves and are never marked.
    let mut real = start;
    while real < start + span {
        let child = layout.child_coordinate(level, real)?;
        let (child_start, child_span) = layout.real_column_range(level + 1, child)?;

        if child_span > 1 {
            plan_section(layout, level + 1, child, marks, affected)?;
        }

        real = child_start + child_span;
    }

    Ok(())
}
