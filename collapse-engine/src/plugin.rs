//! FILENAME: collapse-engine/src/plugin.rs
//! Host-facing facade wiring the toggle engine to its collaborators.
//!
//! The rendering layer queries collapsed state and indicator rows here
//! and delivers raw toggle requests when the user interacts with an
//! indicator. The hidden-columns configuration stays owned by the host
//! behind [`VisibilityMechanism`].

use serde::{Deserialize, Serialize};

use nested_headers::{HeaderLayout, HeaderLevel, LevelColumn, RealColumn};

use crate::engine::{self, ToggleDirection, ToggleOutcome};
use crate::error::CollapseError;
use crate::state::CollapsedSections;
use crate::visibility::{apply_toggle, HiddenColumns};

/// The externally owned column-hiding mechanism.
///
/// The core never partially mutates the hidden set: it reads a
/// snapshot, computes a full replacement, and hands it back.
pub trait VisibilityMechanism {
    /// Current hidden-columns configuration.
    fn hidden_columns(&self) -> HiddenColumns;

    /// Replaces the configuration wholesale.
    fn replace_hidden_columns(&mut self, columns: HiddenColumns);
}

/// Renderable description of one header section at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionIndicator {
    /// Header level the section sits on.
    pub level: HeaderLevel,
    /// Section index within that level.
    pub column: LevelColumn,
    /// Leading real column of the span.
    pub start_column: RealColumn,
    /// Count of real columns the section covers.
    pub span: u32,
    /// Rendered position of the leading column: the real index shifted
    /// left by the hidden columns preceding the section.
    pub rendered_position: u32,
    /// Only sections spanning more than one column show an indicator.
    pub collapsible: bool,
    pub is_collapsed: bool,
}

/// Collapsible column headers for a grid widget.
///
/// Owns the collapsed-state store for the widget session and keeps it
/// in sync with the host's hidden-columns configuration. Requires both
/// a nested header layout and a visibility mechanism; without either
/// the feature is disabled and no toggle operations are registered.
pub struct CollapsibleColumns<V: VisibilityMechanism> {
    layout: HeaderLayout,
    sections: CollapsedSections,
    visibility: V,
}

impl<V: VisibilityMechanism> CollapsibleColumns<V> {
    /// Wires the feature up, validating the layout and checking that
    /// both collaborators are present.
    pub fn new(layout: Option<HeaderLayout>, visibility: Option<V>) -> Result<Self, CollapseError> {
        let layout = match layout {
            Some(layout) => layout,
            None => {
                log::warn!("collapsible headers need a nested header layout; feature disabled");
                return Err(CollapseError::DependencyMissing("nested header layout"));
            }
        };

        let visibility = match visibility {
            Some(visibility) => visibility,
            None => {
                log::warn!("collapsible headers need a column visibility mechanism; feature disabled");
                return Err(CollapseError::DependencyMissing(
                    "column visibility mechanism",
                ));
            }
        };

        layout.validate()?;

        Ok(CollapsibleColumns {
            layout,
            sections: CollapsedSections::new(),
            visibility,
        })
    }

    /// True iff the section is marked collapsed (indicator rendering).
    pub fn is_collapsed(&self, level: HeaderLevel, column: LevelColumn) -> bool {
        self.sections.is_collapsed(level, column)
    }

    /// Applies a toggle request and synchronizes column visibility.
    ///
    /// No-op toggles (single-column section, section already in the
    /// requested state) leave the hidden-columns configuration
    /// untouched; the mechanism is not even called.
    pub fn toggle(
        &mut self,
        level: HeaderLevel,
        column: LevelColumn,
        direction: ToggleDirection,
    ) -> Result<ToggleOutcome, CollapseError> {
        let outcome = engine::toggle(&self.layout, &mut self.sections, level, column, direction)?;

        if !outcome.is_noop() {
            let current = self.visibility.hidden_columns();
            let replacement = apply_toggle(&current, &outcome.affected_columns, direction);
            self.visibility.replace_hidden_columns(replacement);
        }

        Ok(outcome)
    }

    /// Toggles in the direction implied by the indicator's displayed
    /// state: a collapsed section expands, anything else collapses.
    pub fn toggle_indicator(
        &mut self,
        level: HeaderLevel,
        column: LevelColumn,
    ) -> Result<ToggleOutcome, CollapseError> {
        let direction = if self.sections.is_collapsed(level, column) {
            ToggleDirection::Expand
        } else {
            ToggleDirection::Collapse
        };

        self.toggle(level, column, direction)
    }

    /// Indicator rows for one header level. Rendered positions are
    /// recomputed from the current hidden set on every call.
    pub fn indicators(&self, level: HeaderLevel) -> Result<Vec<SectionIndicator>, CollapseError> {
        let hidden = self.visibility.hidden_columns().to_set();
        let count = self.layout.section_count(level)?;

        let mut rows = Vec::with_capacity(count);
        for column in 0..count as u32 {
            let (start_column, span) = self.layout.real_column_range(level, column)?;
            let offset = self.layout.hidden_offset(start_column, level, &hidden)?;

            rows.push(SectionIndicator {
                level,
                column,
                start_column,
                span,
                rendered_position: start_column - offset,
                collapsible: span > 1,
                is_collapsed: self.sections.is_collapsed(level, column),
            });
        }

        Ok(rows)
    }

    /// Header layout in use.
    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    /// Host visibility mechanism, for inspection.
    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    /// Clears every collapsed mark for a fresh widget session. The
    /// hidden-columns configuration is owned by the host and is not
    /// touched here.
    pub fn reset(&mut self) {
        self.sections.clear();
    }
}
