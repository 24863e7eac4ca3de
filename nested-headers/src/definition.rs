//! FILENAME: nested-headers/src/definition.rs
//! Nested header layout - the serializable grouping definition.
//!
//! This module contains the types needed to DESCRIBE a nested column
//! header. These structures are designed to be:
//! - Serializable (for workbook/widget configuration)
//! - Immutable snapshots of the grouping the host declared
//! - The single input the geometry resolver works from

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A header row index. Level 0 is the topmost header row.
pub type HeaderLevel = usize;

/// A 0-based leaf grid column index.
pub type RealColumn = u32;

/// A section's 0-based position within its own level's grouping.
pub type LevelColumn = u32;

/// Per-level section spans for a nested column header, top level first.
///
/// Each inner list gives the colspan of every section on that header
/// row, left to right. Spans at one level never overlap or leave gaps,
/// so every level must cover the same total number of real columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLayout {
    /// Section spans per level (level 0 first).
    pub levels: Vec<Vec<u32>>,
}

impl HeaderLayout {
    /// Creates a layout after validating the grouping definition.
    pub fn new(levels: Vec<Vec<u32>>) -> Result<Self, GeometryError> {
        let layout = HeaderLayout { levels };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks every level for zero spans, a consistent total width, and
    /// cross-level alignment: a child section must never straddle its
    /// parent section's boundary, so a section's span is always the sum
    /// of its immediate children's spans.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.levels.is_empty() {
            return Err(GeometryError::EmptyLayout);
        }

        let expected = checked_width(0, &self.levels[0])?;

        for (level, spans) in self.levels.iter().enumerate() {
            if let Some(column) = spans.iter().position(|&span| span == 0) {
                return Err(GeometryError::ZeroSpan {
                    level,
                    column: column as u32,
                });
            }

            let actual = checked_width(level, spans)?;
            if actual != expected {
                return Err(GeometryError::InconsistentLevel {
                    level,
                    expected,
                    actual,
                });
            }
        }

        // Every section boundary must survive into the next-deeper
        // level; each coarser level is refined by the one below it.
        for level in 1..self.levels.len() {
            let refined = section_boundaries(&self.levels[level]);

            let mut start = 0u32;
            for &span in &self.levels[level - 1] {
                start += span;
                if !refined.contains(&start) {
                    return Err(GeometryError::MisalignedLevels {
                        level,
                        column: start,
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of header rows.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total real (leaf) column count covered by the layout.
    pub fn total_columns(&self) -> u32 {
        self.levels
            .first()
            .map(|spans| spans.iter().sum())
            .unwrap_or(0)
    }

    /// Section spans at one level.
    pub fn spans_at(&self, level: HeaderLevel) -> Result<&[u32], GeometryError> {
        self.levels
            .get(level)
            .map(Vec::as_slice)
            .ok_or(GeometryError::UndefinedLevel(level))
    }

    /// Colspan of one section.
    pub fn span_of(&self, level: HeaderLevel, column: LevelColumn) -> Result<u32, GeometryError> {
        let spans = self.spans_at(level)?;
        spans
            .get(column as usize)
            .copied()
            .ok_or(GeometryError::UndefinedSection { level, column })
    }

    /// Number of sections on one header row.
    pub fn section_count(&self, level: HeaderLevel) -> Result<usize, GeometryError> {
        Ok(self.spans_at(level)?.len())
    }
}

/// Sums one level's spans, rejecting hosts that hand over spans wide
/// enough to wrap the column range.
fn checked_width(level: usize, spans: &[u32]) -> Result<u32, GeometryError> {
    spans.iter().try_fold(0u32, |total, &span| {
        total
            .checked_add(span)
            .ok_or(GeometryError::WidthOverflow(level))
    })
}

/// Cumulative right edges of one level's sections.
fn section_boundaries(spans: &[u32]) -> FxHashSet<u32> {
    let mut boundaries = FxHashSet::default();
    let mut start = 0u32;
    for &span in spans {
        start += span;
        boundaries.insert(start);
    }
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_new_valid() {
        let layout = HeaderLayout::new(vec![vec![4, 2], vec![2, 2, 1, 1]]).unwrap();

        assert_eq!(layout.level_count(), 2);
        assert_eq!(layout.total_columns(), 6);
        assert_eq!(layout.section_count(0).unwrap(), 2);
        assert_eq!(layout.section_count(1).unwrap(), 4);
    }

    #[test]
    fn test_layout_rejects_empty() {
        assert_eq!(
            HeaderLayout::new(Vec::new()),
            Err(GeometryError::EmptyLayout)
        );
    }

    #[test]
    fn test_layout_rejects_zero_span() {
        let result = HeaderLayout::new(vec![vec![4], vec![2, 0, 2]]);

        assert_eq!(
            result,
            Err(GeometryError::ZeroSpan { level: 1, column: 1 })
        );
    }

    #[test]
    fn test_layout_rejects_inconsistent_levels() {
        let result = HeaderLayout::new(vec![vec![4], vec![2, 1]]);

        assert_eq!(
            result,
            Err(GeometryError::InconsistentLevel {
                level: 1,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_layout_rejects_straddling_child_sections() {
        // Level 1's first section crosses the boundary between the two
        // level-0 sections, so neither parent's span equals the sum of
        // its children's.
        let result = HeaderLayout::new(vec![vec![4, 2], vec![3, 3]]);

        assert_eq!(
            result,
            Err(GeometryError::MisalignedLevels { level: 1, column: 4 })
        );
    }

    #[test]
    fn test_layout_accepts_refining_levels() {
        assert!(HeaderLayout::new(vec![vec![6], vec![4, 2], vec![2, 2, 1, 1]]).is_ok());
    }

    #[test]
    fn test_layout_rejects_overflowing_spans() {
        let result = HeaderLayout::new(vec![vec![u32::MAX, 2]]);

        assert_eq!(result, Err(GeometryError::WidthOverflow(0)));
    }

    #[test]
    fn test_span_of() {
        let layout = HeaderLayout::new(vec![vec![4, 2], vec![2, 2, 1, 1]]).unwrap();

        assert_eq!(layout.span_of(0, 0).unwrap(), 4);
        assert_eq!(layout.span_of(1, 2).unwrap(), 1);
        assert_eq!(
            layout.span_of(0, 2),
            Err(GeometryError::UndefinedSection { level: 0, column: 2 })
        );
        assert_eq!(layout.span_of(3, 0), Err(GeometryError::UndefinedLevel(3)));
    }

    #[test]
    fn test_layout_serde_roundtrip() {
        let layout = HeaderLayout::new(vec![vec![4, 2], vec![2, 2, 1, 1]]).unwrap();

        let json = serde_json::to_string(&layout).unwrap();
        let restored: HeaderLayout = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, layout);
    }
}
