//! FILENAME: nested-headers/src/geometry.rs
//! Header Geometry Resolver - pure coordinate mapping between levels.
//!
//! The collapse feature recurses over data, not rendered elements: every
//! mapping here is computed from the layout definition alone, so the
//! toggle logic can be exercised without any rendering layer present.

use rustc_hash::FxHashSet;

use crate::definition::{HeaderLayout, HeaderLevel, LevelColumn, RealColumn};
use crate::error::GeometryError;

impl HeaderLayout {
    /// Resolves a section's leading real column and its colspan.
    pub fn real_column_range(
        &self,
        level: HeaderLevel,
        column: LevelColumn,
    ) -> Result<(RealColumn, u32), GeometryError> {
        let spans = self.spans_at(level)?;
        let index = column as usize;

        if index >= spans.len() {
            return Err(GeometryError::UndefinedSection { level, column });
        }

        let start: u32 = spans[..index].iter().sum();
        Ok((start, spans[index]))
    }

    /// Maps a real column to the owning section's index at a level.
    pub fn section_at(
        &self,
        level: HeaderLevel,
        real_column: RealColumn,
    ) -> Result<LevelColumn, GeometryError> {
        let spans = self.spans_at(level)?;

        let mut start = 0u32;
        for (index, &span) in spans.iter().enumerate() {
            if real_column < start + span {
                return Ok(index as LevelColumn);
            }
            start += span;
        }

        Err(GeometryError::ColumnOutOfRange {
            column: real_column,
            total: start,
        })
    }

    /// Maps a real column to its owning section at the next-deeper level.
    /// Used to recurse downward through nested headers.
    pub fn child_coordinate(
        &self,
        level: HeaderLevel,
        real_column: RealColumn,
    ) -> Result<LevelColumn, GeometryError> {
        self.section_at(level + 1, real_column)
    }

    /// Count of hidden real columns preceding the owning section's range
    /// at the given level. Rendered section positions shift left by this
    /// amount, so it is recomputed from the current hidden set on every
    /// call and never cached.
    pub fn hidden_offset(
        &self,
        real_column: RealColumn,
        level: HeaderLevel,
        hidden: &FxHashSet<RealColumn>,
    ) -> Result<u32, GeometryError> {
        let section = self.section_at(level, real_column)?;
        let (start, _) = self.real_column_range(level, section)?;

        Ok(hidden.iter().filter(|&&column| column < start).count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level() -> HeaderLayout {
        HeaderLayout::new(vec![vec![4, 2], vec![2, 2, 1, 1]]).unwrap()
    }

    #[test]
    fn test_real_column_range() {
        let layout = two_level();

        assert_eq!(layout.real_column_range(0, 0).unwrap(), (0, 4));
        assert_eq!(layout.real_column_range(0, 1).unwrap(), (4, 2));
        assert_eq!(layout.real_column_range(1, 1).unwrap(), (2, 2));
        assert_eq!(layout.real_column_range(1, 3).unwrap(), (5, 1));
    }

    #[test]
    fn test_real_column_range_undefined_section() {
        let layout = two_level();

        assert_eq!(
            layout.real_column_range(0, 2),
            Err(GeometryError::UndefinedSection { level: 0, column: 2 })
        );
        assert_eq!(
            layout.real_column_range(5, 0),
            Err(GeometryError::UndefinedLevel(5))
        );
    }

    #[test]
    fn test_section_at_boundaries() {
        let layout = two_level();

        assert_eq!(layout.section_at(0, 0).unwrap(), 0);
        assert_eq!(layout.section_at(0, 3).unwrap(), 0);
        assert_eq!(layout.section_at(0, 4).unwrap(), 1);
        assert_eq!(layout.section_at(0, 5).unwrap(), 1);
        assert_eq!(layout.section_at(1, 2).unwrap(), 1);
        assert_eq!(layout.section_at(1, 4).unwrap(), 2);
    }

    #[test]
    fn test_section_at_out_of_range() {
        let layout = two_level();

        assert_eq!(
            layout.section_at(0, 6),
            Err(GeometryError::ColumnOutOfRange { column: 6, total: 6 })
        );
    }

    #[test]
    fn test_child_coordinate() {
        let layout = two_level();

        assert_eq!(layout.child_coordinate(0, 0).unwrap(), 0);
        assert_eq!(layout.child_coordinate(0, 1).unwrap(), 0);
        assert_eq!(layout.child_coordinate(0, 2).unwrap(), 1);
        assert_eq!(layout.child_coordinate(0, 4).unwrap(), 2);
        // Below the deepest level there is nothing to recurse into.
        assert_eq!(
            layout.child_coordinate(1, 0),
            Err(GeometryError::UndefinedLevel(2))
        );
    }

    #[test]
    fn test_hidden_offset_counts_preceding_hidden_columns() {
        let layout = two_level();
        let hidden: FxHashSet<u32> = [1, 3].into_iter().collect();

        // Level-0 section starting at 4 sits after two hidden columns.
        assert_eq!(layout.hidden_offset(4, 0, &hidden).unwrap(), 2);
        // Hidden columns inside the owning section's own range do not
        // shift the section's start.
        assert_eq!(layout.hidden_offset(0, 0, &hidden).unwrap(), 0);
        // The same real column shifts differently per level: at level 1
        // column 3 belongs to the section starting at 2, after one
        // hidden column.
        assert_eq!(layout.hidden_offset(3, 1, &hidden).unwrap(), 1);
    }

    #[test]
    fn test_hidden_offset_empty_set() {
        let layout = two_level();
        let hidden = FxHashSet::default();

        assert_eq!(layout.hidden_offset(5, 0, &hidden).unwrap(), 0);
    }
}
