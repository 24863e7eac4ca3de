//! FILENAME: nested-headers/src/error.rs

use thiserror::Error;

/// Errors raised by the header geometry resolver.
///
/// Geometry is always resolved before any state is written, so a
/// `GeometryError` never leaves a partial update behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("header level {0} is not defined")]
    UndefinedLevel(usize),

    #[error("no section defined at level {level}, column {column}")]
    UndefinedSection { level: usize, column: u32 },

    #[error("real column {column} is outside the layout ({total} columns)")]
    ColumnOutOfRange { column: u32, total: u32 },

    #[error("level {level} covers {actual} real columns, expected {expected}")]
    InconsistentLevel {
        level: usize,
        expected: u32,
        actual: u32,
    },

    #[error("section at level {level}, column {column} has zero span")]
    ZeroSpan { level: usize, column: u32 },

    #[error("section boundary at real column {column} is not preserved at level {level}")]
    MisalignedLevels { level: usize, column: u32 },

    #[error("level {0} spans overflow the supported column range")]
    WidthOverflow(usize),

    #[error("header layout has no levels")]
    EmptyLayout,
}
