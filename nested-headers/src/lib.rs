//! FILENAME: nested-headers/src/lib.rs
//! Nested column header subsystem for grid widgets.
//!
//! Provides the grouping definition (per-level section spans) and the
//! pure geometry operations that map between header-level coordinates
//! and real (leaf) grid columns. The collapse feature and any rendering
//! layer both consume this crate; nothing here owns widget state.
//!
//! Layers:
//! - `definition`: Serializable grouping configuration (what the header IS)
//! - `geometry`: Coordinate mapping across levels (WHERE sections sit)

pub mod definition;
pub mod error;
pub mod geometry;

pub use definition::{HeaderLayout, HeaderLevel, LevelColumn, RealColumn};
pub use error::GeometryError;
