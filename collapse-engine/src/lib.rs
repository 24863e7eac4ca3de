//! FILENAME: collapse-engine/src/lib.rs
//! Collapsible column headers for grid widgets.
//!
//! This crate tracks which grouped (multi-column-span) header sections
//! are collapsed and computes the hidden-column updates each toggle
//! implies. It depends on `nested-headers` for the grouping definition
//! and coordinate mapping; rendering and the hidden-columns storage
//! stay outside, behind the [`VisibilityMechanism`] trait.
//!
//! Layers:
//! - `state`: Sparse collapsed-state store (single source of truth)
//! - `engine`: Section toggle engine (plans the cascade, then commits)
//! - `visibility`: Hidden-columns synchronization
//! - `plugin`: Host-facing facade and collaborator traits

pub mod engine;
pub mod error;
pub mod plugin;
pub mod state;
pub mod visibility;

pub use engine::{toggle, ToggleDirection, ToggleOutcome};
pub use error::CollapseError;
pub use plugin::{CollapsibleColumns, SectionIndicator, VisibilityMechanism};
pub use state::CollapsedSections;
pub use visibility::{apply_toggle, HiddenColumns};
