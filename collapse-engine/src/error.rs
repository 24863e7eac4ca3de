//! FILENAME: collapse-engine/src/error.rs

use nested_headers::GeometryError;
use thiserror::Error;

/// Errors surfaced by the collapse feature.
///
/// All errors are local to a single toggle invocation: a failed toggle
/// leaves both the collapsed-state store and the external hidden-columns
/// configuration exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollapseError {
    /// The requested coordinate or the layout data was invalid.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A required collaborator was not configured at initialization, so
    /// the feature is disabled.
    #[error("collapsible headers disabled: missing {0}")]
    DependencyMissing(&'static str),
}
