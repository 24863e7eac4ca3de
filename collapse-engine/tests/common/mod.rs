//! FILENAME: collapse-engine/tests/common/mod.rs
//! Test harness and fixtures for collapse-engine integration tests.

use collapse_engine::{CollapsibleColumns, HiddenColumns, VisibilityMechanism};
use nested_headers::HeaderLayout;

/// Host stub owning the hidden-columns configuration.
#[derive(Debug, Default)]
pub struct HostVisibility {
    pub hidden: HiddenColumns,
    /// Number of full replacements the core has handed over.
    pub replacements: usize,
}

impl VisibilityMechanism for HostVisibility {
    fn hidden_columns(&self) -> HiddenColumns {
        self.hidden.clone()
    }

    fn replace_hidden_columns(&mut self, columns: HiddenColumns) {
        self.hidden = columns;
        self.replacements += 1;
    }
}

/// Two header levels over 6 real columns:
/// level 0: [4, 2], level 1: [2, 2, 1, 1].
pub fn two_level_layout() -> HeaderLayout {
    HeaderLayout::new(vec![vec![4, 2], vec![2, 2, 1, 1]]).unwrap()
}

/// Three header levels over 8 real columns:
/// level 0: [8], level 1: [4, 4], level 2: [2, 2, 2, 1, 1].
pub fn three_level_layout() -> HeaderLayout {
    HeaderLayout::new(vec![vec![8], vec![4, 4], vec![2, 2, 2, 1, 1]]).unwrap()
}

/// Feature instance with all columns visible.
pub fn feature(layout: HeaderLayout) -> CollapsibleColumns<HostVisibility> {
    CollapsibleColumns::new(Some(layout), Some(HostVisibility::default())).unwrap()
}

/// Feature instance starting from an explicit hidden set (columns
/// hidden by some unrelated mechanism).
pub fn feature_with_hidden(
    layout: HeaderLayout,
    hidden: &[u32],
) -> CollapsibleColumns<HostVisibility> {
    let host = HostVisibility {
        hidden: HiddenColumns::from_columns(hidden.iter().copied()),
        replacements: 0,
    };
    CollapsibleColumns::new(Some(layout), Some(host)).unwrap()
}
