//! The selection model: single/multiple rules over an externally-owned value.
//!
//! [`Selection`] is a value snapshot, not owned state. The control reads the
//! caller's current value, computes a replacement with [`Selection::toggled`]
//! or [`Selection::cleared`], and hands the result to the caller's change
//! callback; nothing here mutates in place.

use crate::option::SelectOption;
use serde::{Deserialize, Serialize};

/// Selection mode, fixed for the lifetime of a control instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one option selected; re-selecting it is a no-op
    Single,
    /// Ordered set of options; toggling flips membership
    Multiple,
}

/// The committed selection, shaped by the mode.
///
/// In multiple mode the sequence is in insertion order (selection order) and
/// holds no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Single-select value
    Single(Option<SelectOption>),
    /// Multi-select values, selection-ordered
    Multiple(Vec<SelectOption>),
}

impl Selection {
    /// Empty selection for the given mode.
    #[must_use]
    pub const fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    /// The mode this value is shaped for.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Whether `option` is part of the committed selection.
    #[must_use]
    pub fn contains(&self, option: &SelectOption) -> bool {
        match self {
            Self::Single(value) => value.as_ref() == Some(option),
            Self::Multiple(values) => values.contains(option),
        }
    }

    /// Compute the value after toggling `option`.
    ///
    /// Single mode replaces the current option; toggling the already-current
    /// option returns the value unchanged (no deselect-by-reclick). Multiple
    /// mode removes the first matching entry if present, otherwise appends to
    /// the end, preserving the order of the rest.
    #[must_use]
    pub fn toggled(&self, option: &SelectOption) -> Self {
        match self {
            Self::Single(value) => {
                if value.as_ref() == Some(option) {
                    self.clone()
                } else {
                    Self::Single(Some(option.clone()))
                }
            }
            Self::Multiple(values) => {
                let mut next = values.clone();
                if let Some(position) = next.iter().position(|v| v == option) {
                    next.remove(position);
                } else {
                    next.push(option.clone());
                }
                Self::Multiple(next)
            }
        }
    }

    /// Compute the cleared value for this mode.
    #[must_use]
    pub const fn cleared(&self) -> Self {
        Self::empty(self.mode())
    }

    /// Number of committed options.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(value) => usize::from(value.is_some()),
            Self::Multiple(values) => values.len(),
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the committed options in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        match self {
            Self::Single(value) => value.as_slice().iter(),
            Self::Multiple(values) => values.as_slice().iter(),
        }
    }

    /// Display labels of the committed options, in selection order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|option| option.label.as_str()).collect()
    }
}
