//! Option data for the dropdown control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value carried by a select option.
///
/// Option lists may be keyed by strings or by numbers, so both payloads are
/// representable. Serialized untagged, so `"red"` and `3` both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// String-keyed value
    Text(String),
    /// Integer-keyed value
    Number(i64),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One selectable label/value pair offered by the control.
///
/// `value` is the identity used for equality against selected items and must
/// be unique within the supplied option list; `label` is what the rendering
/// layer displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub label: String,
    /// Unique value for this option
    pub value: OptionValue,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an option where the value equals the label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: OptionValue::Text(text.clone()),
            label: text,
        }
    }
}
