//! Selection value objects
//!
//! - `Selection`: ordered multi-select list, serialized as a `"||"`-joined form value
//! - `SingleSelection`: at most one value

use serde::{Deserialize, Serialize};

/// Delimiter between values in the hidden form field
pub const FORM_VALUE_DELIMITER: &str = "||";

/// Ordered list of selected values (insertion order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Remove the first occurrence of `value`. Returns true if one was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(idx) => {
                self.values.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove one occurrence when present, append otherwise.
    /// Returns true when the value ends up selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.remove(value) {
            false
        } else {
            self.values.push(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Picker summary: `None` when empty, the value itself for one,
    /// `"<first> +<n-1>"` for several.
    pub fn summary(&self) -> Option<String> {
        match self.values.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, rest @ ..] => Some(format!("{} +{}", first, rest.len())),
        }
    }

    /// Summary text with `placeholder` standing in for an empty selection
    pub fn summary_or(&self, placeholder: &str) -> String {
        self.summary().unwrap_or_else(|| placeholder.to_string())
    }

    pub fn to_form_value(&self) -> String {
        to_form_value(&self.values)
    }

    pub fn from_form_value(raw: &str) -> Self {
        Self {
            values: parse_form_value(raw),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Join values with the form delimiter
pub fn to_form_value<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(FORM_VALUE_DELIMITER)
}

/// Split a form value; empty segments are dropped
pub fn parse_form_value(raw: &str) -> Vec<String> {
    raw.split(FORM_VALUE_DELIMITER)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Single-select picker value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleSelection {
    value: Option<String>,
}

impl SingleSelection {
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn to_form_value(&self) -> String {
        self.value.clone().unwrap_or_default()
    }
}
