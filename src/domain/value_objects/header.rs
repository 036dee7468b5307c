//! Search header visibility
//!
//! The contextual header above a picker's option list is shown while the
//! search query is empty and hidden as soon as anything is typed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVisibility {
    #[default]
    Shown,
    Hidden,
}

impl HeaderVisibility {
    /// Next state for the current query
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            HeaderVisibility::Shown
        } else {
            HeaderVisibility::Hidden
        }
    }

    /// Re-evaluate against `query`. Returns true if the state changed.
    pub fn update(&mut self, query: &str) -> bool {
        let next = Self::for_query(query);
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, HeaderVisibility::Shown)
    }
}

impl std::fmt::Display for HeaderVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderVisibility::Shown => write!(f, "shown"),
            HeaderVisibility::Hidden => write!(f, "hidden"),
        }
    }
}
