//! Embedded Tree Source
//!
//! A payload that ships inside the page (or binary) rather than on disk.

use crate::domain::ports::{TreeSource, TreeSourceError};

#[derive(Debug, Clone)]
pub struct StaticTreeSource {
    label: String,
    payload: String,
}

impl StaticTreeSource {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

impl TreeSource for StaticTreeSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_payload(&self) -> Result<String, TreeSourceError> {
        Ok(self.payload.clone())
    }
}
