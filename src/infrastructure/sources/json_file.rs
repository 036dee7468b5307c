//! JSON File Tree Source
//!
//! Implements the TreeSource port for a category payload stored on disk.

use std::path::{Path, PathBuf};

use crate::domain::ports::{TreeSource, TreeSourceError};

/// Category payload read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileTreeSource {
    path: PathBuf,
}

impl JsonFileTreeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TreeSource for JsonFileTreeSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_payload(&self) -> Result<String, TreeSourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TreeSourceError::NotFound {
                path: self.path.clone(),
            },
            std::io::ErrorKind::PermissionDenied => TreeSourceError::PermissionDenied {
                path: self.path.clone(),
            },
            _ => TreeSourceError::ReadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })
    }
}
