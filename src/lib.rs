//! Catpick - hierarchical category picker
//!
//! Catpick holds the selection rules behind category pickers: resolving a
//! value to its breadcrumb, inferring second-level groups from fully selected
//! leaves, shortcut toggles, and the `"||"` form-value contract. The rules are
//! pure functions over an immutable [`CategoryTree`]; pickers own their state.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckUseCase, MultiPicker, SinglePicker, TreeReport};
pub use config::Config;
pub use domain::entities::{CategoryNode, CategoryTree};
pub use domain::ports::{TreeSource, TreeSourceError};
pub use domain::services::{
    add_aggregate_selections, find_path, is_intermediate_node_with_children, toggle_shortcut,
};
pub use domain::value_objects::{HeaderVisibility, Selection, SingleSelection, FORM_VALUE_DELIMITER};
pub use error::{CatpickError, CatpickResult};
pub use infrastructure::{JsonFileTreeSource, StaticTreeSource};
