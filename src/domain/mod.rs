//! Domain Layer
//!
//! The category tree and its selection rules, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - CategoryNode, CategoryTree
//! - `value_objects/` - Selection, SingleSelection, HeaderVisibility
//! - `services/` - path resolution, aggregation, shortcuts, search
//! - `ports/` - TreeSource
//!
//! ## Design Principles
//!
//! 1. **No I/O** - payloads arrive through the `TreeSource` port
//! 2. **Pure Functions** - services take the tree and a selection, return new data
//! 3. **Instance-owned state** - selections belong to one picker, never shared

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
