//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sources/` - TreeSource implementations (JSON file, embedded payload)

pub mod sources;

pub use sources::{JsonFileTreeSource, StaticTreeSource};
