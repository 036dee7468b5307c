//! Domain entities

mod category;

pub use category::{CategoryNode, CategoryTree, Walk};
