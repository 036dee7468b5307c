//! Picker use cases
//!
//! Each picker instance owns its own state; only the tree is shared.

mod multi;
mod single;

pub use multi::MultiPicker;
pub use single::SinglePicker;
