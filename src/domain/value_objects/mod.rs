//! Value Objects
//!
//! Small immutable-by-contract types owned by a single picker instance.

mod header;
mod selection;

pub use header::HeaderVisibility;
pub use selection::{
    parse_form_value, to_form_value, Selection, SingleSelection, FORM_VALUE_DELIMITER,
};
