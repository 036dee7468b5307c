//! Terminal presentation for the binary: icons, capability detection,
//! NDJSON output and the interactive tree picker.

pub mod json;
pub mod terminal;
pub mod theme;
pub mod widgets;
