//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MultiPicker` - multi-select state, aggregates and form value
//! - `SinglePicker` - single-select state, breadcrumb and group notice
//! - `CheckUseCase` - load a payload and summarise it

pub mod check;
pub mod picker;

pub use check::{CheckUseCase, TreeReport};
pub use picker::{MultiPicker, SinglePicker};
