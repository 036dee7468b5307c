//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates trees and pickers from config (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::{create_multi_picker, create_single_picker, create_tree_source, load_tree};
