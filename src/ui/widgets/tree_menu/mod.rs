//! Tree Menu Widget
//!
//! Interactive hierarchical picker over a category tree. Supports
//! group-to-leaf selection propagation, partial selection states, type-ahead
//! search and shortcut chips.
//!
//! # Module Structure
//!
//! - `state` - Per-node selection state derived from the picker
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;
mod state;

pub use input::{is_reserved_key, run_interactive};
pub use menu::{MenuShortcut, PickerMode, TreeMenu};
