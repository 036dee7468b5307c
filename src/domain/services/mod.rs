//! Domain Services
//!
//! Pure functions over an immutable tree and a plain selection.
//!
//! - `path` - root-to-node chains and breadcrumbs
//! - `aggregate` - second-level group rules
//! - `shortcuts` - label-bound toggles
//! - `search` - name search

pub mod aggregate;
pub mod path;
pub mod search;
pub mod shortcuts;

pub use aggregate::{add_aggregate_selections, is_intermediate_node_with_children};
pub use path::{find_path, render_breadcrumb, BREADCRUMB_SEPARATOR};
pub use search::{search, SearchHit};
pub use shortcuts::{resolve_shortcut, toggle_shortcut};
