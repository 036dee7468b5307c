//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --tree, --config) are inherited by all subcommands
//! - Selections are passed and printed in the `"||"` form-value format

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Catpick - hierarchical category picker
#[derive(Parser, Debug)]
#[command(name = "catpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Category payload (JSON); overrides config and CATPICK_TREE
    #[arg(long, global = true, value_name = "PATH")]
    pub tree: Option<PathBuf>,

    /// Config file (defaults to ./catpick.toml, then ~/.config/catpick/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the category payload and summarise it
    Check,

    /// Print the breadcrumb of a value
    Path {
        /// Category value
        value: String,
    },

    /// Tell whether a value is a second-level group
    Group {
        /// Category value
        value: String,
    },

    /// Append groups whose leaves are all selected
    Aggregate {
        /// Selected values (or a single "a||b" form value)
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Toggle a value or shortcut in a selection
    Toggle {
        /// Current form value ("a||b")
        #[arg(short, long, default_value = "")]
        selection: String,

        /// Value to toggle
        #[arg(required_unless_present = "shortcut", conflicts_with = "shortcut")]
        value: Option<String>,

        /// Shortcut label (category name) to toggle
        #[arg(long)]
        shortcut: Option<String>,
    },

    /// Search category names
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Open the interactive tree picker
    Pick {
        /// Pick one value instead of many
        #[arg(long)]
        single: bool,

        /// Initial form value ("a||b")
        #[arg(short, long, default_value = "")]
        selection: String,
    },
}
