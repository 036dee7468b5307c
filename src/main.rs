//! Catpick CLI - hierarchical category picker
//!
//! Usage: catpick <COMMAND>
//!
//! Commands:
//!   check      Validate the category payload and summarise it
//!   path       Print the breadcrumb of a value
//!   group      Tell whether a value is a second-level group
//!   aggregate  Append groups whose leaves are all selected
//!   toggle     Toggle a value or shortcut in a selection
//!   search     Search category names
//!   pick       Open the interactive tree picker

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use catpick::presentation::cli::{Cli, Commands};
use catpick::Config;

mod commands;
mod ui;

use commands::toggle::ToggleTarget;
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let ctx = CommandContext {
        unicode: config.output.unicode && ui::terminal::detect_capabilities().supports_unicode,
        config,
        tree: cli.tree.clone(),
        json: cli.json,
    };

    match &cli.command {
        Commands::Check => commands::check::cmd_check(&ctx),
        Commands::Path { value } => commands::path::cmd_path(&ctx, value),
        Commands::Group { value } => commands::group::cmd_group(&ctx, value),
        Commands::Aggregate { values } => commands::aggregate::cmd_aggregate(&ctx, values),
        Commands::Toggle {
            selection,
            value,
            shortcut,
        } => {
            let target = match (value, shortcut) {
                (_, Some(label)) => ToggleTarget::Shortcut(label),
                (Some(value), None) => ToggleTarget::Value(value),
                (None, None) => anyhow::bail!("toggle needs a value or --shortcut"),
            };
            commands::toggle::cmd_toggle(&ctx, selection, target)
        }
        Commands::Search { query } => commands::search::cmd_search(&ctx, query),
        Commands::Pick { single, selection } => {
            commands::pick::cmd_pick(&ctx, *single, selection)
        }
    }
}

/// Logs go to stderr so stdout stays parseable. RUST_LOG wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catpick={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// `--config` must exist and parse; otherwise fall back through the
/// project and user config files.
fn load_config(cli: &Cli) -> Result<Config> {
    let Some(path) = cli.config.as_deref() else {
        let cwd = std::env::current_dir()?;
        return Ok(Config::load_or_default(Some(&cwd)));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for w in &warnings {
        match (&w.suggestion, w.line) {
            (Some(s), Some(line)) => tracing::warn!(
                "unknown config key '{}' at {}:{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                s
            ),
            _ => tracing::warn!("unknown config key '{}' in {}", w.key, w.file.display()),
        }
    }
    Ok(config.with_env_overrides())
}
