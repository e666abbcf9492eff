// CLI module - command-line argument parsing and handlers
//
// Running with no subcommand opens the TUI. Subcommands:
// - print: apply sort/filter/page headlessly and print the frame
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::data::Field;
use crate::table::{Action, ColumnSort, SortDirection, Table};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Roster - sortable, filterable, paginated table viewer
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version = VERSION)]
#[command(about = "Sortable, filterable, paginated table viewer", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Color theme (Dark, Light, Nord, Monokai)
    #[arg(long)]
    pub theme: Option<String>,

    /// Print the first page and exit instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by the TUI and `print`
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON file with an array of {id, name, age} records
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Rows per page
    #[arg(long, value_name = "N", global = true)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply sorting, filters and a page, then print the table as text
    Print {
        /// Sort by a column: id, name or age, optionally with :asc or :desc
        #[arg(long, value_name = "COL[:asc|desc]", value_parser = parse_sort)]
        sort: Option<ColumnSort>,

        /// Filter a column, e.g. name=rijwan or age=25 (repeatable)
        #[arg(long, value_name = "COL=VALUE", value_parser = parse_filter)]
        filter: Vec<(Field, String)>,

        /// 1-based page to show
        #[arg(long, value_name = "N")]
        page: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn parse_sort(s: &str) -> Result<ColumnSort, String> {
    let (column, direction) = match s.split_once(':') {
        Some((column, direction)) => (column, direction.parse::<SortDirection>()?),
        None => (s, SortDirection::Ascending),
    };
    Ok(ColumnSort::new(column.parse::<Field>()?, direction))
}

fn parse_filter(s: &str) -> Result<(Field, String), String> {
    let Some((column, value)) = s.split_once('=') else {
        return Err(format!("expected COL=VALUE, got '{}'", s));
    };
    Ok((column.parse::<Field>()?, value.to_string()))
}

/// Actions that reproduce a `print` invocation, in the order a user would click
pub fn print_actions(
    sort: Option<ColumnSort>,
    filters: &[(Field, String)],
    page: Option<&str>,
) -> Vec<Action> {
    let mut actions: Vec<Action> = filters
        .iter()
        .map(|(field, value)| Action::SetFilter(*field, value.clone()))
        .collect();
    if sort.is_some() {
        actions.push(Action::SetSort(sort));
    }
    if let Some(page) = page {
        actions.push(Action::JumpToPage(page.to_string()));
    }
    actions
}

/// Apply actions to a table in order
pub fn apply_actions(table: &mut Table, actions: Vec<Action>) {
    for action in actions {
        table.dispatch(action);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// config subcommand
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: roster config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# headless = {}", config.headless);

    // Show source info
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Reject a page size of zero before it reaches the table
pub fn validate_page_size(page_size: usize) -> Result<usize> {
    if page_size == 0 {
        bail!("page size must be at least 1");
    }
    Ok(page_size)
}
