// Roster - sortable, filterable, paginated table viewer
//
// Shows a small person dataset (id, name, age) as a table with per-column
// sorting, per-column filters and pagination.
//
// Architecture:
// - Data: the record set, built in or loaded from a JSON file
// - Table: a synchronous reducer over sort/filter/page actions
// - View: a render-agnostic snapshot of one frame
// - TUI (ratatui): keyboard and mouse front end over the view
// - Text renderer: the same view printed for `print` and `--headless`

mod cli;
mod config;
mod data;
mod logging;
mod table;
mod tui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use data::{BuiltinRoster, DataSource, JsonFileSource};
use logging::{LogBuffer, TuiLogLayer};
use table::{roster_columns, Table, TableState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::theme::ThemeKind;
use view::{render_text, TableView};

/// Initialize tracing with output chosen by mode
///
/// - TUI: capture logs to the in-memory buffer (prevents garbling the display)
/// - print/headless: human-readable logs on stderr, stdout stays clean
/// - File logging: optional JSON lines in a rotating file, in addition to the above
///
/// Precedence: RUST_LOG env var > config level > "info".
/// The returned guard must live until exit so buffered file logs flush.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
    interactive: bool,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("roster={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = interactive.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!interactive).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen in a background thread
                let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(file_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Dataset from `data_path`, or the built-in roster
fn load_source(config: &Config) -> Result<Box<dyn DataSource>> {
    match &config.data_path {
        Some(path) => {
            let source = JsonFileSource::load(path)
                .with_context(|| format!("Failed to load dataset {}", path.display()))?;
            tracing::info!(
                "Using dataset {} ({} records)",
                source.path().display(),
                source.records().len()
            );
            Ok(Box::new(source))
        }
        None => Ok(Box::new(BuiltinRoster::new())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config` never touches the table; handle it before anything else
    let print_actions = match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            return cli::handle_config(show, reset, path);
        }
        Some(Commands::Print { sort, filter, page }) => {
            Some(cli::print_actions(sort, &filter, page.as_deref()))
        }
        None => None,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // CLI flags override env and file
    let mut config = Config::from_env();
    if let Some(data) = cli.source.data {
        config.data_path = Some(data);
    }
    if let Some(page_size) = cli.source.page_size {
        config.page_size = cli::validate_page_size(page_size)?;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.headless |= cli.headless;

    let interactive = print_actions.is_none() && !config.headless;
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer, interactive);

    let mut table = Table::new(
        load_source(&config)?,
        roster_columns(config.numeric_desc_first),
        TableState::with_page_size(config.page_size),
    );
    if !config.page_size_options.contains(&config.page_size) {
        tracing::debug!(
            "page size {} is not one of {:?}",
            config.page_size,
            config.page_size_options
        );
    }

    if !interactive {
        cli::apply_actions(&mut table, print_actions.unwrap_or_default());
        println!(
            "{}",
            render_text(&TableView::build(&table, &config.page_size_options))
        );
        return Ok(());
    }

    let theme = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', using Dark", config.theme);
        ThemeKind::default()
    });

    tracing::info!("Starting TUI");
    tui::run_tui(table, config.page_size_options, theme, log_buffer)?;
    tracing::info!("Shutdown complete");
    Ok(())
}
