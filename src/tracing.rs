//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, resize and sync state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=trace,sync=debug` - scoped filtering
//! - `RUST_LOG=lead_grid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lead-grid/logs/lead-grid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{GridModel, SelectionKind};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/lead-grid/logs/lead-grid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lead-grid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection and edit state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub kind: SelectionKind,
    pub cell_count: usize,
    pub anchor: Option<(usize, usize)>,
    pub editing: Option<(usize, usize)>,
    pub rows: usize,
}

impl SelectionSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            kind: model.selection.kind(),
            cell_count: model.selection.len(),
            anchor: model.selection.anchor().map(|a| (a.row, a.col)),
            editing: model
                .edit
                .current()
                .map(|e| (e.position.row, e.position.col)),
            rows: model.leads.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.kind != other.kind || self.cell_count != other.cell_count {
            changes.push(format!(
                "selection: {:?}×{} → {:?}×{}",
                self.kind, self.cell_count, other.kind, other.cell_count
            ));
        }
        if self.anchor != other.anchor {
            changes.push(format!("anchor: {:?} → {:?}", self.anchor, other.anchor));
        }
        if self.editing != other.editing {
            changes.push(format!("editing: {:?} → {:?}", self.editing, other.editing));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
