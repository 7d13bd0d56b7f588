//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=buffer=debug` - buffer state diffs only
//! - `RUST_LOG=reqline::layout=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/reqline/logs/reqline.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::editable::TextBuffer;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer
/// always logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
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
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of buffer state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct BufferSnapshot {
    pub len: usize,
    pub cursor: usize,
    pub anchor: Option<usize>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl BufferSnapshot {
    pub fn from_buffer(buffer: &TextBuffer) -> Self {
        Self {
            len: buffer.len(),
            cursor: buffer.cursor(),
            anchor: buffer.selection_anchor(),
            undo_depth: buffer.history().undo_count(),
            redo_depth: buffer.history().redo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BufferSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.anchor != other.anchor {
            let status = match other.anchor {
                Some(anchor) => format!("selection anchored at {}", anchor),
                None => "selection cleared".to_string(),
            };
            changes.push(status);
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
