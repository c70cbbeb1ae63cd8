//! Tracing initialization and subscriber setup.
//!
//! This module wires `tracing` events from the library into a plain-text log
//! file. Output never goes to the terminal, which is owned by the UI.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;

/// Level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with a rotating log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # File Location
///
/// `<data_dir>/betters3tui.log`, e.g. `~/.local/share/betters3tui/betters3tui.log`.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently returns if the directory cannot be determined or created
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use betters3tui::observability::init_tracing;
/// use betters3tui::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(data_dir) = paths::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }
    init_tracing_to(config, data_dir.join(paths::LOG_FILE_NAME));
}

/// Initializes the tracing subscriber writing to `log_path`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_to(config: &Config, log_path: PathBuf) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = Arc::new(FileWriter::new(log_path));
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
