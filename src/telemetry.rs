//! Log subscriber setup.
//!
//! The TUI owns the terminal, so events are only written when a log file is
//! given. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _};

const DEFAULT_FILTER: &str = "info";

pub fn get_subscriber(log_file: File) -> impl Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::Registry::default()
        .with(filter)
        .with(fmt_layer)
}

/// Installs a global subscriber writing to `path`, truncating the file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a global subscriber is
/// already set.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
    tracing::subscriber::set_global_default(get_subscriber(file))
        .wrap_err("Setting the global tracing subscriber failed")?;
    Ok(())
}
