use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging at all.
pub const LOG_ENV_VAR: &str = "COUNTRYDECK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default because anything written to the terminal
/// would corrupt the TUI. Set `COUNTRYDECK_LOG` to a file path to enable it;
/// `RUST_LOG` then selects the level (default `info`).
///
/// Returns the path actually written to, which carries a `{timestamp}.{pid}`
/// suffix so concurrent instances do not clobber each other.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;
    let unique_path = PathBuf::from(unique_log_path(&log_path));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
