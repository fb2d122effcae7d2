//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::LogSettings;

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored, which keeps test binaries that share a process happy.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let installed = if settings.json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if installed.is_ok() {
        tracing::debug!(level = %settings.level, json = settings.json, "tracing initialised");
    }
}
