use directories::ProjectDirs;
use pantry::error::{PantryError, Result};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Overrides the data directory (store and config).
pub const HOME_ENV: &str = "PANTRY_HOME";
/// Log filter directives, e.g. `PANTRY_LOG=pantry=debug`.
pub const LOG_ENV: &str = "PANTRY_LOG";

/// Logs go to stderr so listings on stdout stay pipeable.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "pantry", "pantry")
        .ok_or_else(|| PantryError::Api("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
