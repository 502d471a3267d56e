use crate::errors::{AppError, AppResult};
use std::process::Command;

/// Default program used to hand a `tel:` address to the desktop.
pub fn default_opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Pass the address to `dialer` (or the platform opener). Nothing is read back.
pub fn dial(uri: &str, dialer: Option<&str>) -> AppResult<()> {
    let program = dialer.unwrap_or_else(|| default_opener());

    let status = Command::new(program)
        .arg(uri)
        .status()
        .map_err(|e| AppError::Other(format!("failed to launch '{}': {}", program, e)))?;

    if !status.success() {
        tracing::warn!(program, uri, ?status, "dialer exited with an error");
    }
    Ok(())
}
