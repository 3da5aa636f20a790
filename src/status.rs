// src/status.rs

//! Restore-status file reader.
//!
//! The status file is written by the restore script, not by this service.
//! Absence, unreadability and whitespace-only content all map to the same
//! sentinel string; this function never errors.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Sentinel returned when no restore status is available.
pub const DEFAULT_STATUS: &str = "No Restore Running";

/// Read the current restore status from `path`.
///
/// Returns the trimmed file contents if the file exists and has non-empty
/// trimmed content, otherwise [`DEFAULT_STATUS`]. Read failures (missing
/// file, permissions, a race with deletion) are treated identically.
pub fn read_status(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                DEFAULT_STATUS.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "status file unavailable");
            DEFAULT_STATUS.to_string()
        }
    }
}
