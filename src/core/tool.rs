use std::path::{Path, PathBuf};

use crate::error::{Result, YtBlockError};

/// Binary name used when no explicit path is given
pub const DEFAULT_TOOL: &str = "yt-dlp";

/// Locate the yt-dlp binary.
/// Priority:
/// 1. An explicit path or name passed via `--tool`
/// 2. Whatever `yt-dlp` resolves to in the system PATH
///
/// Unlike a managed install there is no download fallback: if the tool is
/// missing the run fails before any channel is enumerated.
pub fn locate(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(tool) = explicit {
        if Path::new(tool).exists() {
            return Ok(PathBuf::from(tool));
        }

        // Not a path on disk; maybe a binary name resolvable via PATH
        return which::which(tool).map_err(|_| {
            YtBlockError::tool_not_found(format!("'{}' is neither a file nor in PATH", tool))
        });
    }

    which::which(DEFAULT_TOOL).map_err(|_| {
        YtBlockError::tool_not_found(format!(
            "{} was not found in PATH; install it or pass --tool",
            DEFAULT_TOOL
        ))
    })
}
