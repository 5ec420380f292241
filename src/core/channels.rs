use std::fs;
use std::path::Path;

use crate::error::{Result, YtBlockError};

/// Load channel URLs from a text file, one per line.
/// Lines are trimmed; blank lines are skipped. Order is preserved.
pub fn load_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let channels: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    log::info!(
        "Loaded {} channels from file: {}",
        channels.len(),
        path.display()
    );

    Ok(channels)
}

/// Resolve the channel list from either a file or an inline list.
/// The file takes precedence when both are given.
///
/// Fails before any enumeration or blocklist I/O happens when neither
/// source is present or the resolved list is empty.
pub fn resolve(file: Option<&str>, inline: Option<Vec<String>>) -> Result<Vec<String>> {
    let channels = if let Some(path) = file {
        load_from_file(Path::new(path))?
    } else if let Some(list) = inline {
        log::info!("Using {} channels provided via command line", list.len());
        list
    } else {
        return Err(YtBlockError::missing_input(
            "provide either a channel file (-f) or a list of channels (-c)",
        ));
    };

    if channels.is_empty() {
        return Err(YtBlockError::no_channels("the channel list is empty"));
    }

    Ok(channels)
}
