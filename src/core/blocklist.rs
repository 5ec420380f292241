use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Default destination when no `--output` is given
pub const DEFAULT_BLOCKLIST_FILE: &str = "adguard_blocklist.txt";

/// Format one AdGuard rule blocking a video's watch page.
pub fn format_rule(video_id: &str) -> String {
    format!("||youtube.com/watch?v={}^", video_id)
}

/// Write the blocklist file: one newline-terminated rule per video ID, in
/// the order given. The file is truncated first, so re-running with the
/// same IDs produces a byte-identical file. No sorting, no deduplication.
pub fn write_blocklist(path: &Path, video_ids: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create blocklist file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for video_id in video_ids {
        writeln!(writer, "{}", format_rule(video_id))
            .with_context(|| format!("Failed to write blocklist file: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write blocklist file: {}", path.display()))?;

    Ok(())
}
