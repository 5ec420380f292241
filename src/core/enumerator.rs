use std::io;
use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;

/// One line of `yt-dlp -j --flat-playlist` output.
/// Only the `id` field is consumed; everything else is ignored.
#[derive(Debug, Deserialize)]
struct VideoRecord {
    id: String,
}

/// Enumerates the videos of a single channel by shelling out to yt-dlp.
pub struct VideoEnumerator {
    tool: PathBuf,
    timeout: Option<Duration>,
}

impl VideoEnumerator {
    pub fn new(tool: PathBuf, timeout: Option<Duration>) -> Self {
        Self { tool, timeout }
    }

    /// Enumerate the video IDs of one channel, in the tool's emission order.
    ///
    /// Failures are local to the channel: a spawn error, stderr output, a
    /// non-success exit status, or a timeout all log the problem and yield
    /// an empty list. Nothing here writes the blocklist.
    pub async fn fetch_video_ids(&self, channel_url: &str) -> Vec<String> {
        log::info!("Fetching video IDs for channel: {}", channel_url);

        let output = match self.run_tool(channel_url).await {
            Ok(output) => output,
            Err(e) => {
                log::error!("Error fetching video IDs for {}: {}", channel_url, e);
                return Vec::new();
            }
        };

        if !output.stderr.is_empty() {
            log::error!(
                "Error fetching video IDs for {}: {}",
                channel_url,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Vec::new();
        }

        if !output.status.success() {
            log::error!(
                "yt-dlp exited with {} for channel {}",
                output.status,
                channel_url
            );
            return Vec::new();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let video_ids = parse_video_ids(&stdout);

        log::info!(
            "Found {} videos for channel: {}",
            video_ids.len(),
            channel_url
        );

        video_ids
    }

    /// Run `<tool> -j --flat-playlist <channel-url>` to completion,
    /// capturing both output streams in full (no streaming).
    async fn run_tool(&self, channel_url: &str) -> io::Result<Output> {
        let mut cmd = Command::new(&self.tool);
        cmd.arg("-j").arg("--flat-playlist").arg(channel_url);
        // A timed-out invocation must not leave the child running
        cmd.kill_on_drop(true);

        match self.timeout {
            Some(limit) => match timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("yt-dlp did not finish within {}s", limit.as_secs()),
                )),
            },
            None => cmd.output().await,
        }
    }
}

/// Extract the `id` field from each non-empty JSON line of the tool's
/// stdout. A malformed line is logged and skipped; it aborts neither the
/// channel nor the run.
pub fn parse_video_ids(stdout: &str) -> Vec<String> {
    let mut video_ids = Vec::new();

    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<VideoRecord>(line) {
            Ok(record) => video_ids.push(record.id),
            Err(e) => log::warn!("Skipping malformed video record: {} (line: {})", e, line),
        }
    }

    video_ids
}
