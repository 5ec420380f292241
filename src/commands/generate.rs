use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{aggregator, blocklist, channels, tool, VideoEnumerator};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    // 1. Extract arguments
    let file = matches.get_one::<String>("file");
    let inline = matches
        .get_many::<String>("channels")
        .map(|values| values.cloned().collect::<Vec<_>>());
    let output = matches
        .get_one::<String>("output")
        .context("output path is required")?;
    let tool_override = matches.get_one::<String>("tool");
    let timeout_secs = *matches
        .get_one::<u64>("timeout")
        .context("timeout is required")?;

    // 2. Resolve the channel list before touching the output file,
    //    so bad input leaves an existing blocklist untouched
    let channel_list = channels::resolve(file.map(String::as_str), inline)
        .context("Failed to resolve the channel list")?;

    // 3. Locate the extraction tool
    let tool_path = tool::locate(tool_override.map(String::as_str))?;

    // 4. Enumerate all channels concurrently
    println!();
    println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".cyan());
    println!("{}", "  Generating Blocklist".cyan().bold());
    println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".cyan());
    println!();

    let per_channel_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
    let enumerator = VideoEnumerator::new(tool_path, per_channel_timeout);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("ytblock-worker")
        .build()
        .context("Failed to build the async runtime")?;

    let result = runtime.block_on(aggregator::enumerate_all(&enumerator, &channel_list));

    // 5. Write the blocklist (full overwrite)
    blocklist::write_blocklist(Path::new(output), &result.video_ids)?;

    println!(
        "{} {} rules from {} channels",
        "✓ Blocklist generated:".green().bold(),
        result.total,
        result.channels
    );
    println!("{} {}", "Output:".dimmed(), output);

    Ok(())
}
