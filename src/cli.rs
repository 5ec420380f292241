use clap::{Arg, Command};

use crate::core::blocklist::DEFAULT_BLOCKLIST_FILE;

/// Build the ytblock command-line definition.
pub fn build() -> Command {
    Command::new("ytblock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate an AdGuard blocklist for YouTube channels")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to a file containing YouTube channel URLs (one per line)")
        )
        .arg(
            Arg::new("channels")
                .short('c')
                .long("channels")
                .value_name("URL")
                .num_args(1..)
                .help("List of YouTube channel URLs")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .default_value(DEFAULT_BLOCKLIST_FILE)
                .help("Destination blocklist file (overwritten on every run)")
        )
        .arg(
            Arg::new("tool")
                .long("tool")
                .value_name("PATH")
                .help("Path to the yt-dlp binary (defaults to PATH lookup)")
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .default_value("600")
                .help("Per-channel enumeration timeout in seconds (0 disables)")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue)
        )
}
