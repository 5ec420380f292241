use anyhow::Result;

use ytblock::commands;

fn main() -> Result<()> {
    let matches = ytblock::cli::build().get_matches();

    ytblock::init_logging(matches.get_flag("verbose"));

    commands::generate(&matches)
}
