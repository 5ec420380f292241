// ytblock Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, YtBlockError};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::aggregator::AggregateResult;
pub use crate::core::enumerator::VideoEnumerator;

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
