// Core pipeline module

pub mod aggregator;
pub mod blocklist;
pub mod channels;
pub mod enumerator;
pub mod tool;

// Re-export commonly used items
pub use aggregator::{enumerate_all, AggregateResult};
pub use enumerator::VideoEnumerator;
