use futures_util::future::join_all;

use super::enumerator::VideoEnumerator;

/// The flattened outcome of enumerating every channel.
#[derive(Debug)]
pub struct AggregateResult {
    /// Video IDs concatenated in channel submission order,
    /// then tool emission order within each channel.
    pub video_ids: Vec<String>,
    /// Total video count (sum of per-channel counts).
    pub total: usize,
    /// Number of channels submitted, including failed ones.
    pub channels: usize,
}

/// Enumerate all channels concurrently and aggregate the results.
///
/// Every enumeration is created before any is awaited (fan-out), so the
/// subprocesses run concurrently at the OS level; `join_all` then waits
/// for all of them (fan-in) and returns results positionally, which keeps
/// the output in submission order regardless of completion order. A failed
/// channel contributes an empty slot; there is no retry.
pub async fn enumerate_all(enumerator: &VideoEnumerator, channels: &[String]) -> AggregateResult {
    log::info!("Generating blocklist for {} channels", channels.len());

    let fetches = channels
        .iter()
        .map(|channel| enumerator.fetch_video_ids(channel));

    let results = join_all(fetches).await;

    let total: usize = results.iter().map(Vec::len).sum();
    let video_ids: Vec<String> = results.into_iter().flatten().collect();
    debug_assert_eq!(video_ids.len(), total);

    AggregateResult {
        video_ids,
        total,
        channels: channels.len(),
    }
}
