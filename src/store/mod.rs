use std::collections::HashMap;

use anyhow::Result;

pub mod memory;

pub use memory::MemoryStore;

/// Storage boundary the cleanup flow drives.
///
/// Keys cross this boundary as stringified epoch-millisecond timestamps, the
/// format the backing store indexes records under; inside the library
/// timestamps stay `i64`. Values returned by [`fetch_range`] are opaque
/// payloads; the cleanup flow only looks at key presence.
///
/// [`fetch_range`]: RecordStore::fetch_range
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Every stored entry with `start <= ts <= end`.
    async fn fetch_range(&self, start: i64, end: i64) -> Result<HashMap<String, String>>;

    /// Delete every record with `start <= ts <= end`, returning how many
    /// were removed.
    async fn delete_range(&self, start: i64, end: i64) -> Result<u64>;

    /// Delete the record at exactly `ts`. Returns false if nothing was
    /// stored there.
    async fn delete_at(&self, ts: i64) -> Result<bool>;
}
