use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::models::DailyRecord;
use crate::store::RecordStore;

/// In-memory record store keyed by epoch-millisecond record time.
///
/// Reference implementation of [`RecordStore`] used by the test suite and
/// for embedding without a real backing store. Replaces any record already
/// stored at the same millisecond on insert, like the backing store's
/// unique-key semantics.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<BTreeMap<i64, DailyRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: DailyRecord) {
        let mut records = self.inner.lock().await;
        records.insert(record.epoch_millis(), record);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Timestamps currently stored, ascending.
    pub async fn timestamps(&self) -> Vec<i64> {
        self.inner.lock().await.keys().copied().collect()
    }
}

impl RecordStore for MemoryStore {
    async fn fetch_range(&self, start: i64, end: i64) -> Result<HashMap<String, String>> {
        if start > end {
            return Ok(HashMap::new());
        }

        let records = self.inner.lock().await;
        let mut found = HashMap::new();
        for (ts, record) in records.range(start..=end) {
            let payload = serde_json::to_string(record)
                .with_context(|| format!("failed to serialize record at {ts}"))?;
            found.insert(ts.to_string(), payload);
        }
        Ok(found)
    }

    async fn delete_range(&self, start: i64, end: i64) -> Result<u64> {
        if start > end {
            return Ok(0);
        }

        let mut records = self.inner.lock().await;
        let doomed: Vec<i64> = records.range(start..=end).map(|(ts, _)| *ts).collect();
        for ts in &doomed {
            records.remove(ts);
        }
        Ok(doomed.len() as u64)
    }

    async fn delete_at(&self, ts: i64) -> Result<bool> {
        let mut records = self.inner.lock().await;
        Ok(records.remove(&ts).is_some())
    }
}
