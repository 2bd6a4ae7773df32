use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::cleanup::config::CleanupConfig;
use crate::segmentation::find_continuous_segments;

/// One delete operation against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOp {
    /// Delete the single record at this timestamp.
    Point(i64),
    /// Delete every record with `start <= ts <= end`.
    Range { start: i64, end: i64 },
}

/// Ordered delete operations for one candidate batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPlan {
    pub ops: Vec<CleanupOp>,
    /// Candidate occurrences found in the store.
    pub matched: usize,
    /// Candidate occurrences the store no longer has.
    pub skipped: usize,
    /// The batch covered the looked-up keys exactly and collapsed into a
    /// single range.
    pub complete: bool,
}

impl CleanupPlan {
    fn empty() -> Self {
        Self {
            ops: Vec::new(),
            matched: 0,
            skipped: 0,
            complete: false,
        }
    }
}

/// Turn a candidate batch and the store's existing-key map into delete ops,
/// one per continuous run.
pub fn build_cleanup_plan<V>(
    candidates: &[i64],
    existing: &HashMap<String, V>,
    config: &CleanupConfig,
) -> Result<CleanupPlan> {
    if candidates.is_empty() {
        return Ok(CleanupPlan::empty());
    }

    // When the batch matches the stored keys exactly, one range covers it.
    // Key-set equality is required, not just equal sizes: with duplicate
    // candidates a size check could range-delete timestamps that were never
    // asked for.
    if batch_matches_exactly(candidates, existing) {
        let (start, end) = candidate_bounds(candidates);
        return Ok(CleanupPlan {
            ops: vec![CleanupOp::Range { start, end }],
            matched: candidates.len(),
            skipped: 0,
            complete: true,
        });
    }

    let runs = find_continuous_segments(candidates, existing)?;
    let matched: usize = runs.iter().map(|run| run.len()).sum();

    let mut ops = Vec::new();
    for run in &runs {
        if run.len() <= config.point_delete_threshold {
            for &ts in &run.timestamps {
                ops.push(CleanupOp::Point(ts));
            }
        } else {
            ops.push(CleanupOp::Range {
                start: run.start(),
                end: run.end(),
            });
        }
    }

    Ok(CleanupPlan {
        ops,
        matched,
        skipped: candidates.len() - matched,
        complete: false,
    })
}

/// Smallest and largest candidate timestamp.
pub(crate) fn candidate_bounds(candidates: &[i64]) -> (i64, i64) {
    let mut start = candidates[0];
    let mut end = candidates[0];
    for &ts in candidates {
        start = start.min(ts);
        end = end.max(ts);
    }
    (start, end)
}

/// The distinct candidate set equals the stored key set exactly.
fn batch_matches_exactly<V>(candidates: &[i64], existing: &HashMap<String, V>) -> bool {
    let distinct: HashSet<i64> = candidates.iter().copied().collect();
    if distinct.len() != candidates.len() || distinct.len() != existing.len() {
        return false;
    }
    distinct.iter().all(|ts| existing.contains_key(&ts.to_string()))
}
