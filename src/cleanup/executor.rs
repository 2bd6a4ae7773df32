use anyhow::Result;
use log::{debug, info};

use crate::cleanup::config::CleanupConfig;
use crate::cleanup::planner::{build_cleanup_plan, candidate_bounds, CleanupOp};
use crate::store::RecordStore;

/// Outcome of one cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanupReport {
    /// Records actually removed from the store.
    pub deleted: u64,
    /// Delete operations issued.
    pub ops: usize,
    /// Candidates the store no longer had.
    pub skipped: usize,
}

/// Delete a batch of records by timestamp, collapsing contiguous stretches
/// into single range deletes.
///
/// Looks up every stored key inside the candidate range, plans one delete op
/// per continuous run, then drives the ops in order. Store and planning
/// errors abort the pass; ops already issued are not rolled back.
pub async fn run_cleanup<S: RecordStore>(
    store: &S,
    candidates: &[i64],
    config: &CleanupConfig,
) -> Result<CleanupReport> {
    if candidates.is_empty() {
        debug!("Cleanup called with no candidates");
        return Ok(CleanupReport::default());
    }

    let (start, end) = candidate_bounds(candidates);
    let existing = store.fetch_range(start, end).await?;
    debug!(
        "Cleanup range {start}..={end}: {} candidates, {} stored keys",
        candidates.len(),
        existing.len()
    );

    let plan = build_cleanup_plan(candidates, &existing, config)?;
    if plan.complete {
        debug!("Batch covers the range exactly, deleting in one sweep");
    }

    let mut deleted = 0u64;
    for op in &plan.ops {
        match *op {
            CleanupOp::Range { start, end } => {
                let removed = store.delete_range(start, end).await?;
                debug!("Range delete {start}..={end}: {removed} removed");
                deleted += removed;
            }
            CleanupOp::Point(ts) => {
                if store.delete_at(ts).await? {
                    deleted += 1;
                } else {
                    debug!("Point delete {ts}: already gone");
                }
            }
        }
    }

    info!(
        "Cleanup finished: {deleted} deleted across {} ops, {} candidates skipped",
        plan.ops.len(),
        plan.skipped
    );

    Ok(CleanupReport {
        deleted,
        ops: plan.ops.len(),
        skipped: plan.skipped,
    })
}
