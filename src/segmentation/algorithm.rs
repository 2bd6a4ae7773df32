use std::collections::HashMap;

use anyhow::{Context, Result};

/// A maximal run of candidate timestamps that occupy consecutive positions
/// in the store's ascending key ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuousRun {
    pub timestamps: Vec<i64>,
}

impl ContinuousRun {
    /// First (smallest) timestamp in the run.
    pub fn start(&self) -> i64 {
        self.timestamps[0]
    }

    /// Last (largest) timestamp in the run.
    pub fn end(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Find the runs of `candidates` that exist in the store and are contiguous
/// there, i.e. no other stored timestamp falls between two members of a run.
///
/// `existing` maps stringified timestamps (the store's key format) to opaque
/// payloads; only key presence matters. Candidates absent from `existing` are
/// dropped; duplicates are kept, each occurrence on its own. Runs come back
/// ordered by their first timestamp. A key that does not parse as a
/// timestamp fails the whole call: partial results against a malformed key
/// set would put run boundaries in the wrong place.
pub fn find_continuous_segments<V>(
    candidates: &[i64],
    existing: &HashMap<String, V>,
) -> Result<Vec<ContinuousRun>> {
    let mut existing_sorted = Vec::with_capacity(existing.len());
    for key in existing.keys() {
        let ts = key
            .parse::<i64>()
            .with_context(|| format!("invalid timestamp key '{key}'"))?;
        existing_sorted.push(ts);
    }
    existing_sorted.sort_unstable();

    // Rank of each stored timestamp in the ascending key ordering. Adjacency
    // is defined over ranks, not raw values.
    let rank: HashMap<i64, usize> = existing_sorted
        .iter()
        .enumerate()
        .map(|(idx, ts)| (*ts, idx))
        .collect();

    let mut valid_sorted: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|ts| rank.contains_key(ts))
        .collect();
    valid_sorted.sort_unstable();

    Ok(split_into_runs(&valid_sorted, &rank))
}

/// Split sorted valid timestamps wherever two neighbours are not at adjacent
/// ranks. A duplicate shares its twin's rank, so it always opens a new run.
fn split_into_runs(valid_sorted: &[i64], rank: &HashMap<i64, usize>) -> Vec<ContinuousRun> {
    let mut runs = Vec::new();
    if valid_sorted.is_empty() {
        return runs;
    }

    let mut current = vec![valid_sorted[0]];
    for pair in valid_sorted.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if rank[&cur] == rank[&prev] + 1 {
            current.push(cur);
        } else {
            runs.push(ContinuousRun { timestamps: current });
            current = vec![cur];
        }
    }
    runs.push(ContinuousRun { timestamps: current });

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_map(timestamps: &[i64]) -> HashMap<String, String> {
        timestamps
            .iter()
            .map(|ts| (ts.to_string(), format!("value{ts}")))
            .collect()
    }

    fn run_of(timestamps: &[i64]) -> ContinuousRun {
        ContinuousRun {
            timestamps: timestamps.to_vec(),
        }
    }

    #[test]
    fn fully_contiguous_batch_is_one_run() {
        let candidates = [1000, 2000, 3000, 4000, 5000];
        let existing = existing_map(&[1000, 2000, 3000, 4000, 5000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(runs, vec![run_of(&[1000, 2000, 3000, 4000, 5000])]);
    }

    #[test]
    fn stored_gaps_split_the_batch() {
        let candidates = [1000, 2000, 3000, 5000, 6000, 8000];
        let existing = existing_map(&[1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(
            runs,
            vec![
                run_of(&[1000, 2000, 3000]),
                run_of(&[5000, 6000]),
                run_of(&[8000]),
            ]
        );
    }

    #[test]
    fn isolated_candidates_each_form_a_run() {
        let candidates = [1000, 3000, 5000];
        let existing = existing_map(&[1000, 2000, 3000, 4000, 5000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(
            runs,
            vec![run_of(&[1000]), run_of(&[3000]), run_of(&[5000])]
        );
    }

    #[test]
    fn empty_store_yields_no_runs() {
        let existing: HashMap<String, String> = HashMap::new();

        let runs = find_continuous_segments(&[1000, 2000], &existing).unwrap();

        assert!(runs.is_empty());
    }

    #[test]
    fn empty_candidates_yield_no_runs() {
        let existing = existing_map(&[1000, 2000]);

        let runs = find_continuous_segments(&[], &existing).unwrap();

        assert!(runs.is_empty());
    }

    #[test]
    fn mixed_batch_splits_into_four_runs() {
        let candidates = [1000, 2000, 4000, 5000, 6000, 9000, 10000, 11000, 15000];
        let stored: Vec<i64> = (1..=15).map(|n| n * 1000).collect();
        let existing = existing_map(&stored);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(
            runs,
            vec![
                run_of(&[1000, 2000]),
                run_of(&[4000, 5000, 6000]),
                run_of(&[9000, 10000, 11000]),
                run_of(&[15000]),
            ]
        );
    }

    #[test]
    fn single_candidate_is_a_single_run() {
        let existing = existing_map(&[1000]);

        let runs = find_continuous_segments(&[1000], &existing).unwrap();

        assert_eq!(runs, vec![run_of(&[1000])]);
    }

    #[test]
    fn candidates_missing_from_store_are_dropped() {
        let existing = existing_map(&[3000, 4000]);

        let runs = find_continuous_segments(&[1000, 2000], &existing).unwrap();

        assert!(runs.is_empty());
    }

    #[test]
    fn candidate_order_does_not_matter() {
        let shuffled = [5000, 1000, 3000, 2000, 4000];
        let existing = existing_map(&[1000, 2000, 3000, 4000, 5000]);

        let runs = find_continuous_segments(&shuffled, &existing).unwrap();

        assert_eq!(runs, vec![run_of(&[1000, 2000, 3000, 4000, 5000])]);
    }

    #[test]
    fn adjacency_follows_rank_not_value() {
        // The store jumps straight from 3000 to 5000, so the two are
        // rank-adjacent even though their values are 2000 apart.
        let candidates = [3000, 5000, 6000];
        let existing = existing_map(&[1000, 2000, 3000, 5000, 6000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(runs, vec![run_of(&[3000, 5000, 6000])]);
    }

    #[test]
    fn duplicate_candidates_split_runs() {
        // A duplicate has the same rank as its twin, never rank + 1, so it
        // starts a fresh run instead of extending the open one.
        let candidates = [1000, 1000, 2000];
        let existing = existing_map(&[1000, 2000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(runs, vec![run_of(&[1000]), run_of(&[1000, 2000])]);
    }

    #[test]
    fn malformed_key_fails_the_whole_call() {
        let mut existing = existing_map(&[1000, 2000]);
        existing.insert("not-a-timestamp".to_string(), "value".to_string());

        let err = find_continuous_segments(&[1000, 2000], &existing).unwrap_err();

        assert!(err.to_string().contains("not-a-timestamp"));
        assert!(err
            .chain()
            .any(|cause| cause.downcast_ref::<std::num::ParseIntError>().is_some()));
    }

    #[test]
    fn output_is_deterministic() {
        let candidates = [9000, 1000, 5000, 6000, 2000];
        let existing = existing_map(&[1000, 2000, 3000, 5000, 6000, 9000]);

        let first = find_continuous_segments(&candidates, &existing).unwrap();
        let second = find_continuous_segments(&candidates, &existing).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn runs_cover_exactly_the_valid_candidates() {
        let candidates = [1000, 2000, 2000, 4000, 7000, 9999];
        let existing = existing_map(&[1000, 2000, 3000, 4000, 5000, 7000]);

        let runs = find_continuous_segments(&candidates, &existing).unwrap();

        // Coverage: flattening the runs gives the sorted valid multiset.
        let flattened: Vec<i64> = runs
            .iter()
            .flat_map(|run| run.timestamps.iter().copied())
            .collect();
        assert_eq!(flattened, vec![1000, 2000, 2000, 4000, 7000]);

        // Maximality: neighbouring runs are never rank-adjacent.
        let rank: HashMap<i64, usize> = [1000, 2000, 3000, 4000, 5000, 7000]
            .iter()
            .enumerate()
            .map(|(idx, ts)| (*ts, idx))
            .collect();
        for pair in runs.windows(2) {
            assert_ne!(rank[&pair[1].start()], rank[&pair[0].end()] + 1);
        }
    }
}
