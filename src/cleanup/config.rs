/// Configuration for cleanup planning with tunable thresholds.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Runs with at most this many timestamps are deleted point-wise;
    /// longer runs collapse into a single range delete.
    pub point_delete_threshold: usize,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            point_delete_threshold: 1,
        }
    }
}
