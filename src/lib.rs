pub mod cleanup;
pub mod models;
pub mod segmentation;
pub mod store;

pub use cleanup::{run_cleanup, CleanupConfig, CleanupOp, CleanupPlan, CleanupReport};
pub use segmentation::{find_continuous_segments, ContinuousRun};
pub use store::{MemoryStore, RecordStore};
