pub mod algorithm;

pub use algorithm::{find_continuous_segments, ContinuousRun};
