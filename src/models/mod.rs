pub mod record;

pub use record::{Color, DailyRecord, Moisture, Mood, Shape, Size, Smell, Texture};
