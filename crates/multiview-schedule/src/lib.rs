//! Stream schedules grouped into local time blocks.
//!
//! A [`ScheduleSource`] yields the streams starting on a local day;
//! [`group_into_blocks`] buckets them by day and block start in the
//! display timezone. [`fetch_with_fallback`] serves the previous day when
//! the requested one is empty.

pub mod blocks;
pub mod fallback;
pub mod source;
pub mod types;

pub use blocks::{block_start, group_into_blocks, DayGroup, TimeBlock};
pub use fallback::{fetch_with_fallback, DaySchedule};
pub use source::{JsonFileSource, ScheduleEntry, ScheduleSource, StaticSource};
pub use types::{offset_from_minutes, ScheduledStream, StreamStatus};
