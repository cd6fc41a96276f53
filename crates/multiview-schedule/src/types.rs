use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use multiview_common::Stream;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    #[default]
    Upcoming,
    Live,
    Ended,
}

/// A stream with its announced start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledStream {
    pub stream: Stream,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub status: StreamStatus,
}

impl ScheduledStream {
    pub fn new(stream: Stream, start_at: DateTime<Utc>, status: StreamStatus) -> Self {
        Self {
            stream,
            start_at,
            status,
        }
    }

    pub fn local_start(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.start_at.with_timezone(&offset)
    }

    /// Calendar date of the start time in `offset`.
    pub fn local_date(&self, offset: FixedOffset) -> NaiveDate {
        self.local_start(offset).date_naive()
    }
}

/// Offset `minutes` east of UTC; out-of-range values fall back to UTC.
pub fn offset_from_minutes(minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or(Utc.fix())
}
