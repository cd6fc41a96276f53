//! Serving the previous day when the requested one is empty.

use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::source::ScheduleSource;
use crate::types::ScheduledStream;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    /// Day the streams are from.
    pub date: NaiveDate,
    pub requested: NaiveDate,
    pub streams: Vec<ScheduledStream>,
    pub fell_back: bool,
}

async fn fetch_or_empty<S: ScheduleSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<ScheduledStream> {
    match source.fetch_day(date, offset).await {
        Ok(streams) => streams,
        Err(e) => {
            warn!(%date, error = %e, "schedule fetch failed, treating day as empty");
            Vec::new()
        }
    }
}

/// Fetch `date`; if it has no streams and `fallback` is set, fetch the
/// day before once. Fetch errors count as an empty day.
pub async fn fetch_with_fallback<S: ScheduleSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    offset: FixedOffset,
    fallback: bool,
) -> DaySchedule {
    let streams = fetch_or_empty(source, date, offset).await;
    if !streams.is_empty() || !fallback {
        return DaySchedule {
            date,
            requested: date,
            streams,
            fell_back: false,
        };
    }

    let Some(previous) = date.pred_opt() else {
        return DaySchedule {
            date,
            requested: date,
            streams,
            fell_back: false,
        };
    };

    info!(%date, %previous, "no streams scheduled, falling back to previous day");
    DaySchedule {
        date: previous,
        requested: date,
        streams: fetch_or_empty(source, previous, offset).await,
        fell_back: true,
    }
}
