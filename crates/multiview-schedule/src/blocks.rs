//! Day and time-block grouping.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike};
use serde::Serialize;

use crate::types::ScheduledStream;

/// Streams starting within `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBlock {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub streams: Vec<ScheduledStream>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub blocks: Vec<TimeBlock>,
}

impl DayGroup {
    pub fn stream_count(&self) -> usize {
        self.blocks.iter().map(|b| b.streams.len()).sum()
    }
}

fn clamp_block_hours(block_hours: u32) -> u32 {
    block_hours.clamp(1, 24)
}

fn local_at(date: NaiveDate, hour: u32, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    offset.from_local_datetime(&naive).single()
}

/// Start of the block containing `local`. Blocks are aligned to local
/// midnight; the last block of a day may be shorter than `block_hours`.
pub fn block_start(local: DateTime<FixedOffset>, block_hours: u32) -> DateTime<FixedOffset> {
    let hours = clamp_block_hours(block_hours);
    let hour = local.hour() / hours * hours;
    local_at(local.date_naive(), hour, *local.offset()).unwrap_or(local)
}

fn block_end(start: DateTime<FixedOffset>, block_hours: u32) -> DateTime<FixedOffset> {
    let end = start + Duration::hours(i64::from(clamp_block_hours(block_hours)));
    start
        .date_naive()
        .succ_opt()
        .and_then(|next| local_at(next, 0, *start.offset()))
        .map_or(end, |midnight| end.min(midnight))
}

/// Group streams by local day and block in `offset`.
///
/// Days and blocks are ascending; streams in a block are ordered by start
/// time, then id. Empty blocks are omitted.
pub fn group_into_blocks(
    streams: &[ScheduledStream],
    offset: FixedOffset,
    block_hours: u32,
) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, BTreeMap<DateTime<FixedOffset>, Vec<ScheduledStream>>> =
        BTreeMap::new();

    for stream in streams {
        let local = stream.local_start(offset);
        let start = block_start(local, block_hours);
        days.entry(local.date_naive())
            .or_default()
            .entry(start)
            .or_default()
            .push(stream.clone());
    }

    days.into_iter()
        .map(|(date, blocks)| DayGroup {
            date,
            blocks: blocks
                .into_iter()
                .map(|(start, mut streams)| {
                    streams.sort_by(|a, b| {
                        a.start_at
                            .cmp(&b.start_at)
                            .then_with(|| a.stream.id.cmp(&b.stream.id))
                    });
                    TimeBlock {
                        start,
                        end: block_end(start, block_hours),
                        streams,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{offset_from_minutes, StreamStatus};
    use chrono::Utc;
    use multiview_common::{Platform, Stream};

    fn at(id: &str, y: i32, m: u32, d: u32, h: u32, min: u32) -> ScheduledStream {
        ScheduledStream::new(
            Stream::placeholder(id, Platform::Twitch, None),
            Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            StreamStatus::Upcoming,
        )
    }

    fn ids(block: &TimeBlock) -> Vec<&str> {
        block.streams.iter().map(|s| s.stream.id.as_str()).collect()
    }

    #[test]
    fn hourly_blocks_in_local_time() {
        let jst = offset_from_minutes(540);
        // 10:15, 10:45 and 11:00 JST
        let streams = vec![
            at("c", 2024, 3, 1, 2, 0),
            at("b", 2024, 3, 1, 1, 45),
            at("a", 2024, 3, 1, 1, 15),
        ];
        let days = group_into_blocks(&streams, jst, 1);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[0].blocks.len(), 2);
        assert_eq!(days[0].blocks[0].start.hour(), 10);
        assert_eq!(ids(&days[0].blocks[0]), ["a", "b"]);
        assert_eq!(ids(&days[0].blocks[1]), ["c"]);
        assert_eq!(days[0].stream_count(), 3);
    }

    #[test]
    fn days_split_at_local_midnight() {
        let jst = offset_from_minutes(540);
        // 23:30 JST on the 1st and 00:30 JST on the 2nd
        let streams = vec![at("late", 2024, 3, 1, 14, 30), at("early", 2024, 3, 1, 15, 30)];
        let days = group_into_blocks(&streams, jst, 1);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(ids(&days[1].blocks[0]), ["early"]);
    }

    #[test]
    fn same_start_sorts_by_id() {
        let utc = offset_from_minutes(0);
        let streams = vec![at("zeta", 2024, 3, 1, 9, 0), at("alpha", 2024, 3, 1, 9, 0)];
        let days = group_into_blocks(&streams, utc, 1);
        assert_eq!(ids(&days[0].blocks[0]), ["alpha", "zeta"]);
    }

    #[test]
    fn wide_blocks_align_to_midnight() {
        let utc = offset_from_minutes(0);
        let streams = vec![at("a", 2024, 3, 1, 5, 59), at("b", 2024, 3, 1, 6, 0), at("c", 2024, 3, 1, 23, 0)];
        let days = group_into_blocks(&streams, utc, 6);
        let starts: Vec<u32> = days[0].blocks.iter().map(|b| b.start.hour()).collect();
        assert_eq!(starts, [0, 6, 18]);
    }

    #[test]
    fn short_last_block_ends_at_midnight() {
        let utc = offset_from_minutes(0);
        let days = group_into_blocks(&[at("a", 2024, 3, 1, 22, 0)], utc, 5);
        let block = &days[0].blocks[0];
        assert_eq!(block.start.hour(), 20);
        assert_eq!(block.end, Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn block_hours_are_clamped() {
        let utc = offset_from_minutes(0);
        let streams = vec![at("a", 2024, 3, 1, 1, 0), at("b", 2024, 3, 1, 20, 0)];
        assert_eq!(group_into_blocks(&streams, utc, 0)[0].blocks.len(), 2);
        assert_eq!(group_into_blocks(&streams, utc, 99)[0].blocks.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(group_into_blocks(&[], offset_from_minutes(0), 1).is_empty());
    }
}
