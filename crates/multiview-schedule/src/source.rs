//! Where schedules come from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use multiview_common::{Platform, ScheduleError, Stream};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{ScheduledStream, StreamStatus};

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Streams whose start falls on `date` in `offset`.
    async fn fetch_day(
        &self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Vec<ScheduledStream>, ScheduleError>;
}

fn on_day(
    streams: impl IntoIterator<Item = ScheduledStream>,
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<ScheduledStream> {
    streams
        .into_iter()
        .filter(|s| s.local_date(offset) == date)
        .collect()
}

/// A fixed, in-memory schedule.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    streams: Vec<ScheduledStream>,
}

impl StaticSource {
    pub fn new(streams: Vec<ScheduledStream>) -> Self {
        Self { streams }
    }
}

#[async_trait]
impl ScheduleSource for StaticSource {
    async fn fetch_day(
        &self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Vec<ScheduledStream>, ScheduleError> {
        Ok(on_day(self.streams.iter().cloned(), date, offset))
    }
}

/// One entry of a schedule file. A stream is identified either by `url`
/// or by `id` with `platform`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub status: StreamStatus,
}

impl ScheduleEntry {
    pub fn into_scheduled(self) -> Option<ScheduledStream> {
        let mut stream = match (self.url.as_deref(), self.id) {
            (Some(url), _) => Stream::from_url(url)?,
            (None, Some(id)) => Stream::placeholder(id, self.platform, None),
            (None, None) => return None,
        };
        if self.channel_id.is_some() {
            stream.channel_id = self.channel_id;
        }
        stream.title = self.title;
        Some(ScheduledStream::new(stream, self.start_at, self.status))
    }
}

/// A JSON array of [`ScheduleEntry`] on disk. The file is re-read on each
/// fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ScheduledStream>, ScheduleError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ScheduleError::Source(format!("{}: {e}", self.path.display())))?;
        let entries: Vec<ScheduleEntry> = serde_json::from_str(&contents)
            .map_err(|e| ScheduleError::Parse(format!("{}: {e}", self.path.display())))?;

        let total = entries.len();
        let streams: Vec<ScheduledStream> = entries
            .into_iter()
            .filter_map(ScheduleEntry::into_scheduled)
            .collect();
        if streams.len() < total {
            warn!(
                path = %self.path.display(),
                skipped = total - streams.len(),
                "schedule entries without a usable stream were skipped"
            );
        }
        Ok(streams)
    }
}

#[async_trait]
impl ScheduleSource for JsonFileSource {
    async fn fetch_day(
        &self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Vec<ScheduledStream>, ScheduleError> {
        let streams = on_day(self.read_all().await?, date, offset);
        debug!(path = %self.path.display(), %date, count = streams.len(), "schedule read");
        Ok(streams)
    }
}
