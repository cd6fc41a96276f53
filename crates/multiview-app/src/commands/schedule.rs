use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use multiview_common::MultiviewError;
use multiview_config::MultiviewConfig;
use multiview_schedule::{
    fetch_with_fallback, group_into_blocks, offset_from_minutes, JsonFileSource,
};
use serde_json::Value;

pub fn run(
    config: &MultiviewConfig,
    date: Option<NaiveDate>,
    source: Option<PathBuf>,
    no_fallback: bool,
) -> multiview_common::Result<Value> {
    let path = source
        .or_else(|| config.schedule.source_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            MultiviewError::Other("no schedule source: pass --source or set schedule.source_path".into())
        })?;

    let offset = offset_from_minutes(config.schedule.utc_offset_minutes);
    let date = date.unwrap_or_else(|| Utc::now().with_timezone(&offset).date_naive());
    let fallback = config.schedule.fallback_to_previous_day && !no_fallback;
    let source = JsonFileSource::new(path);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let schedule = rt.block_on(fetch_with_fallback(&source, date, offset, fallback));
    let days = group_into_blocks(&schedule.streams, offset, config.schedule.block_hours);

    super::to_json(&serde_json::json!({
        "requested": schedule.requested,
        "date": schedule.date,
        "fell_back": schedule.fell_back,
        "utc_offset_minutes": config.schedule.utc_offset_minutes,
        "days": days,
    }))
}
