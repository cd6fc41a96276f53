use multiview_common::LayoutType;
use multiview_config::MultiviewConfig;
use serde::Serialize;
use serde_json::Value;

use crate::cli::Viewport;
use crate::context;

#[derive(Debug, Serialize)]
struct Slot {
    index: usize,
    rect: multiview_common::Rect,
}

pub fn run(
    config: &MultiviewConfig,
    count: usize,
    requested: LayoutType,
    viewport: Viewport,
) -> multiview_common::Result<Value> {
    let is_mobile = viewport.is_mobile(config);
    let layout = context::layout_resolver(config).resolve(count, is_mobile, requested);
    let slots: Vec<Slot> = context::layout_engine(config)
        .compute(&layout, count, viewport.rect())
        .into_iter()
        .map(|(index, rect)| Slot { index, rect })
        .collect();

    super::to_json(&serde_json::json!({
        "requested": requested,
        "mobile": is_mobile,
        "layout": layout,
        "slots": slots,
    }))
}
