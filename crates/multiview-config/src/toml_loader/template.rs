//! Commented default config written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# Multiview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# default_type = "auto"        # 1x1, 2x1, 1x2, 2x2, 3x3, picture-in-picture, auto
# gap = 4                      # 0-64
# outer_padding = 0            # 0-128
# pip_position = "bottom-right" # top-left, top-right, bottom-left, bottom-right
# pip_scale = 0.3              # 0.1-0.6
# pip_margin = 16              # 0-128
# mobile_breakpoint = 768      # 320-2048

[session]
# persist = true
# storage_key = "multiview-state"
# storage_dir = "/path/to/dir"  # defaults to the platform data dir
# max_streams = 9              # 1-9

[share]
# base_url = "http://localhost:3000/multiview"
# embed_parent = "localhost"

[player]
# default_volume = 50          # 0-100
# start_muted = true
# autoplay = true

[schedule]
# utc_offset_minutes = 540     # -720 to 840
# block_hours = 1              # 1-24
# fallback_to_previous_day = true
# source_path = "/path/to/schedule.json"

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
