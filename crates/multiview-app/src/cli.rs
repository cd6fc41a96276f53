use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use multiview_common::LayoutType;

/// Multiview: watch several livestreams side by side.
#[derive(Parser, Debug)]
#[command(name = "multiview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct Viewport {
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Treat the viewport as a mobile device.
    #[arg(long)]
    pub mobile: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a layout for a stream count and compute player rects.
    Layout {
        count: usize,

        #[arg(long, default_value = "auto")]
        layout: LayoutType,

        #[command(flatten)]
        viewport: Viewport,
    },

    /// Build share links for a list of stream URLs.
    Share {
        #[arg(required = true)]
        urls: Vec<String>,

        #[arg(long)]
        layout: Option<LayoutType>,

        /// Page URL to attach parameters to (defaults to `share.base_url`).
        #[arg(long)]
        base: Option<String>,
    },

    /// Restore a session from a page URL or query string.
    Open {
        /// URL or `?state=..&config=..` query. Omit to use the stored session.
        input: Option<String>,

        /// Save the restored session for the next visit.
        #[arg(long)]
        persist: bool,

        #[command(flatten)]
        viewport: Viewport,
    },

    /// Inspect or clear the stored session.
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Send a command to every player in the stored session.
    Player {
        action: PlayerAction,

        /// Volume for `volume` (0-100).
        #[arg(long)]
        level: Option<u32>,
    },

    /// Show the schedule for a day grouped into time blocks.
    Schedule {
        /// Local date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// JSON schedule file (defaults to `schedule.source_path`).
        #[arg(long)]
        source: Option<PathBuf>,

        /// Do not fall back to the previous day when empty.
        #[arg(long)]
        no_fallback: bool,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum SessionAction {
    Show,
    Clear,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play,
    Pause,
    Mute,
    Unmute,
    Volume,
}

pub fn parse() -> Args {
    Args::parse()
}
