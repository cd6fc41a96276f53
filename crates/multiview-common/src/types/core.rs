use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of streams a multiview session can hold.
pub const MAX_STREAMS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rect by `amount` on every side, never below zero size.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }
}

/// Layout selection for a multiview session.
///
/// `TwoByOne` is two columns side by side, `OneByTwo` two stacked rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LayoutType {
    #[serde(rename = "1x1")]
    OneByOne,
    #[serde(rename = "2x1")]
    TwoByOne,
    #[serde(rename = "1x2")]
    OneByTwo,
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "3x3")]
    ThreeByThree,
    #[serde(rename = "picture-in-picture")]
    PictureInPicture,
    #[serde(rename = "auto")]
    #[default]
    Auto,
}

impl LayoutType {
    pub const ALL: [LayoutType; 7] = [
        LayoutType::OneByOne,
        LayoutType::TwoByOne,
        LayoutType::OneByTwo,
        LayoutType::TwoByTwo,
        LayoutType::ThreeByThree,
        LayoutType::PictureInPicture,
        LayoutType::Auto,
    ];

    /// Number of streams the layout can show at once.
    pub fn capacity(&self) -> usize {
        match self {
            Self::OneByOne => 1,
            Self::TwoByOne | Self::OneByTwo | Self::PictureInPicture => 2,
            Self::TwoByTwo => 4,
            Self::ThreeByThree | Self::Auto => MAX_STREAMS,
        }
    }

    /// Whether the layout can present `count` streams.
    ///
    /// Picture-in-picture needs exactly two: a main stream and an overlay.
    /// Three or more are not accepted either, since only one overlay is
    /// drawn; such requests fall back like any other unsupported one.
    pub fn supports(&self, count: usize) -> bool {
        match self {
            Self::Auto => true,
            Self::PictureInPicture => count == 2,
            other => count <= other.capacity(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneByOne => "1x1",
            Self::TwoByOne => "2x1",
            Self::OneByTwo => "1x2",
            Self::TwoByTwo => "2x2",
            Self::ThreeByThree => "3x3",
            Self::PictureInPicture => "picture-in-picture",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized == "pip" {
            return Ok(Self::PictureInPicture);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("unknown layout type: {s}"))
    }
}

/// Corner where the picture-in-picture overlay is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PipPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl FromStr for PipPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            _ => Err(format!("unknown pip position: {s}")),
        }
    }
}
