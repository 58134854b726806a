//! Symbolic anchor presets
//!
//! A preset is a horizontal choice (left, center, right, stretch) crossed with
//! a vertical one (top, middle, bottom, stretch). Each pair resolves to fixed
//! anchor and pivot values in bottom-origin layout space.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::rect::LayoutRect;
use super::types::Point;

/// Horizontal preset choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorH {
    Left,
    Center,
    Right,
    Stretch,
}

/// Vertical preset choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorV {
    Top,
    Middle,
    Bottom,
    Stretch,
}

impl AnchorH {
    pub const ALL: [AnchorH; 4] = [Self::Left, Self::Center, Self::Right, Self::Stretch];

    /// (anchor min, anchor max, pivot) along x
    fn values(self) -> (f64, f64, f64) {
        match self {
            Self::Left => (0.0, 0.0, 0.0),
            Self::Center => (0.5, 0.5, 0.5),
            Self::Right => (1.0, 1.0, 1.0),
            Self::Stretch => (0.0, 1.0, 0.5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Stretch => "stretch",
        }
    }
}

impl AnchorV {
    pub const ALL: [AnchorV; 4] = [Self::Top, Self::Middle, Self::Bottom, Self::Stretch];

    /// (anchor min, anchor max, pivot) along y; top is 1 in layout space
    fn values(self) -> (f64, f64, f64) {
        match self {
            Self::Top => (1.0, 1.0, 1.0),
            Self::Middle => (0.5, 0.5, 0.5),
            Self::Bottom => (0.0, 0.0, 0.0),
            Self::Stretch => (0.0, 1.0, 0.5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
            Self::Stretch => "stretch",
        }
    }
}

/// Anchor and pivot values a preset resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPreset {
    pub anchor_min: Point,
    pub anchor_max: Point,
    pub pivot: Point,
}

impl AnchorPreset {
    pub fn from_alignment(h: AnchorH, v: AnchorV) -> Self {
        let (min_x, max_x, pivot_x) = h.values();
        let (min_y, max_y, pivot_y) = v.values();
        Self {
            anchor_min: Point::new(min_x, min_y),
            anchor_max: Point::new(max_x, max_y),
            pivot: Point::new(pivot_x, pivot_y),
        }
    }

    pub fn is_stretch_x(&self) -> bool {
        self.anchor_min.x != self.anchor_max.x
    }

    pub fn is_stretch_y(&self) -> bool {
        self.anchor_min.y != self.anchor_max.y
    }

    /// A layout rect carrying this preset's anchors and pivot, other fields default
    pub fn to_layout_rect(&self) -> LayoutRect {
        LayoutRect::new()
            .with_anchors(self.anchor_min, self.anchor_max)
            .with_pivot(self.pivot)
    }
}

/// A requested preset, as picked from the anchor grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetRequest {
    pub horizontal: AnchorH,
    pub vertical: AnchorV,
}

impl PresetRequest {
    pub fn new(horizontal: AnchorH, vertical: AnchorV) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn preset(&self) -> AnchorPreset {
        AnchorPreset::from_alignment(self.horizontal, self.vertical)
    }

    /// All sixteen grid cells, row by row from the top
    pub fn grid() -> impl Iterator<Item = PresetRequest> {
        AnchorV::ALL
            .into_iter()
            .flat_map(|v| AnchorH::ALL.into_iter().map(move |h| PresetRequest::new(h, v)))
    }
}

impl fmt::Display for PresetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.vertical.as_str(), self.horizontal.as_str())
    }
}

/// Errors from parsing preset names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetParseError {
    #[error("unknown horizontal anchor '{0}' (expected left, center, right or stretch)")]
    Horizontal(String),
    #[error("unknown vertical anchor '{0}' (expected top, middle, bottom or stretch)")]
    Vertical(String),
    #[error("invalid preset '{0}' (expected <vertical>-<horizontal>, e.g. top-left)")]
    Malformed(String),
}

impl FromStr for AnchorH {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            "stretch" | "s" => Ok(Self::Stretch),
            _ => Err(PresetParseError::Horizontal(s.to_string())),
        }
    }
}

impl FromStr for AnchorV {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "t" => Ok(Self::Top),
            "middle" | "m" => Ok(Self::Middle),
            "bottom" | "b" => Ok(Self::Bottom),
            "stretch" | "s" => Ok(Self::Stretch),
            _ => Err(PresetParseError::Vertical(s.to_string())),
        }
    }
}

impl FromStr for PresetRequest {
    type Err = PresetParseError;

    /// Parses `<vertical>-<horizontal>`, e.g. `top-left` or `stretch-center`.
    /// `center` alone is accepted as `middle-center`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("center") {
            return Ok(Self::new(AnchorH::Center, AnchorV::Middle));
        }
        let (v, h) = s
            .split_once(['-', '_'])
            .ok_or_else(|| PresetParseError::Malformed(s.to_string()))?;
        Ok(Self::new(h.parse()?, v.parse()?))
    }
}
