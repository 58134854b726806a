//! Item alignment flags and their relation to the layout pivot.
//!
//! An item's alignment says which point of the item its position refers to.
//! Only a 3x3 grid is representable: each axis is low edge, high edge or
//! centered (no flag). A continuous pivot is therefore quantized when
//! applied, and the quantization is lossy: a pivot of 0.1 comes back as 0.0.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::layout::Point;

/// Pivot values strictly below this snap to the low edge
pub const LOW_EDGE_THRESHOLD: f64 = 0.25;

/// Pivot values strictly above this snap to the high edge
pub const HIGH_EDGE_THRESHOLD: f64 = 0.75;

bitflags! {
    /// Set of item alignment flags
    ///
    /// The empty set means centered on both axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Alignment: u32 {
        const CENTER = 0;
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const TOP    = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

// Stored as the raw host bit value
impl Serialize for Alignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits_retain)
    }
}

impl Alignment {
    /// Quantize a layout pivot to the nearest representable alignment.
    ///
    /// Layout space is bottom-origin, so a low vertical pivot is the bottom
    /// edge. The thresholds are exclusive: 0.25 and 0.75 are centered.
    pub fn from_pivot(pivot: Point) -> Self {
        let mut align = Self::CENTER;

        if pivot.x < LOW_EDGE_THRESHOLD {
            align |= Self::LEFT;
        } else if pivot.x > HIGH_EDGE_THRESHOLD {
            align |= Self::RIGHT;
        }

        if pivot.y < LOW_EDGE_THRESHOLD {
            align |= Self::BOTTOM;
        } else if pivot.y > HIGH_EDGE_THRESHOLD {
            align |= Self::TOP;
        }

        align
    }

    /// Infer a layout pivot from these flags
    pub fn to_pivot(self) -> Point {
        let x = if self.contains(Self::LEFT) {
            0.0
        } else if self.contains(Self::RIGHT) {
            1.0
        } else {
            0.5
        };

        let y = if self.contains(Self::TOP) {
            1.0
        } else if self.contains(Self::BOTTOM) {
            0.0
        } else {
            0.5
        };

        Point::new(x, y)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = if self.contains(Self::TOP) {
            Some("top")
        } else if self.contains(Self::BOTTOM) {
            Some("bottom")
        } else {
            None
        };
        let horizontal = if self.contains(Self::LEFT) {
            Some("left")
        } else if self.contains(Self::RIGHT) {
            Some("right")
        } else {
            None
        };

        match (vertical, horizontal) {
            (Some(v), Some(h)) => write!(f, "{}-{}", v, h),
            (Some(v), None) => write!(f, "{}", v),
            (None, Some(h)) => write!(f, "{}", h),
            (None, None) => write!(f, "center"),
        }
    }
}
