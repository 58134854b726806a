//! Normalized layout model
//!
//! This module holds the anchor/pivot rectangle, its forward math, the
//! symbolic presets and the vertical-flip transform between layout space
//! (bottom-origin) and item space (top-origin). Nothing here depends on the
//! target items.

pub mod config;
pub mod preset;
pub mod rect;
pub mod transform;
pub mod types;

pub use config::LayoutConfig;
pub use preset::{AnchorH, AnchorPreset, AnchorV, PresetParseError, PresetRequest};
pub use rect::{LayoutRect, MIN_SIZE};
pub use transform::FlipTransform;
pub use types::*;
