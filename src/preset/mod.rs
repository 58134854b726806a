//! Preset engine: modifier-driven anchor preset application
//!
//! Two modifiers select one of four policies:
//!
//! | pivot | position | policy |
//! |-------|----------|--------|
//! |       |          | [`PresetPolicy::PreservePlacement`] |
//! | x     |          | [`PresetPolicy::SnapToAnchor`] |
//! | x     | x        | [`PresetPolicy::FullReset`] |
//! |       | x        | [`PresetPolicy::MoveToPreset`] |
//!
//! Every policy is a pure function of the current layout. Items are only
//! touched through the target adapter: load, mutate, apply.

pub mod engine;

pub use engine::{apply_policy, apply_preset, apply_preset_all};

/// Modifier keys held while picking a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub pivot: bool,
    pub position: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers::new(false, false);
    pub const PIVOT: Modifiers = Modifiers::new(true, false);
    pub const POSITION: Modifiers = Modifiers::new(false, true);
    pub const BOTH: Modifiers = Modifiers::new(true, true);

    pub const fn new(pivot: bool, position: bool) -> Self {
        Self { pivot, position }
    }
}

/// How a preset mutates a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetPolicy {
    /// Adopt the preset's anchors and pivot; the element stays where it is
    PreservePlacement,
    /// Adopt the preset's anchors and move the pivot onto the anchor point.
    /// The pivot value is kept, and `size_delta` is re-solved against the new
    /// anchor box so the effective size does not change, stretch presets
    /// included.
    SnapToAnchor,
    /// Adopt anchors and pivot, zero the offset, fill stretched axes
    FullReset,
    /// Keep anchors and pivot; move (and on stretched axes resize) the
    /// element to where the preset would place it
    MoveToPreset,
}

impl PresetPolicy {
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        match (modifiers.pivot, modifiers.position) {
            (false, false) => Self::PreservePlacement,
            (true, false) => Self::SnapToAnchor,
            (true, true) => Self::FullReset,
            (false, true) => Self::MoveToPreset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_selection() {
        assert_eq!(
            PresetPolicy::from_modifiers(Modifiers::NONE),
            PresetPolicy::PreservePlacement
        );
        assert_eq!(
            PresetPolicy::from_modifiers(Modifiers::PIVOT),
            PresetPolicy::SnapToAnchor
        );
        assert_eq!(
            PresetPolicy::from_modifiers(Modifiers::BOTH),
            PresetPolicy::FullReset
        );
        assert_eq!(
            PresetPolicy::from_modifiers(Modifiers::POSITION),
            PresetPolicy::MoveToPreset
        );
    }

    #[test]
    fn test_default_modifiers() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
