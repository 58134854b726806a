//! Target adapter: mapping layouts onto positionable items
//!
//! Items are external objects owned by a host. They expose a position in
//! top-origin space, either a scale applied to an intrinsic size or an
//! explicit bounds size, a set of alignment flags, and optionally a settings
//! store. The adapter only ever talks to them through [`PositionableItem`].

pub mod adapter;
pub mod alignment;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::layout::{Point, Size};

pub use adapter::{
    apply, apply_to_item, effective_size, load, load_from_item, move_item, resize_item,
    save_to_item, LayoutKey,
};
pub use alignment::{Alignment, HIGH_EDGE_THRESHOLD, LOW_EDGE_THRESHOLD};

/// How an item's bounds box sizes its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsType {
    /// No bounds; size is intrinsic size times scale
    #[default]
    None,
    /// Stretch content to fill the bounds exactly
    Stretch,
    /// Scale content to fit inside the bounds
    ScaleInner,
    /// Scale content to cover the bounds
    ScaleOuter,
    ScaleToWidth,
    ScaleToHeight,
    /// Only shrink content that exceeds the bounds
    MaxOnly,
}

/// String-keyed store of persisted numeric values
pub trait SettingsStore {
    /// Value stored under `key`, or 0.0 when absent
    fn get_double(&self, key: &str) -> f64;

    fn set_double(&mut self, key: &str, value: f64);

    /// Whether `key` has an explicitly stored value
    fn has_user_value(&self, key: &str) -> bool;
}

impl SettingsStore for BTreeMap<String, f64> {
    fn get_double(&self, key: &str) -> f64 {
        self.get(key).copied().unwrap_or_default()
    }

    fn set_double(&mut self, key: &str, value: f64) {
        self.insert(key.to_string(), value);
    }

    fn has_user_value(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl SettingsStore for HashMap<String, f64> {
    fn get_double(&self, key: &str) -> f64 {
        self.get(key).copied().unwrap_or_default()
    }

    fn set_double(&mut self, key: &str, value: f64) {
        self.insert(key.to_string(), value);
    }

    fn has_user_value(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// Capability interface of a host scene item
///
/// Positions are in item space (top-origin). The adapter never owns an item;
/// callers are responsible for serializing a load/modify/apply cycle.
pub trait PositionableItem {
    /// Position of the item's aligned point
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);

    fn scale(&self) -> Point;
    fn set_scale(&mut self, scale: Point);

    fn bounds_type(&self) -> BoundsType;
    fn set_bounds_type(&mut self, bounds_type: BoundsType);

    fn bounds(&self) -> Size;
    fn set_bounds(&mut self, bounds: Size);

    /// How content is aligned inside the bounds box
    fn set_bounds_alignment(&mut self, alignment: Alignment);

    /// Which point of the item `position` refers to
    fn alignment(&self) -> Alignment;
    fn set_alignment(&mut self, alignment: Alignment);

    /// Unscaled size of the item's content
    fn intrinsic_size(&self) -> Size;

    /// Persisted settings, if the item supports them
    fn settings(&self) -> Option<&dyn SettingsStore>;
    fn settings_mut(&mut self) -> Option<&mut dyn SettingsStore>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_settings_store() {
        let mut store: BTreeMap<String, f64> = BTreeMap::new();
        assert!(!store.has_user_value("pivotX"));
        assert_eq!(store.get_double("pivotX"), 0.0);

        store.set_double("pivotX", 0.25);
        assert!(store.has_user_value("pivotX"));
        assert_eq!(store.get_double("pivotX"), 0.25);
    }

    #[test]
    fn test_hash_settings_store() {
        let mut store: HashMap<String, f64> = HashMap::new();
        store.set_double("anchorMinX", 1.0);
        assert!(store.has_user_value("anchorMinX"));
        assert_eq!(store.get_double("anchorMinX"), 1.0);
    }

    #[test]
    fn test_bounds_type_default() {
        assert_eq!(BoundsType::default(), BoundsType::None);
    }
}
