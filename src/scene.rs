//! File-backed scene host
//!
//! A scene is a canvas plus a list of items, described in TOML. Items may be
//! groups holding child items. This is the host the command line tool edits;
//! library users with their own host implement [`PositionableItem`] instead.
//!
//! ```toml
//! [canvas]
//! width = 1920
//! height = 1080
//!
//! [[items]]
//! name = "logo"
//! selected = true
//! position = { x = 960.0, y = 540.0 }
//! intrinsic = { width = 200.0, height = 100.0 }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::layout::{Canvas, LayoutConfig, Point, Size};
use crate::target::{effective_size, Alignment, BoundsType, PositionableItem, SettingsStore};

fn default_true() -> bool {
    true
}

fn unit_scale() -> Point {
    Point::splat(1.0)
}

fn is_true(value: &bool) -> bool {
    *value
}

/// A single item in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub name: String,

    #[serde(default)]
    pub selected: bool,

    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,

    /// Position of the aligned point, top-origin
    #[serde(default)]
    pub position: Point,

    #[serde(default = "unit_scale")]
    pub scale: Point,

    /// Unscaled content size
    #[serde(default)]
    pub intrinsic: Size,

    #[serde(default)]
    pub alignment: Alignment,

    #[serde(default)]
    pub bounds_type: BoundsType,

    #[serde(default)]
    pub bounds: Size,

    #[serde(default)]
    pub bounds_alignment: Alignment,

    /// Whether the item keeps a settings store
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub persistent: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, f64>,

    /// Child items; non-empty for groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneItem>,
}

impl SceneItem {
    /// Visible, unselected, centered item at the origin with unit scale
    pub fn new(name: impl Into<String>, intrinsic: Size) -> Self {
        Self {
            name: name.into(),
            selected: false,
            visible: true,
            position: Point::zero(),
            scale: unit_scale(),
            intrinsic,
            alignment: Alignment::CENTER,
            bounds_type: BoundsType::None,
            bounds: Size::default(),
            bounds_alignment: Alignment::CENTER,
            persistent: true,
            settings: BTreeMap::new(),
            children: vec![],
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Point) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_bounds(mut self, bounds_type: BoundsType, bounds: Size) -> Self {
        self.bounds_type = bounds_type;
        self.bounds = bounds;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Drop the settings store; layout state will not be persisted
    pub fn non_persistent(mut self) -> Self {
        self.persistent = false;
        self.settings.clear();
        self
    }

    pub fn with_child(mut self, child: SceneItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

impl PositionableItem for SceneItem {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn scale(&self) -> Point {
        self.scale
    }

    fn set_scale(&mut self, scale: Point) {
        self.scale = scale;
    }

    fn bounds_type(&self) -> BoundsType {
        self.bounds_type
    }

    fn set_bounds_type(&mut self, bounds_type: BoundsType) {
        self.bounds_type = bounds_type;
    }

    fn bounds(&self) -> Size {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    fn set_bounds_alignment(&mut self, alignment: Alignment) {
        self.bounds_alignment = alignment;
    }

    fn alignment(&self) -> Alignment {
        self.alignment
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    fn settings(&self) -> Option<&dyn SettingsStore> {
        if self.persistent {
            Some(&self.settings)
        } else {
            None
        }
    }

    fn settings_mut(&mut self) -> Option<&mut dyn SettingsStore> {
        if self.persistent {
            Some(&mut self.settings)
        } else {
            None
        }
    }
}

/// Display values for the first selected item, truncated to whole units
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub alignment: Alignment,
    pub visible: bool,
}

impl SelectionSummary {
    pub fn from_item(item: &SceneItem) -> Self {
        let size = effective_size(item);
        // Truncation matches integer spin-box display
        Self {
            name: item.name.clone(),
            x: item.position.x as i64,
            y: item.position.y as i64,
            width: size.width as i64,
            height: size.height as i64,
            alignment: item.alignment,
            visible: item.visible,
        }
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pos=({}, {}) size={}x{} align={}",
            self.name, self.x, self.y, self.width, self.height, self.alignment
        )?;
        if !self.visible {
            write!(f, " hidden")?;
        }
        Ok(())
    }
}

/// A canvas and the items placed on it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub canvas: Canvas,

    /// Overrides for layout defaults
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            layout: LayoutConfig::default(),
            items: vec![],
        }
    }

    pub fn with_item(mut self, item: SceneItem) -> Self {
        self.items.push(item);
        self
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a scene from TOML text
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the scene back to TOML
    pub fn to_toml(&self) -> Result<String, SceneError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the scene to a TOML file
    pub fn write_file(&self, path: &Path) -> Result<(), SceneError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Visit every selected item, including selected children of groups.
    ///
    /// Items are visited in document order, a selected group before its
    /// children.
    pub fn for_each_selected_mut(&mut self, mut f: impl FnMut(&mut SceneItem)) {
        visit_selected_mut(&mut self.items, &mut f);
    }

    /// Number of selected items, including selected children of groups
    pub fn selected_count(&self) -> usize {
        count_selected(&self.items)
    }

    /// First selected item in visiting order
    pub fn first_selected(&self) -> Option<&SceneItem> {
        find_selected(&self.items)
    }

    /// Summary of the first selected item, if any
    pub fn summary(&self) -> Option<SelectionSummary> {
        self.first_selected().map(SelectionSummary::from_item)
    }

    /// Look up an item by name at any depth
    pub fn get_item(&self, name: &str) -> Option<&SceneItem> {
        find_by_name(&self.items, name)
    }
}

fn visit_selected_mut(items: &mut [SceneItem], f: &mut impl FnMut(&mut SceneItem)) {
    for item in items {
        if item.selected {
            f(item);
        }
        visit_selected_mut(&mut item.children, f);
    }
}

fn count_selected(items: &[SceneItem]) -> usize {
    items
        .iter()
        .map(|item| usize::from(item.selected) + count_selected(&item.children))
        .sum()
}

fn find_selected(items: &[SceneItem]) -> Option<&SceneItem> {
    for item in items {
        if item.selected {
            return Some(item);
        }
        if let Some(found) = find_selected(&item.children) {
            return Some(found);
        }
    }
    None
}

fn find_by_name<'a>(items: &'a [SceneItem], name: &str) -> Option<&'a SceneItem> {
    for item in items {
        if item.name == name {
            return Some(item);
        }
        if let Some(found) = find_by_name(&item.children, name) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
[canvas]
width = 1280
height = 720

[layout]
fallback_size = { width = 64.0, height = 64.0 }

[[items]]
name = "background"
intrinsic = { width = 1280.0, height = 720.0 }
position = { x = 640.0, y = 360.0 }

[[items]]
name = "webcam"
selected = true
intrinsic = { width = 640.0, height = 480.0 }
scale = { x = 0.5, y = 0.5 }
position = { x = 10.0, y = 10.0 }
alignment = 5

[[items]]
name = "overlay"
visible = false

[[items.children]]
name = "ticker"
selected = true
intrinsic = { width = 1280.0, height = 40.0 }
bounds_type = "stretch"
bounds = { width = 1280.0, height = 40.0 }
"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_str(SCENE).expect("Should parse");
        assert_eq!(scene.canvas, Canvas::new(1280, 720));
        assert_eq!(scene.layout.fallback_size, Size::new(64.0, 64.0));
        assert_eq!(scene.items.len(), 3);

        let webcam = scene.get_item("webcam").unwrap();
        assert_eq!(webcam.alignment, Alignment::LEFT | Alignment::TOP);
        assert!(webcam.visible);
        assert!(webcam.persistent);

        let overlay = scene.get_item("overlay").unwrap();
        assert!(!overlay.visible);
        assert!(overlay.is_group());
        assert_eq!(overlay.scale, Point::splat(1.0));

        let ticker = scene.get_item("ticker").unwrap();
        assert_eq!(ticker.bounds_type, BoundsType::Stretch);
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let scene = Scene::from_str("").expect("Empty scene should parse");
        assert_eq!(scene.canvas, Canvas::new(1920, 1080));
        assert_eq!(scene.layout, LayoutConfig::default());
        assert!(scene.items.is_empty());
    }

    #[test]
    fn test_selection_includes_group_children() {
        let mut scene = Scene::from_str(SCENE).unwrap();
        assert_eq!(scene.selected_count(), 2);

        let mut visited = vec![];
        scene.for_each_selected_mut(|item| visited.push(item.name.clone()));
        assert_eq!(visited, vec!["webcam", "ticker"]);
    }

    #[test]
    fn test_summary_of_first_selected() {
        let scene = Scene::from_str(SCENE).unwrap();
        let summary = scene.summary().unwrap();
        assert_eq!(summary.name, "webcam");
        assert_eq!((summary.x, summary.y), (10, 10));
        assert_eq!((summary.width, summary.height), (320, 240));
        assert_eq!(
            summary.to_string(),
            "webcam: pos=(10, 10) size=320x240 align=top-left"
        );
    }

    #[test]
    fn test_summary_none_without_selection() {
        let scene = Scene::new(Canvas::default())
            .with_item(SceneItem::new("a", Size::new(1.0, 1.0)));
        assert!(scene.summary().is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut item = SceneItem::new("logo", Size::new(200.0, 100.0))
            .with_position(Point::new(960.0, 540.0))
            .selected();
        item.settings.insert("anchorMinX".to_string(), 0.5);
        let scene = Scene::new(Canvas::new(1920, 1080))
            .with_item(item)
            .with_item(SceneItem::new("hidden", Size::new(1.0, 1.0)).non_persistent());

        let text = scene.to_toml().expect("Should serialize");
        let back = Scene::from_str(&text).expect("Should parse back");
        assert_eq!(back, scene);
    }

    #[test]
    fn test_non_persistent_item_has_no_store() {
        let mut item = SceneItem::new("volatile", Size::new(1.0, 1.0)).non_persistent();
        assert!(item.settings().is_none());
        assert!(item.settings_mut().is_none());
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let path = std::env::temp_dir().join("anchor-layout-missing/scene.toml");
        let result = Scene::from_file(&path);
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_write_file_into_missing_dir_is_io_error() {
        let path = std::env::temp_dir().join("anchor-layout-missing/out.toml");
        let result = Scene::new(Canvas::default()).write_file(&path);
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("anchor-layout-{}.toml", std::process::id()));
        let scene = Scene::from_str(SCENE).unwrap();

        scene.write_file(&path).expect("Should write");
        let back = Scene::from_file(&path).expect("Should read back");
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, scene);
    }

    #[test]
    fn test_invalid_scene_is_error() {
        let result = Scene::from_str("[canvas]\nwidth = \"wide\"");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }
}
