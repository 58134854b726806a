//! Anchor Layout - anchor/pivot layout for scene items
//!
//! This library positions and sizes items inside a container using a
//! normalized anchor-and-pivot model, maps that model onto host items with a
//! top-origin coordinate system and 3x3 alignment flags, and reconstructs the
//! model from an item's live geometry.
//!
//! # Example
//!
//! ```rust
//! use anchor_layout::layout::{Canvas, LayoutRect, Point, Size};
//! use anchor_layout::scene::SceneItem;
//! use anchor_layout::target::{apply_to_item, load_from_item};
//!
//! let canvas = Canvas::new(1920, 1080);
//! let rect = LayoutRect::centered(Size::new(200.0, 100.0));
//!
//! let mut item = SceneItem::new("logo", Size::new(400.0, 200.0));
//! apply_to_item(&rect, &mut item, canvas);
//! assert_eq!(item.position, Point::new(960.0, 540.0));
//!
//! let loaded = load_from_item(&item, canvas);
//! assert_eq!(loaded.size_delta, rect.size_delta);
//! ```

pub mod error;
pub mod layout;
pub mod preset;
pub mod scene;
pub mod target;

pub use error::SceneError;
pub use layout::{AnchorH, AnchorV, Canvas, LayoutConfig, LayoutRect, PresetRequest};
pub use preset::{Modifiers, PresetPolicy};
pub use scene::{Scene, SceneItem, SelectionSummary};
pub use target::{PositionableItem, SettingsStore};

use log::{debug, warn};

use layout::{FlipTransform, Point, Size};

/// A single edit applied to every selected item
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Apply an anchor preset under the given modifiers
    Preset {
        request: PresetRequest,
        modifiers: Modifiers,
    },
    /// Resize in the item's current sizing mode
    Resize(Size),
    /// Move the item's aligned point (top-origin)
    Move(Point),
    Rename(String),
    SetVisible(bool),
}

/// Configuration for the edit pipeline
#[derive(Debug, Clone, Default)]
pub struct EditConfig {
    /// Layout configuration; overrides the scene's `[layout]` table when set
    pub layout: Option<LayoutConfig>,
    /// Debug mode: log the selection before and after editing
    pub debug: bool,
}

impl EditConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = Some(config);
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Apply `edits` in order to every selected item of `scene`.
///
/// Each item goes through its own load/modify/apply cycle; items never
/// affect each other. Returns the number of selected items.
pub fn apply_edits(scene: &mut Scene, edits: &[Edit], config: &EditConfig) -> usize {
    let canvas = scene.canvas;
    let layout = config.layout.clone().unwrap_or_else(|| scene.layout.clone());

    if config.debug {
        log_selection(scene, "before");
    }

    let mut resize_skipped = 0;
    for edit in edits {
        scene.for_each_selected_mut(|item| match edit {
            Edit::Preset { request, modifiers } => {
                preset::apply_preset(item, *request, *modifiers, canvas, &layout);
            }
            Edit::Resize(size) => {
                if !target::resize_item(item, *size) {
                    resize_skipped += 1;
                }
            }
            Edit::Move(position) => target::move_item(item, *position),
            Edit::Rename(name) => item.name = name.clone(),
            Edit::SetVisible(visible) => item.visible = *visible,
        });
    }

    if resize_skipped > 0 {
        warn!(
            "{} item(s) could not be resized: zero intrinsic size and no bounds",
            resize_skipped
        );
    }

    if config.debug {
        log_selection(scene, "after");
    }

    scene.selected_count()
}

fn log_selection(scene: &mut Scene, stage: &str) {
    let canvas = scene.canvas;
    let flip = FlipTransform::for_canvas(canvas);
    scene.for_each_selected_mut(|item| {
        let rect = target::load_from_item(item, canvas);
        // Report the box the way the host shows it, top-left origin
        let shown = flip.rect_to_item(&rect.calculate_final_rect(canvas));
        debug!(
            "[{}] {} x={:.1} y={:.1} w={:.1} h={:.1} anchors=({}, {})-({}, {}) pivot=({}, {})",
            stage,
            item.name,
            shown.x,
            shown.y,
            shown.width,
            shown.height,
            rect.anchor_min.x,
            rect.anchor_min.y,
            rect.anchor_max.x,
            rect.anchor_max.y,
            rect.pivot.x,
            rect.pivot.y
        );
    });
}

/// Parse scene TOML, apply `edits` to the selection and serialize it back
///
/// # Example
///
/// ```rust
/// use anchor_layout::{edit_scene, Edit, EditConfig, Modifiers, PresetRequest, Scene};
///
/// let source = r#"
/// [canvas]
/// width = 1920
/// height = 1080
///
/// [[items]]
/// name = "logo"
/// selected = true
/// position = { x = 960.0, y = 540.0 }
/// intrinsic = { width = 200.0, height = 100.0 }
/// "#;
///
/// let edits = [Edit::Preset {
///     request: "top-left".parse().unwrap(),
///     modifiers: Modifiers::BOTH,
/// }];
/// let out = edit_scene(source, &edits, &EditConfig::new()).unwrap();
///
/// let scene = Scene::from_str(&out).unwrap();
/// assert_eq!(scene.items[0].position.x, 0.0);
/// assert_eq!(scene.items[0].position.y, 0.0);
/// ```
pub fn edit_scene(source: &str, edits: &[Edit], config: &EditConfig) -> Result<String, SceneError> {
    let mut scene = Scene::from_str(source)?;
    let count = apply_edits(&mut scene, edits, config);
    debug!("edited {} selected item(s)", count);
    scene.to_toml()
}
