//! End-to-end edits of TOML scenes

use pretty_assertions::assert_eq;

use anchor_layout::layout::{AnchorH, AnchorV, Point, Size};
use anchor_layout::target::{Alignment, BoundsType};
use anchor_layout::{edit_scene, Edit, EditConfig, Modifiers, PresetRequest, Scene};

const SCENE: &str = r#"
[canvas]
width = 1920
height = 1080

[[items]]
name = "background"
intrinsic = { width = 1920.0, height = 1080.0 }
position = { x = 960.0, y = 540.0 }

[[items]]
name = "webcam"
selected = true
intrinsic = { width = 640.0, height = 480.0 }
scale = { x = 0.5, y = 0.5 }
position = { x = 960.0, y = 540.0 }

[[items]]
name = "overlay"

[[items.children]]
name = "ticker"
selected = true
intrinsic = { width = 1920.0, height = 40.0 }
position = { x = 960.0, y = 1060.0 }
"#;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn edit(edits: &[Edit]) -> Scene {
    init_logger();
    let out = edit_scene(SCENE, edits, &EditConfig::new().with_debug(true)).expect("Should edit");
    Scene::from_str(&out).expect("Output should parse")
}

#[test]
fn test_unselected_items_are_untouched() {
    let before = Scene::from_str(SCENE).unwrap();
    let after = edit(&[Edit::Preset {
        request: PresetRequest::new(AnchorH::Left, AnchorV::Top),
        modifiers: Modifiers::BOTH,
    }]);

    assert_eq!(after.get_item("background"), before.get_item("background"));
    assert_eq!(after.canvas, before.canvas);
}

#[test]
fn test_bottom_stretch_lower_third() {
    let scene = edit(&[Edit::Preset {
        request: "bottom-stretch".parse().expect("Should parse"),
        modifiers: Modifiers::BOTH,
    }]);

    let ticker = scene.get_item("ticker").unwrap();
    assert_eq!(ticker.bounds_type, BoundsType::Stretch);
    assert_eq!(ticker.bounds, Size::new(1920.0, 40.0));
    assert_eq!(ticker.alignment, Alignment::BOTTOM);
    assert_eq!(ticker.position, Point::new(960.0, 1080.0));

    let webcam = scene.get_item("webcam").unwrap();
    assert_eq!(webcam.bounds, Size::new(1920.0, 240.0));
    assert_eq!(webcam.settings.get("anchorMaxX"), Some(&1.0));
    assert_eq!(webcam.settings.get("pivotY"), Some(&0.0));
}

#[test]
fn test_summary_after_edits() {
    let scene = edit(&[
        Edit::Preset {
            request: PresetRequest::new(AnchorH::Right, AnchorV::Top),
            modifiers: Modifiers::BOTH,
        },
        Edit::Rename("camera".to_string()),
        Edit::SetVisible(false),
    ]);

    let summary = scene.summary().expect("Selection should survive");
    insta::assert_snapshot!(
        summary.to_string(),
        @"camera: pos=(1920, 0) size=320x240 align=top-right hidden"
    );
}

#[test]
fn test_resize_then_preset_uses_new_size() {
    let scene = edit(&[
        Edit::Resize(Size::new(400.0, 300.0)),
        Edit::Preset {
            request: PresetRequest::new(AnchorH::Center, AnchorV::Middle),
            modifiers: Modifiers::BOTH,
        },
    ]);

    let webcam = scene.get_item("webcam").unwrap();
    assert_eq!(webcam.scale, Point::new(0.625, 0.625));
    assert_eq!(webcam.bounds, Size::new(400.0, 300.0));
    assert_eq!(webcam.position, Point::new(960.0, 540.0));
}

#[test]
fn test_output_is_stable_without_edits() {
    let once = edit_scene(SCENE, &[], &EditConfig::new()).unwrap();
    let twice = edit_scene(&once, &[], &EditConfig::new()).unwrap();
    assert_eq!(once, twice);
}
