// Host-side integration tests for scene composition and per-frame updates.

use glam::Vec3;
use heimer_core::gpu::{InstanceRaw, SceneUniforms};
use heimer_core::scene::word_anchors;
use heimer_core::{
    Environment, FrameTime, OrbitControls, Scene, SceneConfig, SceneError, SCENE_WGSL,
};

fn heimer() -> Scene {
    Scene::new(&SceneConfig::default(), 42).expect("default config is valid")
}

#[test]
fn word_anchors_match_page_layout() {
    let xs: Vec<f32> = word_anchors(6, 2.5).iter().map(|v| v.x).collect();
    assert_eq!(xs, vec![-6.25, -3.75, -1.25, 1.25, 3.75, 6.25]);
    assert_eq!(word_anchors(1, 2.5), vec![Vec3::ZERO]);
    assert!(word_anchors(0, 2.5).is_empty());
}

#[test]
fn composes_heimer_with_dangling_line() {
    let scene = heimer();
    let word: String = scene.letters().iter().map(|l| l.letter()).collect();
    assert_eq!(word, "HEIMER");
    assert!(scene.letters().iter().all(|l| l.enable_random_movement()));
    assert_eq!(scene.letters()[0].anchor(), Vec3::new(-6.25, 0.0, 0.0));

    let dangling = scene.dangling().expect("dangling text");
    let text: String = dangling.letters().iter().map(|l| l.letter()).collect();
    assert_eq!(text, "SOFTWAREDEVELOPER");
    assert_eq!(dangling.anchor(), Vec3::new(0.0, -3.5, 0.0));
    assert!((dangling.scale() - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(scene.group_yaw(), 0.0);
    assert_eq!(scene.interaction().auto_rotate_speed(), 0.5);
}

#[test]
fn idle_frame_after_throttle_moves_every_letter() {
    let mut scene = heimer();
    scene.advance(FrameTime::new(0.016, 0.016));
    for l in scene.letters() {
        let off = l.position() - l.anchor();
        assert!(off != Vec3::ZERO, "{} did not drift", l.letter());
    }
}

#[test]
fn interacting_frame_keeps_letters_at_anchor() {
    let mut scene = heimer();
    let mut orbit = OrbitControls::default();
    scene.begin_drag(&mut orbit, 0.0);
    assert!(scene.is_interacting());
    assert!(!orbit.auto_rotate);

    let mut t = FrameTime::default();
    for _ in 0..120 {
        t = t.step(1.0 / 60.0);
        scene.advance(t);
        for l in scene.letters() {
            assert_eq!(l.position(), l.anchor());
        }
        let d = scene.dangling().unwrap();
        assert_eq!(d.swing_angle(), 0.0);
        assert_eq!(d.float_offset(), Vec3::ZERO);
    }

    scene.end_drag(&mut orbit, 2.0);
    assert!(!scene.is_interacting());
    assert!(orbit.auto_rotate);
    scene.advance(t.step(1.0 / 60.0));
    assert!(scene.letters().iter().any(|l| l.position() != l.anchor()));
}

#[test]
fn release_speed_is_pushed_to_orbit() {
    let mut scene = heimer();
    let mut orbit = OrbitControls::default();
    scene.begin_drag(&mut orbit, 10.0);
    orbit.rotate(-0.5, 0.0); // azimuth +0.5
    scene.end_drag(&mut orbit, 10.5);
    assert_eq!(orbit.auto_rotate_speed, -0.5);
    assert_eq!(scene.interaction().auto_rotate_speed(), -0.5);
}

#[test]
fn same_seed_same_animation() {
    let mut a = heimer();
    let mut b = heimer();
    let mut c = Scene::new(&SceneConfig::default(), 7).unwrap();
    let t = FrameTime::new(1.0, 0.016);
    a.advance(t);
    b.advance(t);
    c.advance(t);
    let pa: Vec<Vec3> = a.letters().iter().map(|l| l.position()).collect();
    let pb: Vec<Vec3> = b.letters().iter().map(|l| l.position()).collect();
    let pc: Vec<Vec3> = c.letters().iter().map(|l| l.position()).collect();
    assert_eq!(pa, pb);
    assert_ne!(pa, pc);
}

#[test]
fn box_instances_cover_every_cell() {
    let scene = heimer();
    let boxes = scene.box_instances();
    assert_eq!(boxes.len(), scene.box_count());
    let word_cells: usize = scene.letters().iter().map(|l| l.boxes().len()).sum();
    // H=13, E=10, I=9, M=13, E=10, R=12
    assert_eq!(word_cells, 67);

    // first H cell: top-left of the letter anchored at -6.25
    let first = boxes[0].primitive.position;
    assert!((first - Vec3::new(-7.25, 1.0, 0.0)).length() < 1e-5);
    assert_eq!(boxes[0].primitive.size, 0.5);

    // dangling boxes sit a third of the size below the word
    let dangling = &boxes[word_cells..];
    assert!(!dangling.is_empty());
    assert!(dangling.iter().all(|b| b.primitive.position.y < -2.5));
    let s = dangling[0].model.x_axis.length();
    assert!((s - 1.0 / 3.0).abs() < 1e-5);
}

#[test]
fn group_yaw_rotates_instances() {
    let mut scene = heimer();
    scene.set_group_yaw(std::f32::consts::FRAC_PI_2);
    let first = scene.box_instances()[0].primitive.position;
    // x = -7.25 rotated a quarter turn about Y lands on +z
    assert!((first.z - 7.25).abs() < 1e-4, "{first:?}");
    assert!(first.x.abs() < 1e-4);
}

#[test]
fn dangling_swings_toward_group_yaw() {
    let mut scene = heimer();
    scene.set_group_yaw(0.6);
    let mut t = FrameTime::default();
    for _ in 0..600 {
        t = t.step(1.0 / 60.0);
        scene.advance(t);
    }
    let swing = scene.dangling().unwrap().swing_angle();
    assert!((swing - 0.6).abs() < 0.025, "swing {swing}");
}

#[test]
fn config_validation_rejects_bad_input() {
    let bad_color = SceneConfig {
        word_color: "blue".into(),
        ..SceneConfig::default()
    };
    assert_eq!(
        Scene::new(&bad_color, 0).err(),
        Some(SceneError::InvalidColor("blue".into()))
    );

    let empty = SceneConfig {
        word: "  ".into(),
        ..SceneConfig::default()
    };
    assert_eq!(empty.validate(), Err(SceneError::EmptyWord));

    let scale = SceneConfig {
        dangling_scale: 0.0,
        ..SceneConfig::default()
    };
    assert_eq!(scale.validate(), Err(SceneError::InvalidScale(0.0)));

    let throttle = SceneConfig {
        drift_interval: -1.0,
        ..SceneConfig::default()
    };
    assert_eq!(throttle.validate(), Err(SceneError::InvalidThrottle(-1.0)));
}

#[test]
fn scene_without_dangling_text() {
    let cfg = SceneConfig {
        word: "ox".into(),
        dangling_text: None,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(&cfg, 1).unwrap();
    scene.advance(FrameTime::new(0.5, 0.016));
    assert!(scene.dangling().is_none());
    assert_eq!(scene.letters().len(), 2);
    assert_eq!(scene.letters()[1].letter(), 'X');
    assert_eq!(scene.box_instances().len(), scene.box_count());
}

#[test]
fn gpu_layouts_pack_scene_state() {
    let scene = heimer();
    let boxes = scene.box_instances();
    let raw = InstanceRaw::from(&boxes[0]);
    assert_eq!(raw.color[3], 0.9);
    assert_eq!(raw.material, [0.1, 0.8, 0.5, 1.0]);
    assert_eq!(raw.model[3][0], boxes[0].model.w_axis.x);

    let cam = OrbitControls::default().camera(16.0 / 9.0);
    let u = SceneUniforms::new(&cam, scene.lighting(), false, 0.0);
    assert_eq!(u.params[0], 0.0);
    assert_eq!(u.ambient, [0.5, 0.5, 0.5, 1.0]);
    assert!((u.eye[2] - 15.0).abs() < 1e-4);
    assert_eq!(std::mem::size_of::<InstanceRaw>() % 16, 0);
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn shader_exposes_pipeline_entry_points() {
    for entry in ["vs_box", "fs_box", "vs_edge", "fs_edge", "vs_sky", "fs_sky"] {
        assert!(SCENE_WGSL.contains(&format!("fn {entry}(")), "missing {entry}");
    }
}

#[test]
fn environment_follows_device_class() {
    assert_eq!(Environment::for_device(true), Environment::Mobile);
    assert_eq!(Environment::for_device(false), Environment::Desktop);
    assert!(Environment::Mobile.url().starts_with("https://"));
    assert_ne!(Environment::Mobile.url(), Environment::Desktop.url());
}
