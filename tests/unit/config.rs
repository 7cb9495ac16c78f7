use super::*;

#[test]
fn default_matches_stock_scene() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.objects.len(), 3);
    assert_eq!(cfg.objects[1].position, Vec3::new(2.0, 1.0, -2.0));
    assert_eq!(cfg.objects[2].texture, DEFAULT_OBJECT_TEXTURE);
    assert_eq!(cfg.motion.bob_amplitude, 0.1);
    assert_eq!(cfg.surface.time_scale, 0.5);
    assert_eq!(cfg.sky.turbidity, 10.0);
    assert_eq!(cfg.overlay.button_keyframes, vec![-20.0, 0.0, -20.0]);
    assert_eq!(cfg.asset_policy, AssetPolicy::Fail);
}

#[test]
fn empty_json_is_default() {
    let cfg = SceneConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn partial_json_overrides_named_fields_only() {
    let json = r#"{
        "motion": { "spin_x": 0.4 },
        "surface": { "wrap_period": 3600.0 },
        "asset_policy": "Placeholder",
        "objects": [ { "position": { "x": 1.0, "y": 2.0, "z": 3.0 } } ]
    }"#;
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    cfg.validate().unwrap();

    assert_eq!(cfg.motion.spin_x, 0.4);
    assert_eq!(cfg.motion.spin_y, 0.1);
    assert_eq!(cfg.surface.wrap_period, Some(3600.0));
    assert_eq!(cfg.surface.time_scale, 0.5);
    assert_eq!(cfg.asset_policy, AssetPolicy::Placeholder);
    assert_eq!(cfg.objects.len(), 1);
    assert_eq!(cfg.objects[0].texture, DEFAULT_OBJECT_TEXTURE);
    assert_eq!(cfg.water, WaterParams::default());
}

#[test]
fn json_roundtrip_through_pretty_printer() {
    let cfg = SceneConfig::default();
    let text = cfg.to_json_pretty().unwrap();
    let back = SceneConfig::from_reader(text.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = SceneConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, SceneError::Serde(_)), "{err}");
}

#[test]
fn validation_catches_each_section() {
    let mut cfg = SceneConfig::default();
    cfg.objects[0].texture = " ".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.overlay.button_period = -2.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.sky.scale = 0.0;
    assert!(cfg.validate().is_err());
}
