use super::*;

#[test]
fn rgb_parsing() {
    assert_eq!(
        Rgb8::parse_hex("#00ffff").unwrap(),
        Rgb8 {
            r: 0,
            g: 255,
            b: 255
        }
    );
    assert_eq!(Rgb8::parse_hex("001e0f").unwrap(), Rgb8::from_u32(0x001e0f));
    assert!(Rgb8::parse_hex("#fff").is_err());
    assert!(Rgb8::parse_hex("#gg0000").is_err());
    assert_eq!(Rgb8::from_u32(0xffffff).to_f32(), [1.0, 1.0, 1.0]);
}

#[test]
fn defaults_validate() {
    WaterParams::default().validate().unwrap();
    SkyParams::default().validate().unwrap();
    Lighting::default().validate().unwrap();
}

#[test]
fn water_defaults_match_scene() {
    let w = WaterParams::default();
    assert_eq!(w.texture_size, 512);
    assert_eq!(w.distortion_scale, 3.7);
    assert_eq!(w.elevation, -5.0);
    assert_eq!(w.water_color, Rgb8::from_u32(0x001e0f));
}

#[test]
fn invalid_values_are_rejected() {
    let w = WaterParams {
        tint: "blue".to_string(),
        ..WaterParams::default()
    };
    assert!(w.validate().is_err());

    let s = SkyParams {
        turbidity: -1.0,
        ..SkyParams::default()
    };
    assert!(s.validate().is_err());

    let l = Lighting {
        point_position: Vec3::new(f64::INFINITY, 0.0, 0.0),
        ..Lighting::default()
    };
    assert!(l.validate().is_err());
}
