use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn frame_tick_sanitizes_inputs() {
    let t = FrameTick::new(-1.0, f64::NAN);
    assert_eq!(t, FrameTick::default());

    let t = FrameTick::new(2.5, 0.016);
    assert_eq!(t.elapsed, 2.5);
    assert_eq!(t.delta, 0.016);
}

#[test]
fn wrap_angle_stays_in_range() {
    use std::f64::consts::TAU;

    assert_eq!(wrap_angle(0.0), 0.0);
    assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
    assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
}

#[test]
fn wrap_period_ignores_invalid_period() {
    assert_eq!(wrap_period(7.0, 0.0), 7.0);
    assert_eq!(wrap_period(7.0, -1.0), 7.0);
    assert_eq!(wrap_period(7.0, f64::INFINITY), 7.0);
    assert_eq!(wrap_period(7.0, 5.0), 2.0);
}

#[test]
fn vec3_helpers() {
    let v = Vec3::from([2.0, 1.0, -2.0]);
    assert_eq!(v, Vec3::new(2.0, 1.0, -2.0));
    assert_eq!(v.with_y(3.0), Vec3::new(2.0, 3.0, -2.0));
    assert!(v.is_finite());
    assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
    assert_eq!(Vec3::splat(1.1), Vec3::new(1.1, 1.1, 1.1));
}
