use super::*;

#[test]
fn accumulates_half_of_delta() {
    let s = advance(SurfaceUniformState::default(), 0.5);
    assert_eq!(s.time, 0.25);
}

#[test]
fn n_uniform_frames_sum_to_n_d_over_two() {
    for (n, d) in [(1u32, 0.016), (60, 1.0 / 60.0), (10_000, 1.0 / 144.0)] {
        let mut s = SurfaceUniformState::default();
        for _ in 0..n {
            s = advance(s, d);
        }
        let expected = f64::from(n) * d / 2.0;
        assert!((s.time - expected).abs() < 1e-9, "n={n} d={d}");
    }
}

#[test]
fn wrap_period_bounds_accumulator() {
    let anim = SurfaceAnimator {
        wrap_period: Some(10.0),
        ..SurfaceAnimator::default()
    };
    let mut s = SurfaceUniformState::default();
    for _ in 0..100 {
        s = anim.advance(s, 1.0);
        assert!((0.0..10.0).contains(&s.time));
    }
    // 100 frames * 0.5 = 50 → wraps to 0.
    assert!(s.time.abs() < 1e-9);
}

#[test]
fn validation() {
    SurfaceAnimator::default().validate().unwrap();
    let bad = SurfaceAnimator {
        wrap_period: Some(0.0),
        ..SurfaceAnimator::default()
    };
    assert!(bad.validate().is_err());
    let bad = SurfaceAnimator {
        time_scale: f64::NAN,
        ..SurfaceAnimator::default()
    };
    assert!(bad.validate().is_err());
}
