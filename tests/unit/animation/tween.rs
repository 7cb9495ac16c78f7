use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn rejects_degenerate_input() {
    assert!(Tween::new(vec![1.0], 1.0, Ease::Linear, Repeat::Count(0)).is_err());
    assert!(Tween::new(vec![0.0, f64::NAN], 1.0, Ease::Linear, Repeat::Count(0)).is_err());
    assert!(Tween::new(vec![0.0, 1.0], 0.0, Ease::Linear, Repeat::Count(0)).is_err());
    assert!(Tween::new(vec![0.0, 1.0], f64::INFINITY, Ease::Linear, Repeat::Infinite).is_err());
}

#[test]
fn single_shot_holds_endpoints() {
    let tw = Tween::to(10.0, 0.0, 2.0, Ease::Linear).unwrap();
    assert_eq!(tw.sample(-1.0), 10.0);
    assert_eq!(tw.sample(0.0), 10.0);
    assert!(approx(tw.sample(1.0), 5.0));
    assert_eq!(tw.sample(2.0), 0.0);
    assert_eq!(tw.sample(50.0), 0.0);
    assert!(tw.is_finished(2.0));
    assert!(!tw.is_finished(1.999));
}

#[test]
fn keyframes_are_spread_evenly() {
    let tw = Tween::new(vec![-20.0, 0.0, -20.0], 2.0, Ease::Linear, Repeat::Count(0)).unwrap();
    assert!(approx(tw.sample(0.5), -10.0));
    assert!(approx(tw.sample(1.0), 0.0));
    assert!(approx(tw.sample(1.5), -10.0));
}

#[test]
fn ease_applies_per_segment() {
    let tw = Tween::new(vec![0.0, 1.0, 0.0], 2.0, Ease::OutCubic, Repeat::Count(0)).unwrap();
    // Halfway through the first segment.
    assert!(approx(tw.sample(0.5), 0.875));
    // Halfway through the second segment (descending).
    assert!(approx(tw.sample(1.5), 0.125));
}

#[test]
fn infinite_repeat_is_periodic() {
    let tw = Tween::new(vec![-20.0, 0.0, -20.0], 2.0, Ease::InOut, Repeat::Infinite).unwrap();
    assert_eq!(tw.total_duration(), None);
    assert!(!tw.is_finished(1.0e9));
    for t in [0.1, 0.7, 1.3, 1.9] {
        assert!(approx(tw.sample(t), tw.sample(t + 2.0)));
        assert!(approx(tw.sample(t), tw.sample(t + 2000.0)));
    }
}

#[test]
fn finite_repeat_counts_iterations() {
    let tw = Tween::new(vec![0.0, 1.0], 1.0, Ease::Linear, Repeat::Count(2)).unwrap();
    assert_eq!(tw.total_duration(), Some(3.0));
    assert!(approx(tw.sample(1.5), 0.5));
    assert!(approx(tw.sample(2.25), 0.25));
    assert_eq!(tw.sample(3.0), 1.0);
}
