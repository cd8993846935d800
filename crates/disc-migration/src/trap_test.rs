use approx::assert_relative_eq;

use crate::trap::trap_factor;

const H: f64 = 0.05;
const EDGE: f64 = 1.0;

#[test]
fn test_outside_the_zone_is_undisturbed() {
    for r in [1.06, 1.1, 2.0, 30.0] {
        assert_eq!(trap_factor(r, H, EDGE), 1.0);
    }
}

#[test]
fn test_inside_the_edge_is_fully_reversed() {
    for r in [0.94, 0.9, 0.5, 1e-3] {
        assert_eq!(trap_factor(r, H, EDGE), -10.0);
    }
}

#[test]
fn test_edge_itself() {
    assert_relative_eq!(trap_factor(EDGE, H, EDGE), -4.5, epsilon = 1e-12);
    assert_relative_eq!(trap_factor(0.3, 0.2, 0.3), -4.5, epsilon = 1e-12);
}

#[test]
fn test_continuous_at_both_boundaries() {
    let outer = EDGE * (1.0 + H);
    let inner = EDGE * (1.0 - H);
    let eps = 1e-9;

    assert_relative_eq!(trap_factor(outer - eps, H, EDGE), 1.0, epsilon = 1e-6);
    assert_relative_eq!(trap_factor(inner + eps, H, EDGE), -10.0, epsilon = 1e-6);
}

#[test]
fn test_monotonic_across_the_zone() {
    let samples: Vec<f64> = (0..=200)
        .map(|i| 0.9 + 0.2 * i as f64 / 200.0)
        .map(|r| trap_factor(r, H, EDGE))
        .collect();

    assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(samples.first(), Some(&-10.0));
    assert_eq!(samples.last(), Some(&1.0));
}
