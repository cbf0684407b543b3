use approx::assert_relative_eq;

use pixelpicker_core::consts::DEFAULT_ZOOM_STEP;
use pixelpicker_core::zoom::ZoomFactor;

#[test]
fn test_default_is_unit() {
    assert_eq!(ZoomFactor::default().value(), 1.0);
}

#[test]
fn test_new_rejects_non_positive() {
    assert!(ZoomFactor::new(0.0).is_none());
    assert!(ZoomFactor::new(-1.0).is_none());
    assert!(ZoomFactor::new(f64::NAN).is_none());
    assert!(ZoomFactor::new(f64::INFINITY).is_none());
    assert!(ZoomFactor::new(0.25).is_some());
}

#[test]
fn test_single_steps() {
    let mut z = ZoomFactor::default();
    z.zoom_in(DEFAULT_ZOOM_STEP);
    assert_relative_eq!(z.value(), 1.1);
    z.zoom_out(DEFAULT_ZOOM_STEP);
    z.zoom_out(DEFAULT_ZOOM_STEP);
    assert_relative_eq!(z.value(), 1.0 / 1.1);
}

#[test]
fn test_zoom_in_then_out_returns_to_start() {
    for steps in [1usize, 5, 20, 60] {
        let mut z = ZoomFactor::new(0.75).unwrap();
        for _ in 0..steps {
            z.zoom_in(DEFAULT_ZOOM_STEP);
        }
        for _ in 0..steps {
            z.zoom_out(DEFAULT_ZOOM_STEP);
        }
        assert_relative_eq!(z.value(), 0.75, max_relative = 1e-12);
    }
}

#[test]
fn test_zoom_is_unbounded() {
    let mut z = ZoomFactor::default();
    for _ in 0..100 {
        z.zoom_out(DEFAULT_ZOOM_STEP);
    }
    assert!(z.value() > 0.0);
    assert!(z.value() < 1e-3);
}

#[test]
fn test_reset() {
    let mut z = ZoomFactor::new(3.0).unwrap();
    z.reset();
    assert_eq!(z, ZoomFactor::default());
}

#[test]
fn test_display_as_percent() {
    assert_eq!(ZoomFactor::default().to_string(), "100%");
    assert_eq!(ZoomFactor::new(2.5).unwrap().to_string(), "250%");
}
