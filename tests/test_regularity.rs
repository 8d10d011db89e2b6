use ndarray::Array1;

use agg_regrid::RegridError;
use agg_regrid::grid::{DEFAULT_REGULAR_RTOL, origin_and_step};

#[test]
fn regularity_accepts_regular_spacing() {
    let points = Array1::linspace(0.5, 7.5, 8);
    let bounds = Array1::linspace(0.0, 8.0, 9);
    let (origin, step) = origin_and_step(points.view(), bounds.view(), "x", DEFAULT_REGULAR_RTOL)
        .unwrap();
    assert!((origin - 0.0).abs() < 1e-12);
    assert!((step - 1.0).abs() < 1e-12);
}

#[test]
fn regularity_rejects_large_perturbation() {
    let mut points = Array1::linspace(0.5, 7.5, 8);
    // nudge one interior point well past the 0.2% relative tolerance
    points[4] += 0.05;
    let bounds = Array1::linspace(0.0, 8.0, 9);

    let err = origin_and_step(points.view(), bounds.view(), "x", DEFAULT_REGULAR_RTOL)
        .unwrap_err();
    match err {
        RegridError::IrregularGrid { axis, .. } => assert_eq!(axis, "x"),
        other => panic!("expected IrregularGrid, got {other:?}"),
    }
}

#[test]
fn regularity_accepts_small_perturbation() {
    // the default tolerance is 0.2% relative to the mean spacing (1.0
    // here); a 0.05% nudge should comfortably pass.
    let mut points = Array1::linspace(0.5, 7.5, 8);
    points[4] += 0.0005;
    let bounds = Array1::linspace(0.0, 8.0, 9);

    let result = origin_and_step(points.view(), bounds.view(), "x", DEFAULT_REGULAR_RTOL);
    assert!(result.is_ok());
}
