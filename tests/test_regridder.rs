use ndarray::{Array1, Array2};

use agg_regrid::grid::{SourceGrid, TargetGrid};
use agg_regrid::{IdentityProjector, RegridError, aggregate, make_regridder};

fn source_grid() -> SourceGrid {
    SourceGrid::new(
        Array1::linspace(0.5, 7.5, 8),
        Array1::linspace(0.5, 5.5, 6),
        Array1::linspace(0.0, 8.0, 9),
        Array1::linspace(0.0, 6.0, 7),
        "EPSG:4326",
    )
}

fn target_grid() -> TargetGrid {
    let x_edges = [1.5, 4.0, 6.5];
    let y_edges = [1.5, 3.0, 4.5];
    let gx = Array2::from_shape_fn((3, 3), |(_, j)| x_edges[j]);
    let gy = Array2::from_shape_fn((3, 3), |(i, _)| y_edges[i]);
    TargetGrid::new(gx, gy, "EPSG:4326")
}

#[test]
fn regrid_matches_direct_aggregate() {
    let src = source_grid();
    let tgt = target_grid();
    let data = Array2::from_shape_fn((6, 8), |(row, col)| (row * 8 + col) as f64).into_dyn();

    let regridder = make_regridder(src.clone(), tgt.clone(), IdentityProjector).unwrap();
    let via_facade = regridder
        .regrid(
            data.view(),
            None,
            src.x_points.view(),
            src.y_points.view(),
            1,
            0,
        )
        .unwrap();

    let direct = aggregate(
        data.view(),
        None,
        src.x_points.view(),
        src.x_bounds.view(),
        src.y_points.view(),
        src.y_bounds.view(),
        1,
        0,
        tgt.x_bounds.view(),
        tgt.y_bounds.view(),
    )
    .unwrap();

    assert_eq!(via_facade, direct);
}

#[test]
fn regrid_repeated_calls() {
    let src = source_grid();
    let tgt = target_grid();
    let data = Array2::from_shape_fn((6, 8), |(row, col)| (row * 8 + col) as f64).into_dyn();
    let regridder = make_regridder(src.clone(), tgt, IdentityProjector).unwrap();

    let first = regridder
        .regrid(
            data.view(),
            None,
            src.x_points.view(),
            src.y_points.view(),
            1,
            0,
        )
        .unwrap();
    let second = regridder
        .regrid(
            data.view(),
            None,
            src.x_points.view(),
            src.y_points.view(),
            1,
            0,
        )
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn regrid_grid_mismatch() {
    let src = source_grid();
    let tgt = target_grid();
    let data = Array2::from_shape_fn((6, 8), |(row, col)| (row * 8 + col) as f64).into_dyn();
    let regridder = make_regridder(src, tgt, IdentityProjector).unwrap();

    let other_x_points = Array1::linspace(10.5, 17.5, 8);
    let other_y_points = Array1::linspace(0.5, 5.5, 6);
    let err = regridder
        .regrid(
            data.view(),
            None,
            other_x_points.view(),
            other_y_points.view(),
            1,
            0,
        )
        .unwrap_err();
    assert_eq!(err, RegridError::GridMismatch);
}

#[test]
fn regrid_missing_source_crs() {
    let src = SourceGrid::new(
        Array1::linspace(0.5, 7.5, 8),
        Array1::linspace(0.5, 5.5, 6),
        Array1::linspace(0.0, 8.0, 9),
        Array1::linspace(0.0, 6.0, 7),
        "",
    );
    let tgt = target_grid();
    let err = make_regridder(src, tgt, IdentityProjector).unwrap_err();
    assert_eq!(err, RegridError::MissingCrs { grid: "source" });
}

#[test]
fn regrid_missing_target_crs() {
    let src = source_grid();
    let x_edges = [1.5, 4.0, 6.5];
    let y_edges = [1.5, 3.0, 4.5];
    let gx = Array2::from_shape_fn((3, 3), |(_, j)| x_edges[j]);
    let gy = Array2::from_shape_fn((3, 3), |(i, _)| y_edges[i]);
    let tgt = TargetGrid::new(gx, gy, "");
    let err = make_regridder(src, tgt, IdentityProjector).unwrap_err();
    assert_eq!(err, RegridError::MissingCrs { grid: "target" });
}
