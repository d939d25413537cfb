//! Tests for destination area-field loading.

use esmf_parser::AreaField;
use test_utils::{assert_approx_eq, write_area_file, write_area_file_with_fill};
use xgrid_common::{CellIndex, GridShape, XgridError};

#[test]
fn test_load_and_index_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    // 3x2 grid, j outermost: row j=1 then row j=2.
    write_area_file(&path, "areacello", 3, 2, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]).unwrap();

    let area = AreaField::from_file(&path, "areacello", GridShape::new(3, 2)).unwrap();

    assert_approx_eq!(area.get(CellIndex { i: 1, j: 1 }), 10.0, 1e-12);
    assert_approx_eq!(area.get(CellIndex { i: 3, j: 1 }), 30.0, 1e-12);
    assert_approx_eq!(area.get(CellIndex { i: 1, j: 2 }), 40.0, 1e-12);
    assert_approx_eq!(area.get(CellIndex { i: 3, j: 2 }), 60.0, 1e-12);
}

#[test]
fn test_nan_cells_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    write_area_file(&path, "areacello", 2, 1, &[f64::NAN, 5.0]).unwrap();

    let area = AreaField::from_file(&path, "areacello", GridShape::new(2, 1)).unwrap();

    assert!(area.get(CellIndex { i: 1, j: 1 }).is_nan());
    assert_approx_eq!(area.get(CellIndex { i: 2, j: 1 }), 5.0, 1e-12);
}

#[test]
fn test_fill_value_mapped_to_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    write_area_file_with_fill(&path, "areacello", 2, 1, &[1.0e20, 5.0], 1.0e20).unwrap();

    let area = AreaField::from_file(&path, "areacello", GridShape::new(2, 1)).unwrap();

    assert!(area.get(CellIndex { i: 1, j: 1 }).is_nan());
    assert_approx_eq!(area.get(CellIndex { i: 2, j: 1 }), 5.0, 1e-12);
}

#[test]
fn test_caller_chosen_variable_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    write_area_file(&path, "cell_area", 1, 1, &[42.0]).unwrap();

    let area = AreaField::from_file(&path, "cell_area", GridShape::new(1, 1)).unwrap();
    assert_approx_eq!(area.get(CellIndex { i: 1, j: 1 }), 42.0, 1e-12);
}

#[test]
fn test_missing_variable_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    write_area_file(&path, "areacello", 1, 1, &[42.0]).unwrap();

    let err = AreaField::from_file(&path, "cell_area", GridShape::new(1, 1)).unwrap_err();
    match err {
        XgridError::MissingVariable { var, .. } => assert_eq!(var, "cell_area"),
        other => panic!("expected MissingVariable, got {:?}", other),
    }
}

#[test]
fn test_shape_mismatch_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.nc");
    write_area_file(&path, "areacello", 3, 2, &[0.0; 6]).unwrap();

    let err = AreaField::from_file(&path, "areacello", GridShape::new(2, 3)).unwrap_err();
    assert!(matches!(err, XgridError::ShapeMismatch { .. }));
}

#[test]
fn test_in_memory_length_check() {
    let err = AreaField::new(GridShape::new(2, 2), vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, XgridError::ShapeMismatch { .. }));
}
