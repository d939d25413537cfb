//! Tests for ESMF weight file loading against synthetic files.

use esmf_parser::load_weights;
use test_utils::{write_weight_file, write_weight_file_with_dims};
use xgrid_common::{GridShape, XgridError};

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_load_two_entry_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    write_weight_file(&path, &[1, 1], &[1, 2], &[0.5, 0.5]).unwrap();

    let weights = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap();

    assert_eq!(weights.rows(), 1);
    assert_eq!(weights.cols(), 4);
    assert_eq!(weights.nnz(), 2);
    assert_eq!(weights.get(0, 0), Some(&0.5));
    assert_eq!(weights.get(0, 1), Some(&0.5));
    assert_eq!(weights.get(0, 2), None);
}

#[test]
fn test_indices_become_zero_based() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    // Last cell of a 2x2 destination, last cell of a 3x1 source.
    write_weight_file(&path, &[4], &[3], &[1.0]).unwrap();

    let weights = load_weights(&path, GridShape::new(3, 1), GridShape::new(2, 2)).unwrap();

    assert_eq!(weights.get(3, 2), Some(&1.0));
}

#[test]
fn test_duplicate_entries_are_summed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    write_weight_file(&path, &[1, 1, 2], &[1, 1, 1], &[0.25, 0.25, 1.0]).unwrap();

    let weights = load_weights(&path, GridShape::new(1, 1), GridShape::new(2, 1)).unwrap();

    assert_eq!(weights.nnz(), 2);
    assert_eq!(weights.get(0, 0), Some(&0.5));
    assert_eq!(weights.get(1, 0), Some(&1.0));
}

#[test]
fn test_grid_dims_accepted_when_matching() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    write_weight_file_with_dims(&path, &[1], &[1], &[1.0], [2, 2], [1, 1]).unwrap();

    let weights = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap();
    assert_eq!(weights.nnz(), 1);
}

// ============================================================================
// Bounds validation
// ============================================================================

#[test]
fn test_row_above_range_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    write_weight_file(&path, &[5], &[1], &[1.0]).unwrap();

    let err = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap_err();
    match err {
        XgridError::IndexOutOfRange { field, value, max } => {
            assert_eq!(field, "row");
            assert_eq!(value, 5);
            assert_eq!(max, 1);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_row_zero_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    // 1-based format, so 0 is below range, not "first cell".
    write_weight_file(&path, &[0], &[1], &[1.0]).unwrap();

    let err = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap_err();
    assert!(matches!(err, XgridError::IndexOutOfRange { field: "row", .. }));
}

#[test]
fn test_col_above_range_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    write_weight_file(&path, &[1], &[9], &[1.0]).unwrap();

    let err = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap_err();
    assert!(matches!(err, XgridError::IndexOutOfRange { field: "col", .. }));
}

// ============================================================================
// Format validation
// ============================================================================

#[test]
fn test_missing_weight_variable_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("n_s", 1).unwrap();
        let mut row_var = file.add_variable::<i32>("row", &["n_s"]).unwrap();
        row_var.put_values(&[1i32], ..).unwrap();
        let mut col_var = file.add_variable::<i32>("col", &["n_s"]).unwrap();
        col_var.put_values(&[1i32], ..).unwrap();
        // No S variable.
    }

    let err = load_weights(&path, GridShape::new(1, 1), GridShape::new(1, 1)).unwrap_err();
    match err {
        XgridError::MissingVariable { var, .. } => assert_eq!(var, "S"),
        other => panic!("expected MissingVariable, got {:?}", other),
    }
}

#[test]
fn test_unequal_array_lengths_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("n_s", 2).unwrap();
        file.add_dimension("n_k", 1).unwrap();
        let mut row_var = file.add_variable::<i32>("row", &["n_s"]).unwrap();
        row_var.put_values(&[1i32, 1], ..).unwrap();
        let mut col_var = file.add_variable::<i32>("col", &["n_s"]).unwrap();
        col_var.put_values(&[1i32, 1], ..).unwrap();
        let mut s_var = file.add_variable::<f64>("S", &["n_k"]).unwrap();
        s_var.put_values(&[1.0f64], ..).unwrap();
    }

    let err = load_weights(&path, GridShape::new(1, 1), GridShape::new(1, 1)).unwrap_err();
    assert!(matches!(err, XgridError::InvalidFormat(_)));
}

#[test]
fn test_grid_dims_mismatch_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.nc");
    // File says the source grid was 4x4; the caller claims 2x2.
    write_weight_file_with_dims(&path, &[1], &[1], &[1.0], [4, 4], [1, 1]).unwrap();

    let err = load_weights(&path, GridShape::new(2, 2), GridShape::new(1, 1)).unwrap_err();
    assert!(matches!(err, XgridError::ShapeMismatch { .. }));
}

#[test]
fn test_missing_file_rejected() {
    let err = load_weights(
        std::path::Path::new("/nonexistent/weights.nc"),
        GridShape::new(1, 1),
        GridShape::new(1, 1),
    )
    .unwrap_err();
    assert!(matches!(err, XgridError::NetCdf(_)));
}
