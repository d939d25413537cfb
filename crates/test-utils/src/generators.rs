//! Generators for synthetic NetCDF input files.
//!
//! These create small, predictable weight and area files so tests can
//! exercise the full read path without shipping binary fixtures.

use std::path::Path;

/// Write a minimal ESMF-style sparse weight file.
///
/// Creates the `n_s` dimension and the `row`, `col`, `S` variables. Indices
/// are 1-based, as the format stores them. All three slices must have the
/// same length.
pub fn write_weight_file(
    path: &Path,
    rows: &[i32],
    cols: &[i32],
    weights: &[f64],
) -> Result<(), netcdf::Error> {
    assert_eq!(rows.len(), cols.len());
    assert_eq!(rows.len(), weights.len());

    let mut file = netcdf::create(path)?;
    file.add_dimension("n_s", rows.len())?;

    let mut row_var = file.add_variable::<i32>("row", &["n_s"])?;
    row_var.put_values(rows, ..)?;

    let mut col_var = file.add_variable::<i32>("col", &["n_s"])?;
    col_var.put_values(cols, ..)?;

    let mut s_var = file.add_variable::<f64>("S", &["n_s"])?;
    s_var.put_values(weights, ..)?;

    Ok(())
}

/// Write a weight file that also records the grid shapes it was built for,
/// via the `src_grid_dims` / `dst_grid_dims` variables ESMF emits.
pub fn write_weight_file_with_dims(
    path: &Path,
    rows: &[i32],
    cols: &[i32],
    weights: &[f64],
    src_dims: [i32; 2],
    dst_dims: [i32; 2],
) -> Result<(), netcdf::Error> {
    write_weight_file(path, rows, cols, weights)?;

    let mut file = netcdf::append(path)?;
    file.add_dimension("src_grid_rank", 2)?;
    file.add_dimension("dst_grid_rank", 2)?;

    let mut src_var = file.add_variable::<i32>("src_grid_dims", &["src_grid_rank"])?;
    src_var.put_values(&src_dims, ..)?;

    let mut dst_var = file.add_variable::<i32>("dst_grid_dims", &["dst_grid_rank"])?;
    dst_var.put_values(&dst_dims, ..)?;

    Ok(())
}

/// Write a gridded cell-area file with one `(ny, nx)` variable.
///
/// `values` is row-major with `j` (the y axis) outermost; NaN entries are
/// written as-is to represent masked cells.
pub fn write_area_file(
    path: &Path,
    var_name: &str,
    nx: usize,
    ny: usize,
    values: &[f64],
) -> Result<(), netcdf::Error> {
    assert_eq!(values.len(), nx * ny);

    let mut file = netcdf::create(path)?;
    file.add_dimension("ny", ny)?;
    file.add_dimension("nx", nx)?;

    let mut var = file.add_variable::<f64>(var_name, &["ny", "nx"])?;
    var.put_attribute("units", "m2")?;
    var.put_values(values, ..)?;

    Ok(())
}

/// Write an area file whose masked cells use a declared fill sentinel
/// instead of NaN.
pub fn write_area_file_with_fill(
    path: &Path,
    var_name: &str,
    nx: usize,
    ny: usize,
    values: &[f64],
    fill: f64,
) -> Result<(), netcdf::Error> {
    assert_eq!(values.len(), nx * ny);

    let mut file = netcdf::create(path)?;
    file.add_dimension("ny", ny)?;
    file.add_dimension("nx", nx)?;

    let mut var = file.add_variable::<f64>(var_name, &["ny", "nx"])?;
    var.put_attribute("units", "m2")?;
    var.put_attribute("_FillValue", fill)?;
    var.put_values(values, ..)?;

    Ok(())
}
