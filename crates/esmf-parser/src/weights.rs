//! ESMF sparse weight file loading.

use std::path::Path;

use sprs::{CsMat, TriMat};
use tracing::debug;
use xgrid_common::{GridShape, XgridError, XgridResult};

/// Load an ESMF regrid weight file into a sparse matrix of shape
/// `(nxy_dst, nxy_src)`.
///
/// The file stores one weight contribution per entry of the `n_s` dimension:
/// `row` (1-based flattened destination index), `col` (1-based flattened
/// source index), and `S` (the normalized weight). Indices are converted to
/// 0-based and bounds-checked against the supplied shapes before the matrix
/// is built; duplicate `(row, col)` pairs are summed on CSR conversion.
pub fn load_weights(
    path: &Path,
    src_shape: GridShape,
    dst_shape: GridShape,
) -> XgridResult<CsMat<f64>> {
    let file = netcdf::open(path)
        .map_err(|e| XgridError::NetCdf(format!("failed to open {}: {}", path.display(), e)))?;

    // ESMF weight files usually record the grid shapes they were built for;
    // when present, catch a wrong --nx/--ny here instead of producing
    // scrambled output downstream.
    check_grid_dims(&file, path, "src_grid_dims", src_shape)?;
    check_grid_dims(&file, path, "dst_grid_dims", dst_shape)?;

    let rows = read_i64_var(&file, path, "row")?;
    let cols = read_i64_var(&file, path, "col")?;
    let values = read_f64_var(&file, path, "S")?;

    if rows.len() != cols.len() || rows.len() != values.len() {
        return Err(XgridError::invalid_format(format!(
            "row/col/S lengths differ in {}: {}/{}/{}",
            path.display(),
            rows.len(),
            cols.len(),
            values.len()
        )));
    }

    let n_dst = dst_shape.len();
    let n_src = src_shape.len();
    let mut triplets = TriMat::with_capacity((n_dst, n_src), values.len());

    for ((&row, &col), &s) in rows.iter().zip(&cols).zip(&values) {
        if row < 1 || row as usize > n_dst {
            return Err(XgridError::IndexOutOfRange {
                field: "row",
                value: row,
                max: n_dst,
            });
        }
        if col < 1 || col as usize > n_src {
            return Err(XgridError::IndexOutOfRange {
                field: "col",
                value: col,
                max: n_src,
            });
        }
        triplets.add_triplet(row as usize - 1, col as usize - 1, s);
    }

    debug!(
        entries = values.len(),
        src = %src_shape,
        dst = %dst_shape,
        "loaded sparse weights"
    );

    Ok(triplets.to_csr())
}

/// Validate a stored grid-dims variable against the caller-supplied shape.
///
/// Absence of the variable is not an error; the command-line shape stays
/// authoritative.
fn check_grid_dims(
    file: &netcdf::File,
    path: &Path,
    var_name: &str,
    shape: GridShape,
) -> XgridResult<()> {
    let Some(var) = file.variable(var_name) else {
        return Ok(());
    };

    let dims: Vec<i64> = var
        .get_values(..)
        .map_err(|e| XgridError::NetCdf(format!("failed to read {}: {}", var_name, e)))?;
    let implied: i64 = dims.iter().product();

    if implied != shape.len() as i64 {
        return Err(XgridError::shape_mismatch(
            format!("{} cells ({})", shape.len(), shape),
            format!("{} implied by {} in {}", implied, var_name, path.display()),
        ));
    }
    Ok(())
}

fn read_i64_var(file: &netcdf::File, path: &Path, name: &str) -> XgridResult<Vec<i64>> {
    let var = file
        .variable(name)
        .ok_or_else(|| XgridError::missing_variable(name, path.display().to_string()))?;
    var.get_values(..)
        .map_err(|e| XgridError::NetCdf(format!("failed to read {}: {}", name, e)))
}

fn read_f64_var(file: &netcdf::File, path: &Path, name: &str) -> XgridResult<Vec<f64>> {
    let var = file
        .variable(name)
        .ok_or_else(|| XgridError::missing_variable(name, path.display().to_string()))?;
    var.get_values(..)
        .map_err(|e| XgridError::NetCdf(format!("failed to read {}: {}", name, e)))
}
