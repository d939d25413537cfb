//! Destination cell-area field loading.

use std::path::Path;

use tracing::debug;
use xgrid_common::{CellIndex, GridShape, XgridError, XgridResult};

/// Physical cell areas for the destination grid.
///
/// Stored row-major with `j` as the outer (slowest) axis, matching the
/// `(ny, nx)` layout of the source file. Undefined cells (land in an
/// ocean-only field) are NaN.
#[derive(Debug, Clone)]
pub struct AreaField {
    shape: GridShape,
    values: Vec<f64>,
}

impl AreaField {
    /// Wrap an in-memory area array.
    ///
    /// `values` must be row-major `[j][i]` with exactly `shape.len()` entries.
    pub fn new(shape: GridShape, values: Vec<f64>) -> XgridResult<Self> {
        if values.len() != shape.len() {
            return Err(XgridError::shape_mismatch(
                format!("{} cells ({})", shape.len(), shape),
                format!("{} values", values.len()),
            ));
        }
        Ok(Self { shape, values })
    }

    /// Read one 2-D area variable from a gridded file.
    ///
    /// The variable must have shape `(ny, nx)` matching `shape`. Declared
    /// fill values (`_FillValue`, `missing_value`) are mapped to NaN so that
    /// masked cells are uniformly undefined downstream.
    pub fn from_file(path: &Path, var_name: &str, shape: GridShape) -> XgridResult<Self> {
        let file = netcdf::open(path)
            .map_err(|e| XgridError::NetCdf(format!("failed to open {}: {}", path.display(), e)))?;

        let var = file
            .variable(var_name)
            .ok_or_else(|| XgridError::missing_variable(var_name, path.display().to_string()))?;

        let dims = var.dimensions();
        if dims.len() != 2 {
            return Err(XgridError::invalid_format(format!(
                "variable '{}' in {} has {} dimensions, expected 2",
                var_name,
                path.display(),
                dims.len()
            )));
        }
        let (ny, nx) = (dims[0].len(), dims[1].len());
        if ny != shape.ny || nx != shape.nx {
            return Err(XgridError::shape_mismatch(
                format!("(ny, nx) = ({}, {})", shape.ny, shape.nx),
                format!("(ny, nx) = ({}, {}) in {}", ny, nx, path.display()),
            ));
        }

        let mut values: Vec<f64> = var
            .get_values(..)
            .map_err(|e| XgridError::NetCdf(format!("failed to read {}: {}", var_name, e)))?;

        // Masked cells may be stored as a fill sentinel rather than NaN.
        if let Some(fill) = fill_value(&var) {
            for v in &mut values {
                if *v == fill {
                    *v = f64::NAN;
                }
            }
        }

        debug!(var = var_name, ny, nx, "loaded destination area field");
        Self::new(shape, values)
    }

    /// Shape of the grid this field covers.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Area at a 1-based cell index. NaN for undefined cells.
    #[inline]
    pub fn get(&self, cell: CellIndex) -> f64 {
        self.values[(cell.j - 1) * self.shape.nx + (cell.i - 1)]
    }
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

fn get_f64_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f64::try_from(attr_value).ok()
}

/// Declared undefined-value sentinel for a variable, if any.
fn fill_value(var: &netcdf::Variable) -> Option<f64> {
    get_f64_attr(var, "_FillValue").or_else(|| get_f64_attr(var, "missing_value"))
}
