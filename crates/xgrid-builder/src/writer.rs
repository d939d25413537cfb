//! Exchange-grid NetCDF output.
//!
//! The layout is a compatibility boundary with downstream conservative
//! regridding tools: variable names, dimension names (`ncells`, `two`), and
//! the `standard_name` attributes must stay exactly as written here.

use std::path::Path;

use chrono::Utc;
use tracing::debug;
use xgrid_common::{CellIndex, XgridError, XgridResult};

use crate::exchange::ExchangeGrid;

/// Sentinel declared for undefined areas in the output file. Filtering
/// guarantees no written value actually carries it.
pub const MISSING_VALUE: f64 = 1.0e20;

/// Write an exchange grid in the xgrid mosaic layout.
///
/// An empty grid (every entry filtered) still produces a structurally valid
/// file with a zero-length `ncells` dimension.
pub fn write_exchange(path: &Path, xgrid: &ExchangeGrid) -> XgridResult<()> {
    let ncells = xgrid.len();

    let mut file = netcdf::create(path)
        .map_err(|e| XgridError::NetCdf(format!("failed to create {}: {}", path.display(), e)))?;

    file.add_dimension("ncells", ncells)
        .map_err(XgridError::netcdf)?;
    file.add_dimension("two", 2).map_err(XgridError::netcdf)?;

    {
        // Single-tile topology on both sides.
        let mut var = file
            .add_variable::<i32>("tile1", &["ncells"])
            .map_err(XgridError::netcdf)?;
        var.put_attribute("standard_name", "tile_number_in_mosaic1")
            .map_err(XgridError::netcdf)?;
        if ncells > 0 {
            var.put_values(&vec![1i32; ncells], ..)
                .map_err(XgridError::netcdf)?;
        }
    }

    {
        let mut var = file
            .add_variable::<i32>("tile1_cell", &["ncells", "two"])
            .map_err(XgridError::netcdf)?;
        var.put_attribute("standard_name", "parent_cell_indices_in_mosaic1")
            .map_err(XgridError::netcdf)?;
        if ncells > 0 {
            var.put_values(&cell_pairs(&xgrid.tile1_cell), ..)
                .map_err(XgridError::netcdf)?;
        }
    }

    {
        let mut var = file
            .add_variable::<i32>("tile2_cell", &["ncells", "two"])
            .map_err(XgridError::netcdf)?;
        var.put_attribute("standard_name", "parent_cell_indices_in_mosaic2")
            .map_err(XgridError::netcdf)?;
        if ncells > 0 {
            var.put_values(&cell_pairs(&xgrid.tile2_cell), ..)
                .map_err(XgridError::netcdf)?;
        }
    }

    {
        let mut var = file
            .add_variable::<f64>("xgrid_area", &["ncells"])
            .map_err(XgridError::netcdf)?;
        var.put_attribute("standard_name", "exchange_grid_area")
            .map_err(XgridError::netcdf)?;
        var.put_attribute("units", "m2").map_err(XgridError::netcdf)?;
        var.put_attribute("missing_value", MISSING_VALUE)
            .map_err(XgridError::netcdf)?;
        if ncells > 0 {
            var.put_values(&xgrid.xgrid_area, ..)
                .map_err(XgridError::netcdf)?;
        }
    }

    file.add_attribute(
        "history",
        format!(
            "{}: created by converter",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
        .as_str(),
    )
    .map_err(XgridError::netcdf)?;

    debug!(path = %path.display(), ncells, "wrote exchange grid layout");
    Ok(())
}

/// Interleave 1-based `(i, j)` pairs into the `(ncells, two)` layout.
fn cell_pairs(cells: &[CellIndex]) -> Vec<i32> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        out.push(cell.i as i32);
        out.push(cell.j as i32);
    }
    out
}
