//! Index mapping and area rescaling of the sparse weight matrix.

use esmf_parser::AreaField;
use sprs::CsMat;
use xgrid_common::{GridShape, XgridError, XgridResult};

use crate::exchange::ExchangeGrid;

/// Turn normalized weights into exchange-grid cells with physical areas.
///
/// Walks the CSR matrix in contiguous row order. Each row index is the
/// flattened destination cell, each column index the flattened source cell;
/// both are mapped back to 1-based `(i, j)` positions under the grid's
/// flattening convention. The stored weight is the fraction of the
/// destination cell's area contributed by that source cell, so the physical
/// overlap area is `S * area[dst]`.
///
/// One output entry is produced per stored nonzero, so the sparsity pattern
/// is preserved exactly. An undefined (NaN) destination area propagates into
/// the entry's area; resolving those is the filter's job, not this one's.
pub fn rescale_weights(
    weights: &CsMat<f64>,
    src_shape: GridShape,
    dst_shape: GridShape,
    area: &AreaField,
) -> XgridResult<ExchangeGrid> {
    if weights.rows() != dst_shape.len() || weights.cols() != src_shape.len() {
        return Err(XgridError::shape_mismatch(
            format!("matrix ({} x {})", dst_shape.len(), src_shape.len()),
            format!("matrix ({} x {})", weights.rows(), weights.cols()),
        ));
    }
    if area.shape() != dst_shape {
        return Err(XgridError::shape_mismatch(
            format!("area field {}", dst_shape),
            format!("area field {}", area.shape()),
        ));
    }

    let mut xgrid = ExchangeGrid::with_capacity(weights.nnz());

    for (r, row) in weights.outer_iterator().enumerate() {
        if row.nnz() == 0 {
            continue;
        }
        let dst_cell = dst_shape.cell_from_flat(r);
        let cell_area = area.get(dst_cell);

        for (c, &weight) in row.iter() {
            let src_cell = src_shape.cell_from_flat(c);
            xgrid.push(src_cell, dst_cell, weight * cell_area);
        }
    }

    Ok(xgrid)
}
