//! Grid shapes and flat-index conventions for regridding weights.

use serde::{Deserialize, Serialize};

/// Ordering convention used when a 2-D grid was flattened to a linear index.
///
/// The sparse weight matrix stores each grid position as a single linear
/// index, and the convention used to produce that index is a silent contract
/// with whatever tool generated the weights: a mismatch does not fail, it
/// produces spatially scrambled output that still looks plausible. The
/// convention is therefore carried as an explicit value on [`GridShape`]
/// rather than assumed at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlattenOrder {
    /// The first axis (`i`, the x direction) varies fastest:
    /// `k = j * nx + i` for 0-based `(i, j)`.
    ///
    /// This is the convention ESMF uses when flattening a logically
    /// rectangular grid for its weight files.
    #[default]
    FirstAxisFastest,
}

impl FlattenOrder {
    /// Split a 0-based flat index into 0-based `(i, j)` for a row of `nx` cells.
    #[inline]
    fn unflatten(&self, k: usize, nx: usize) -> (usize, usize) {
        match self {
            FlattenOrder::FirstAxisFastest => (k % nx, k / nx),
        }
    }

    /// Combine 0-based `(i, j)` into a 0-based flat index for a row of `nx` cells.
    #[inline]
    fn flatten(&self, i: usize, j: usize, nx: usize) -> usize {
        match self {
            FlattenOrder::FirstAxisFastest => j * nx + i,
        }
    }
}

/// A 1-based position on a 2-D grid.
///
/// Invariant: `1 <= i <= nx` and `1 <= j <= ny` for the grid that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellIndex {
    /// Position along the x (first, fastest-varying) axis
    pub i: usize,
    /// Position along the y (second) axis
    pub j: usize,
}

/// Shape of a logical 2-D horizontal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of cells in the x direction
    pub nx: usize,
    /// Number of cells in the y direction
    pub ny: usize,
    /// Convention used when this grid was flattened to linear indices
    pub order: FlattenOrder,
}

impl GridShape {
    /// Create a grid shape with the default flattening convention.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            order: FlattenOrder::default(),
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }

    /// Convert a 0-based flat index into a 1-based 2-D cell index.
    ///
    /// Bounds are not checked here; flat indices must have been validated
    /// when the weight file was loaded.
    #[inline]
    pub fn cell_from_flat(&self, k: usize) -> CellIndex {
        debug_assert!(k < self.len(), "flat index {} out of range for {:?}", k, self);
        let (i, j) = self.order.unflatten(k, self.nx);
        CellIndex { i: i + 1, j: j + 1 }
    }

    /// Convert a 1-based 2-D cell index back into a 0-based flat index.
    ///
    /// Exact inverse of [`GridShape::cell_from_flat`].
    #[inline]
    pub fn flat_from_cell(&self, cell: CellIndex) -> usize {
        debug_assert!(
            cell.i >= 1 && cell.i <= self.nx && cell.j >= 1 && cell.j <= self.ny,
            "cell {:?} out of range for {:?}",
            cell,
            self
        );
        self.order.flatten(cell.i - 1, cell.j - 1, self.nx)
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.nx, self.ny)
    }
}
