//! Readers for the NetCDF inputs of a weight conversion run.
//!
//! Two files feed a conversion: the ESMF sparse weight file (variables
//! `row`, `col`, `S` over the `n_s` dimension, indices 1-based) and a
//! gridded destination cell-area file (one 2-D variable, `(ny, nx)` axis
//! order). Both are read fully into memory; the weight matrix comes back as
//! a `sprs` CSR matrix so downstream processing can walk it in contiguous
//! row order.

pub mod area;
pub mod weights;

pub use area::AreaField;
pub use weights::load_weights;
