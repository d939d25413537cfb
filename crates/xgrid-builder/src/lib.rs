//! Conversion of ESMF sparse regridding weights into exchange-grid files.
//!
//! The pipeline is a single-threaded batch transform: load the sparse weight
//! matrix and the destination cell-area field, map each stored entry's
//! flattened indices back to 2-D cell positions, rescale the normalized
//! weights into physical overlap areas, drop entries whose destination cell
//! has no defined area, and write the result in the exchange-grid (xgrid)
//! layout.

pub mod convert;
pub mod exchange;
pub mod rescale;
pub mod writer;

pub use convert::{convert, ConvertRequest, ConvertSummary, Normalization};
pub use exchange::ExchangeGrid;
pub use rescale::rescale_weights;
pub use writer::write_exchange;
