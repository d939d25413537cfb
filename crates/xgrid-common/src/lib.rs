//! Common types shared across the xgrid-tools workspace.

pub mod error;
pub mod grid;

pub use error::{XgridError, XgridResult};
pub use grid::{CellIndex, FlattenOrder, GridShape};
