//! The end-to-end conversion pipeline.

use std::path::PathBuf;
use std::str::FromStr;

use esmf_parser::{load_weights, AreaField};
use tracing::info;
use xgrid_common::{GridShape, XgridError, XgridResult};

use crate::rescale::rescale_weights;
use crate::writer::write_exchange;

/// Normalization convention of the input weights.
///
/// Rescaling multiplies each weight by the destination cell's area, which is
/// only correct for destination-normalized weights. The convention is
/// therefore declared explicitly by the caller instead of assumed; a
/// declaration this tool cannot honor is rejected before any file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Each weight is the fraction of the destination cell's area covered by
    /// the source cell, so contributions to one destination cell sum to at
    /// most 1.
    #[default]
    DestinationFraction,
}

impl FromStr for Normalization {
    type Err = XgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destination-fraction" => Ok(Normalization::DestinationFraction),
            other => Err(XgridError::UnsupportedNormalization(other.to_string())),
        }
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// ESMF sparse weight file
    pub weights_path: PathBuf,
    /// Gridded file holding the destination cell areas
    pub area_path: PathBuf,
    /// Name of the area variable in `area_path`
    pub area_var: String,
    /// Output exchange-grid file (overwritten if present)
    pub output_path: PathBuf,
    /// Source grid shape
    pub src_shape: GridShape,
    /// Destination grid shape
    pub dst_shape: GridShape,
    /// Declared convention of the input weights
    pub normalization: Normalization,
}

/// Entry counts from a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Stored weight entries read from the input
    pub total_entries: usize,
    /// Exchange cells written to the output
    pub written_entries: usize,
    /// Entries dropped for undefined destination area
    pub dropped_entries: usize,
}

/// Run a full conversion: load weights and areas, rescale, filter, write.
pub fn convert(req: &ConvertRequest) -> XgridResult<ConvertSummary> {
    info!(
        weights = %req.weights_path.display(),
        src = %req.src_shape,
        dst = %req.dst_shape,
        normalization = ?req.normalization,
        "loading regrid weights"
    );
    let weights = load_weights(&req.weights_path, req.src_shape, req.dst_shape)?;

    let area = AreaField::from_file(&req.area_path, &req.area_var, req.dst_shape)?;

    let mut xgrid = rescale_weights(&weights, req.src_shape, req.dst_shape, &area)?;
    let total_entries = xgrid.len();

    let dropped_entries = xgrid.retain_defined();
    if dropped_entries > 0 {
        info!(
            dropped = dropped_entries,
            kept = xgrid.len(),
            "skipped exchange cells with undefined destination area"
        );
    }

    write_exchange(&req.output_path, &xgrid)?;
    info!(
        output = %req.output_path.display(),
        ncells = xgrid.len(),
        "wrote exchange grid file"
    );

    Ok(ConvertSummary {
        total_entries,
        written_entries: xgrid.len(),
        dropped_entries,
    })
}
