//! ESMF weight-file converter.
//!
//! Reads regridding weights in the ESMF sparse-matrix convention and writes
//! them as an exchange-grid (xgrid) weight file, rescaling the normalized
//! weights by the destination cell areas along the way.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use xgrid_builder::convert::{convert, ConvertRequest, Normalization};
use xgrid_common::GridShape;

#[derive(Parser, Debug)]
#[command(name = "converter")]
#[command(about = "Convert ESMF regridding weights to exchange-grid format")]
struct Args {
    /// ESMF sparse weight file
    weights: PathBuf,

    /// Source grid size in x
    #[arg(long)]
    nx_src: NonZeroUsize,

    /// Source grid size in y
    #[arg(long)]
    ny_src: NonZeroUsize,

    /// Destination grid size in x
    #[arg(long)]
    nx_dst: NonZeroUsize,

    /// Destination grid size in y
    #[arg(long)]
    ny_dst: NonZeroUsize,

    /// Gridded file holding the destination cell areas
    #[arg(long)]
    areafile: PathBuf,

    /// Name of the cell-area variable in the area file
    #[arg(long, default_value = "areacello")]
    areavar: String,

    /// Output exchange-grid file
    #[arg(short, long, default_value = "exchange_grid.nc")]
    output: PathBuf,

    /// Normalization convention of the input weights
    #[arg(long, default_value = "destination-fraction")]
    normalization: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let normalization: Normalization = args.normalization.parse()?;

    let request = ConvertRequest {
        weights_path: args.weights,
        area_path: args.areafile,
        area_var: args.areavar,
        output_path: args.output,
        src_shape: GridShape::new(args.nx_src.get(), args.ny_src.get()),
        dst_shape: GridShape::new(args.nx_dst.get(), args.ny_dst.get()),
        normalization,
    };

    info!(
        weights = %request.weights_path.display(),
        src = %request.src_shape,
        dst = %request.dst_shape,
        "starting weight conversion"
    );

    let summary = convert(&request)?;

    println!(
        "Wrote {} exchange cells to {} ({} undefined-area entries skipped)",
        summary.written_entries,
        request.output_path.display(),
        summary.dropped_entries
    );

    Ok(())
}
