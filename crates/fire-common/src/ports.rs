//! Ports implemented by raster-source adapters.
//!
//! Decoding HDF4/HDF5/NetCDF containers is outside this workspace; any
//! adapter that can produce in-memory arrays for the product datasets
//! satisfies the extraction pipeline.

use crate::error::FireMapResult;
use crate::raster::{DatasetArray, RasterGrid};

/// A source of decoded raster datasets for one product file.
///
/// Primary datasets (`fire_mask`, `burn_date`) report missing data via
/// `DatasetArray::NoData`; auxiliary datasets (`confidence`, `max_frp`)
/// are simply absent when the product does not carry them.
pub trait RasterSource {
    /// Name of the product file, used for tile resolution and metadata.
    fn filename(&self) -> &str;

    /// The per-pixel fire mask (values 7-9 indicate detected fire).
    fn fire_mask(&self) -> FireMapResult<DatasetArray<u8>>;

    /// Optional per-pixel detection confidence (0-100).
    fn confidence(&self) -> FireMapResult<Option<RasterGrid<u8>>>;

    /// Optional per-pixel fire radiative power in megawatts.
    fn max_frp(&self) -> FireMapResult<Option<RasterGrid<f32>>>;

    /// The per-pixel burn day-of-year grid (0 means never burned).
    fn burn_date(&self) -> FireMapResult<DatasetArray<u16>>;
}
