//! Common types and utilities shared across all fire-map crates.

pub mod error;
pub mod filename;
pub mod ports;
pub mod raster;
pub mod tile;

pub use error::{FireMapError, FireMapResult};
pub use filename::extract_tile_from_filename;
pub use ports::RasterSource;
pub use raster::{DatasetArray, RasterGrid};
pub use tile::TileId;
