//! Coordinate transformations for the sinusoidal tile grid.
//!
//! Implements the MODIS/VIIRS sinusoidal projection from scratch without
//! external dependencies.

pub mod sinusoidal;

pub use sinusoidal::{ProductResolution, SinusoidalGrid, EARTH_RADIUS_M, TILE_WIDTH_M};
