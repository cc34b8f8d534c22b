//! Sinusoidal tile-grid projection.
//!
//! The MODIS/VIIRS land products tile the globe into a 36x18 grid of
//! 10-degree cells under a sinusoidal (equal-area) projection. Each tile
//! is a square pixel grid whose size depends on the product resolution:
//! 1200 px for 1 km products, 2400 px for 500 m products.
//!
//! The inverse mapping used here matches the reference converter exactly:
//! latitude comes straight from the planar y coordinate, and longitude
//! divides by the cosine of the *already-converted degree* latitude. That
//! cosine is the projection's defining nonlinearity and must not be
//! replaced with a geodesically recomputed value.

use std::f64::consts::PI;

use fire_common::TileId;

/// Earth radius used by the sinusoidal grid (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_007.181;

/// Width of one 10-degree tile at the equator (meters).
pub const TILE_WIDTH_M: f64 = 1_111_950.0;

/// Pixel resolution of a satellite product.
///
/// Fire products (MOD14A1 and kin) are 1 km; burned-area products
/// (MCD64A1) are 500 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductResolution {
    /// 1 km pixels, 1200x1200 tiles.
    Km1,
    /// 500 m pixels, 2400x2400 tiles.
    M500,
}

impl ProductResolution {
    /// Pixel size in meters.
    pub fn meters(&self) -> f64 {
        match self {
            ProductResolution::Km1 => 1000.0,
            ProductResolution::M500 => 500.0,
        }
    }

    /// Pixels per tile edge at this resolution.
    pub fn tile_size(&self) -> usize {
        match self {
            ProductResolution::Km1 => 1200,
            ProductResolution::M500 => 2400,
        }
    }
}

/// The sinusoidal tile grid at a fixed product resolution.
#[derive(Debug, Clone, Copy)]
pub struct SinusoidalGrid {
    resolution: ProductResolution,
}

impl SinusoidalGrid {
    /// Create a grid for the given product resolution.
    pub fn new(resolution: ProductResolution) -> Self {
        Self { resolution }
    }

    /// The product resolution this grid was built for.
    pub fn resolution(&self) -> ProductResolution {
        self.resolution
    }

    /// Pixels per tile edge.
    pub fn tile_size(&self) -> usize {
        self.resolution.tile_size()
    }

    /// Convert a pixel position within a tile to geographic coordinates.
    ///
    /// Returns (latitude, longitude) in degrees. Inputs are assumed
    /// validated by the caller; rows/cols beyond the tile edge simply
    /// project into the neighboring tile's footprint.
    pub fn grid_to_latlon(&self, tile: TileId, row: usize, col: usize) -> (f64, f64) {
        let tile_size = self.resolution.tile_size() as f64;
        let meters = self.resolution.meters();

        // Planar position in the sinusoidal projection
        let x = (tile.h as f64 * tile_size + col as f64) * meters;
        let y = (tile.v as f64 * tile_size + row as f64) * meters;

        let lat = 90.0 - (y / EARTH_RADIUS_M) * (180.0 / PI);

        // Longitude depends on latitude under the sinusoidal projection
        let lon = (x / (EARTH_RADIUS_M * (lat * PI / 180.0).cos())) * (180.0 / PI) - 180.0;

        (lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(h: u32, v: u32) -> TileId {
        TileId::new(h, v).unwrap()
    }

    #[test]
    fn test_amazon_tile_top_left_corner() {
        // h11v09 is the well-known Amazon-region tile
        let grid = SinusoidalGrid::new(ProductResolution::Km1);
        let (lat, lon) = grid.grid_to_latlon(tile(11, 9), 0, 0);

        assert!((lat - -7.126624).abs() < 1e-5, "lat was {}", lat);
        assert!((lon - -60.365433).abs() < 1e-5, "lon was {}", lon);
    }

    #[test]
    fn test_amazon_tile_bottom_right_corner() {
        let grid = SinusoidalGrid::new(ProductResolution::Km1);
        let (lat, lon) = grid.grid_to_latlon(tile(11, 9), 1199, 1199);

        assert!((lat - -17.909478).abs() < 1e-5, "lat was {}", lat);
        assert!((lon - -43.912511).abs() < 1e-5, "lon was {}", lon);
    }

    #[test]
    fn test_latitude_decreases_with_row() {
        let grid = SinusoidalGrid::new(ProductResolution::Km1);
        let (lat0, _) = grid.grid_to_latlon(tile(11, 9), 0, 0);
        let (lat1, _) = grid.grid_to_latlon(tile(11, 9), 600, 0);
        let (lat2, _) = grid.grid_to_latlon(tile(11, 9), 1199, 0);

        assert!(lat0 > lat1);
        assert!(lat1 > lat2);
    }

    #[test]
    fn test_500m_matches_1km_at_double_index() {
        // A 500 m pixel at (2r, 2c) sits at the same planar position as
        // the 1 km pixel at (r, c)
        let km = SinusoidalGrid::new(ProductResolution::Km1);
        let m500 = SinusoidalGrid::new(ProductResolution::M500);

        let (lat_a, lon_a) = km.grid_to_latlon(tile(12, 8), 100, 200);
        let (lat_b, lon_b) = m500.grid_to_latlon(tile(12, 8), 200, 400);

        assert!((lat_a - lat_b).abs() < 1e-9);
        assert!((lon_a - lon_b).abs() < 1e-9);
    }

    #[test]
    fn test_coordinates_stay_in_geographic_range() {
        let grid = SinusoidalGrid::new(ProductResolution::Km1);
        // Sample tiles whose pixels sit on the globe; tiles beyond the
        // sinusoidal ellipse edge have no valid pixels to begin with
        for (h, v) in [(0, 4), (0, 9), (11, 9), (13, 3), (18, 9)] {
            for (row, col) in [(0, 0), (599, 1199), (1199, 0), (1199, 1199)] {
                let (lat, lon) = grid.grid_to_latlon(tile(h, v), row, col);
                assert!((-90.0..=90.0).contains(&lat), "lat {} for h{}v{}", lat, h, v);
                assert!(
                    (-180.0..=180.0).contains(&lon),
                    "lon {} for h{}v{}",
                    lon,
                    h,
                    v
                );
            }
        }
    }

    #[test]
    fn test_resolution_tile_sizes() {
        assert_eq!(ProductResolution::Km1.tile_size(), 1200);
        assert_eq!(ProductResolution::M500.tile_size(), 2400);
        assert!((ProductResolution::Km1.meters() - 1000.0).abs() < f64::EPSILON);
        assert!((ProductResolution::M500.meters() - 500.0).abs() < f64::EPSILON);
    }
}
