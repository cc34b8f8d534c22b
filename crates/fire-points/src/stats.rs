//! Summary statistics for burned-area products.

use serde::{Deserialize, Serialize};

use fire_common::RasterGrid;
use projection::ProductResolution;

/// Summary of a burned-area (burn-date) grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnedAreaSummary {
    /// Number of pixels with a positive burn date.
    pub total_burned_pixels: usize,
    /// Burned area in square kilometers.
    pub total_area_km2: f64,
    /// Burned area in hectares.
    pub total_area_hectares: f64,
    /// Burned share of a full tile, in percent.
    pub percent_of_tile: f64,
    /// Earliest burn day-of-year (0 when nothing burned).
    pub earliest_burn_day: u16,
    /// Latest burn day-of-year (0 when nothing burned).
    pub latest_burn_day: u16,
    /// Length of the burn period in days (0 when nothing burned).
    pub burn_period_days: u16,
}

/// Summarize a burn-date grid.
///
/// Pixel area follows the product resolution (0.25 km² at 500 m, 1 km²
/// at 1 km); the tile share is computed against a full tile at that
/// resolution. A grid with no burned pixels yields a zero summary.
pub fn summarize_burned_area(
    burn_date: &RasterGrid<u16>,
    resolution: ProductResolution,
) -> BurnedAreaSummary {
    let mut total_burned_pixels = 0usize;
    let mut earliest = u16::MAX;
    let mut latest = 0u16;

    for &day in burn_date.data() {
        if day > 0 {
            total_burned_pixels += 1;
            earliest = earliest.min(day);
            latest = latest.max(day);
        }
    }

    if total_burned_pixels == 0 {
        return BurnedAreaSummary {
            total_burned_pixels: 0,
            total_area_km2: 0.0,
            total_area_hectares: 0.0,
            percent_of_tile: 0.0,
            earliest_burn_day: 0,
            latest_burn_day: 0,
            burn_period_days: 0,
        };
    }

    let pixel_km = resolution.meters() / 1000.0;
    let pixel_area_km2 = pixel_km * pixel_km;
    let total_area_km2 = total_burned_pixels as f64 * pixel_area_km2;
    let tile_pixels = resolution.tile_size() * resolution.tile_size();

    BurnedAreaSummary {
        total_burned_pixels,
        total_area_km2: round2(total_area_km2),
        total_area_hectares: round2(total_area_km2 * 100.0),
        percent_of_tile: round2(total_burned_pixels as f64 / tile_pixels as f64 * 100.0),
        earliest_burn_day: earliest,
        latest_burn_day: latest,
        burn_period_days: latest - earliest + 1,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
