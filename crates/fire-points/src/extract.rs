//! Point extraction from detection rasters.
//!
//! Both extraction variants share one skeleton: locate positions under a
//! detection predicate, filter, cap the result size with uniform sampling
//! without replacement, then project each surviving pixel and join
//! per-pixel attributes from the auxiliary arrays.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use fire_common::{FireMapError, FireMapResult, RasterGrid, TileId};
use projection::{ProductResolution, SinusoidalGrid};

use crate::types::GeoPoint;

/// Minimum fire mask code counted as a detection (codes 7-9 are fire).
pub const FIRE_DETECTION_MIN: u8 = 7;

/// Options shared by both extraction variants.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Minimum confidence (0-100) a fire pixel must reach when a
    /// confidence array is supplied. Ignored for burned-area extraction.
    pub min_confidence: u8,
    /// Maximum number of points to return; larger detection sets are
    /// sampled down to exactly this many.
    pub max_points: usize,
    /// Seed for the sampling RNG. `None` draws from entropy; tests pass
    /// a fixed seed to make sampling deterministic.
    pub seed: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_confidence: 50,
            max_points: 10_000,
            seed: None,
        }
    }
}

impl ExtractOptions {
    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum point count.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set the minimum confidence filter.
    pub fn with_min_confidence(mut self, min_confidence: u8) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

/// Extract active fire detections as geographic points.
///
/// Scans `fire_mask` for codes >= 7, drops pixels below `min_confidence`
/// when a confidence array is present, samples down to `max_points`, and
/// projects survivors at 1 km resolution. `confidence` and `frp` values
/// are joined per pixel when the arrays are supplied.
///
/// An empty detection set yields `Ok(vec![])`. Auxiliary arrays whose
/// shape disagrees with the mask fail loudly with `ShapeMismatch`.
pub fn extract_fire_points(
    fire_mask: &RasterGrid<u8>,
    tile: TileId,
    confidence: Option<&RasterGrid<u8>>,
    frp: Option<&RasterGrid<f32>>,
    opts: &ExtractOptions,
) -> FireMapResult<Vec<GeoPoint>> {
    if let Some(conf) = confidence {
        check_aux_shape(fire_mask, conf)?;
    }
    if let Some(frp) = frp {
        check_aux_shape(fire_mask, frp)?;
    }

    let mut positions = fire_mask.positions_where(|v| v >= FIRE_DETECTION_MIN);
    if positions.is_empty() {
        debug!(%tile, "no fire pixels found");
        return Ok(Vec::new());
    }
    debug!(%tile, count = positions.len(), "found fire pixels");

    if let Some(conf) = confidence {
        positions.retain(|&(row, col)| {
            conf.get(row, col)
                .map_or(false, |c| c >= opts.min_confidence)
        });
        debug!(
            count = positions.len(),
            min_confidence = opts.min_confidence,
            "after confidence filter"
        );
    }

    let positions = sample_positions(positions, opts.max_points, opts.seed);

    let grid = SinusoidalGrid::new(ProductResolution::Km1);
    let mut points = Vec::with_capacity(positions.len());
    for (row, col) in positions {
        let (lat, lon) = grid.grid_to_latlon(tile, row, col);
        let mut point = GeoPoint::fire(lat, lon);
        if let Some(conf) = confidence {
            if let Some(c) = conf.get(row, col) {
                point = point.with_confidence(c);
            }
        }
        if let Some(frp) = frp {
            if let Some(f) = frp.get(row, col) {
                point = point.with_frp(f64::from(f));
            }
        }
        points.push(point);
    }

    Ok(points)
}

/// Extract burned-area detections as geographic points.
///
/// Scans `burn_date` for positive values (0 means never burned), samples
/// down to `max_points`, and projects survivors at 500 m resolution. Each
/// point carries its burn day-of-year. No confidence filter applies.
pub fn extract_burned_area_points(
    burn_date: &RasterGrid<u16>,
    tile: TileId,
    opts: &ExtractOptions,
) -> FireMapResult<Vec<GeoPoint>> {
    let positions = burn_date.positions_where(|v| v > 0);
    if positions.is_empty() {
        debug!(%tile, "no burned pixels found");
        return Ok(Vec::new());
    }
    debug!(%tile, count = positions.len(), "found burned pixels");

    let positions = sample_positions(positions, opts.max_points, opts.seed);

    let grid = SinusoidalGrid::new(ProductResolution::M500);
    let mut points = Vec::with_capacity(positions.len());
    for (row, col) in positions {
        let (lat, lon) = grid.grid_to_latlon(tile, row, col);
        // Position came from the same grid, so the lookup cannot miss
        let burn_day = burn_date.get(row, col).unwrap_or(0);
        points.push(GeoPoint::burned_area(lat, lon, burn_day));
    }

    Ok(points)
}

fn check_aux_shape<T: Copy, U: Copy>(
    primary: &RasterGrid<T>,
    aux: &RasterGrid<U>,
) -> FireMapResult<()> {
    if !primary.same_shape(aux) {
        return Err(FireMapError::shape_mismatch(primary.shape(), aux.shape()));
    }
    Ok(())
}

/// Cap a position list at `max_points` by uniform sampling without
/// replacement. Lists at or under the cap pass through unchanged, in
/// discovery order; sampled output carries no ordering guarantee.
fn sample_positions(
    positions: Vec<(usize, usize)>,
    max_points: usize,
    seed: Option<u64>,
) -> Vec<(usize, usize)> {
    if positions.len() <= max_points {
        return positions;
    }
    warn!(
        total = positions.len(),
        max_points, "too many detections, sampling"
    );
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    rand::seq::index::sample(&mut rng, positions.len(), max_points)
        .into_iter()
        .map(|i| positions[i])
        .collect()
}
