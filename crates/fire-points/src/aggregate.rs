//! Spatial aggregation of points into fixed-size grid cells.

use std::collections::HashMap;
use tracing::debug;

use crate::types::{GeoPoint, GridCell};

/// Default cell size in degrees (~10 km at the equator).
pub const DEFAULT_GRID_SIZE: f64 = 0.1;

/// Aggregate points into grid cells of `grid_size` degrees.
///
/// Each axis snaps independently to the nearest multiple of `grid_size`
/// (round-to-nearest, not floor), so a point lands in the cell whose
/// center is closest. Cells accumulate a point count, a running FRP sum
/// and the maximum confidence seen; `avg_frp` is derived afterwards and
/// is exactly 0 for cells with no intensity-bearing points.
///
/// Output order is unspecified. An empty input yields an empty output.
pub fn aggregate_to_grid(points: &[GeoPoint], grid_size: f64) -> Vec<GridCell> {
    // Quantized integer keys keep the map key Eq + Hash without hashing floats
    let mut cells: HashMap<(i64, i64), GridCell> = HashMap::new();

    for point in points {
        let lat_idx = (point.lat / grid_size).round() as i64;
        let lon_idx = (point.lon / grid_size).round() as i64;

        let cell = cells.entry((lat_idx, lon_idx)).or_insert_with(|| GridCell {
            lat: lat_idx as f64 * grid_size,
            lon: lon_idx as f64 * grid_size,
            count: 0,
            total_frp: 0.0,
            max_confidence: 0,
            avg_frp: 0.0,
        });

        cell.count += 1;
        if let Some(frp) = point.frp {
            cell.total_frp += frp;
        }
        if let Some(confidence) = point.confidence {
            cell.max_confidence = cell.max_confidence.max(confidence);
        }
    }

    let mut aggregated: Vec<GridCell> = cells.into_values().collect();
    for cell in &mut aggregated {
        cell.avg_frp = if cell.total_frp > 0.0 {
            cell.total_frp / cell.count as f64
        } else {
            0.0
        };
    }

    debug!(
        points = points.len(),
        cells = aggregated.len(),
        "aggregated points to grid cells"
    );
    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conservation() {
        let points: Vec<GeoPoint> = (0..100)
            .map(|i| GeoPoint::fire(-7.0 - (i as f64) * 0.013, -60.0 + (i as f64) * 0.017))
            .collect();

        let cells = aggregate_to_grid(&points, DEFAULT_GRID_SIZE);
        let total: usize = cells.iter().map(|c| c.count).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn test_nearby_points_share_a_cell() {
        let points = vec![
            GeoPoint::fire(-7.101, -60.102),
            GeoPoint::fire(-7.099, -60.098),
        ];
        let cells = aggregate_to_grid(&points, 0.1);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].count, 2);
        assert!((cells[0].lat - -7.1).abs() < 1e-9);
        assert!((cells[0].lon - -60.1).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_nearest_multiple_not_floor() {
        // 0.16 floors to the 0.1 cell but rounds to the 0.2 cell
        let points = vec![GeoPoint::fire(0.16, 0.16)];
        let cells = aggregate_to_grid(&points, 0.1);

        assert_eq!(cells.len(), 1);
        assert!((cells[0].lat - 0.2).abs() < 1e-9);
        assert!((cells[0].lon - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_frp_and_confidence_accumulation() {
        let points = vec![
            GeoPoint::fire(0.0, 0.0).with_frp(10.0).with_confidence(60),
            GeoPoint::fire(0.01, 0.01).with_frp(30.0).with_confidence(90),
        ];
        let cells = aggregate_to_grid(&points, 0.1);

        assert_eq!(cells.len(), 1);
        let cell = &cells[0];
        assert_eq!(cell.count, 2);
        assert!((cell.total_frp - 40.0).abs() < 1e-9);
        assert!((cell.avg_frp - 20.0).abs() < 1e-9);
        assert_eq!(cell.max_confidence, 90);
    }

    #[test]
    fn test_no_intensity_yields_zero_average() {
        let points = vec![GeoPoint::fire(0.0, 0.0), GeoPoint::fire(0.01, 0.01)];
        let cells = aggregate_to_grid(&points, 0.1);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].avg_frp, 0.0);
        assert_eq!(cells[0].total_frp, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let cells = aggregate_to_grid(&[], DEFAULT_GRID_SIZE);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_cell_sets_compare_order_insensitively() {
        let points = vec![
            GeoPoint::fire(0.0, 0.0),
            GeoPoint::fire(5.0, 5.0),
            GeoPoint::fire(-5.0, -5.0),
        ];
        let mut a = aggregate_to_grid(&points, 0.1);
        let mut b = aggregate_to_grid(&points, 0.1);
        let key = |c: &GridCell| ((c.lat * 1e6) as i64, (c.lon * 1e6) as i64);
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b);
    }
}
