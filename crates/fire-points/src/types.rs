//! Core types for detection points and aggregated cells.

use serde::{Deserialize, Serialize};

/// What kind of detection a point represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    /// Active fire detection (fire mask codes 7-9).
    Fire,
    /// Burned area detection (positive burn day-of-year).
    BurnedArea,
}

/// Round to 6 decimal places for stable serialization and deduplication.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// A single detection as a geographic point.
///
/// Attributes are a closed optional set: each is present only when the
/// corresponding source array was supplied to the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, rounded to 6 decimal places.
    pub lat: f64,
    /// Longitude in degrees, rounded to 6 decimal places.
    pub lon: f64,
    /// Detection kind.
    #[serde(rename = "type")]
    pub kind: DetectionKind,
    /// Detection confidence (0-100), fire points only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Fire radiative power in megawatts, fire points only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frp: Option<f64>,
    /// Burn day-of-year, burned-area points only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burn_day: Option<u16>,
}

impl GeoPoint {
    /// Create a fire detection point.
    pub fn fire(lat: f64, lon: f64) -> Self {
        Self {
            lat: round6(lat),
            lon: round6(lon),
            kind: DetectionKind::Fire,
            confidence: None,
            frp: None,
            burn_day: None,
        }
    }

    /// Create a burned-area point.
    pub fn burned_area(lat: f64, lon: f64, burn_day: u16) -> Self {
        Self {
            lat: round6(lat),
            lon: round6(lon),
            kind: DetectionKind::BurnedArea,
            confidence: None,
            frp: None,
            burn_day: Some(burn_day),
        }
    }

    /// Attach a detection confidence.
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Attach a fire radiative power value.
    pub fn with_frp(mut self, frp: f64) -> Self {
        self.frp = Some(frp);
        self
    }
}

/// An aggregated grid cell.
///
/// Produced by folding points into fixed-size cells; one aggregation run
/// owns its own cell table, which is discarded after the response is built.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Cell center latitude (snapped to the grid size).
    pub lat: f64,
    /// Cell center longitude (snapped to the grid size).
    pub lon: f64,
    /// Number of points folded into this cell.
    pub count: usize,
    /// Sum of FRP over intensity-bearing points.
    pub total_frp: f64,
    /// Maximum confidence over confidence-bearing points (0 when none).
    pub max_confidence: u8,
    /// `total_frp / count` when any intensity was present, else exactly 0.
    pub avg_frp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round6() {
        assert!((round6(-60.36543321987) - -60.365433).abs() < 1e-12);
        assert!((round6(1.0000004) - 1.0).abs() < 1e-12);
        assert!((round6(1.0000006) - 1.000001).abs() < 1e-12);
    }

    #[test]
    fn test_fire_point_rounds_coordinates() {
        let point = GeoPoint::fire(-7.12662412345, -60.36543367890);
        assert_eq!(point.lat, -7.126624);
        assert_eq!(point.lon, -60.365434);
        assert_eq!(point.kind, DetectionKind::Fire);
        assert!(point.confidence.is_none());
        assert!(point.frp.is_none());
        assert!(point.burn_day.is_none());
    }

    #[test]
    fn test_burned_area_point() {
        let point = GeoPoint::burned_area(-12.5, -52.8, 274);
        assert_eq!(point.kind, DetectionKind::BurnedArea);
        assert_eq!(point.burn_day, Some(274));
    }

    #[test]
    fn test_optional_attributes() {
        let point = GeoPoint::fire(0.0, 0.0).with_confidence(85).with_frp(12.5);
        assert_eq!(point.confidence, Some(85));
        assert_eq!(point.frp, Some(12.5));
    }
}
