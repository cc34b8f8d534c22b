//! GeoJSON types for map responses.
//!
//! The output envelope is a standard GeoJSON FeatureCollection; its exact
//! key names and nesting are load-bearing for downstream map renderers.
//! Coordinates are ordered `[longitude, latitude]` per the GeoJSON spec,
//! the reverse of the internal (lat, lon) convention.

use serde::{Deserialize, Serialize};

use crate::types::{DetectionKind, GeoPoint, GridCell};

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,

    /// Collection-level metadata, attached once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<CollectionProperties>,
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
            properties: None,
        }
    }

    /// Build a collection of Point features from detection points.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: points.iter().map(Feature::from).collect(),
            properties: None,
        }
    }

    /// Build a collection of Point features from aggregated grid cells.
    pub fn from_cells(cells: &[GridCell]) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: cells.iter().map(Feature::from).collect(),
            properties: None,
        }
    }

    /// Attach collection-level properties.
    pub fn with_properties(mut self, properties: CollectionProperties) -> Self {
        self.properties = Some(properties);
        self
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature with Point geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The feature geometry.
    pub geometry: Geometry,

    /// Non-geometry attributes of the point or cell.
    pub properties: FeatureProperties,
}

impl From<&GeoPoint> for Feature {
    fn from(point: &GeoPoint) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::point(point.lon, point.lat),
            properties: FeatureProperties {
                kind: Some(point.kind),
                confidence: point.confidence,
                frp: point.frp,
                burn_day: point.burn_day,
                ..FeatureProperties::default()
            },
        }
    }
}

impl From<&GridCell> for Feature {
    fn from(cell: &GridCell) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::point(cell.lon, cell.lat),
            properties: FeatureProperties {
                count: Some(cell.count),
                total_frp: Some(cell.total_frp),
                max_confidence: Some(cell.max_confidence),
                avg_frp: Some(cell.avg_frp),
                ..FeatureProperties::default()
            },
        }
    }
}

/// GeoJSON geometry. Only Point is produced by this pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },
}

impl Geometry {
    /// Create a point geometry from (lon, lat).
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: [lon, lat],
        }
    }
}

/// Per-feature properties.
///
/// Point features carry the detection attributes; aggregated cell
/// features carry the accumulation statistics. Absent fields are omitted
/// from the serialized output entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureProperties {
    /// Detection kind ("fire" or "burned_area"), point features only.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DetectionKind>,

    /// Detection confidence (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,

    /// Fire radiative power in megawatts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frp: Option<f64>,

    /// Burn day-of-year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burn_day: Option<u16>,

    /// Point count, cell features only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Total FRP, cell features only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_frp: Option<f64>,

    /// Maximum confidence, cell features only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_confidence: Option<u8>,

    /// Average FRP, cell features only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_frp: Option<f64>,
}

/// Collection-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionProperties {
    /// Source product filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Tile label, e.g. "h11v09".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile: Option<String>,

    /// Number of features in the collection.
    pub count: usize,

    /// Explanatory message for empty results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CollectionProperties {
    /// Create properties with a feature count.
    pub fn new(count: usize) -> Self {
        Self {
            source: None,
            tile: None,
            count,
            message: None,
        }
    }

    /// Set the source filename.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the tile label.
    pub fn with_tile(mut self, tile: impl Into<String>) -> Self {
        self.tile = Some(tile.into());
        self
    }

    /// Set an explanatory message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
