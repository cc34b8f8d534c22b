//! Fire detection points for web maps.
//!
//! This crate turns decoded satellite raster products (fire masks,
//! burn-date grids) into geographic point features:
//!
//! - **Extraction**: scan a value array under a detection predicate,
//!   filter by confidence, cap the result size with uniform sampling,
//!   and project every surviving pixel to (lat, lon)
//! - **Aggregation**: collapse large point sets into fixed-size grid
//!   cells with count / total FRP / max confidence statistics
//! - **Encoding**: wrap points or cells in a GeoJSON FeatureCollection
//!   with `[lon, lat]` coordinate order
//!
//! # Architecture
//!
//! ```text
//! product filename ──► tile resolution (fire-common)
//!                           │
//! decoded arrays ──────► extract_fire_points / extract_burned_area_points
//!                           │
//!                           ├─► aggregate_to_grid (optional)
//!                           │
//!                           ▼
//!                      FeatureCollection (GeoJSON)
//! ```
//!
//! # Example
//!
//! ```
//! use fire_common::{RasterGrid, TileId};
//! use fire_points::{extract_fire_points, ExtractOptions, FeatureCollection};
//!
//! let mask = RasterGrid::from_rows(vec![
//!     vec![0u8, 7],
//!     vec![8, 0],
//! ]).unwrap();
//! let tile = TileId::new(11, 9).unwrap();
//!
//! let points = extract_fire_points(&mask, tile, None, None, &ExtractOptions::default()).unwrap();
//! let collection = FeatureCollection::from_points(&points);
//! assert_eq!(collection.features.len(), 2);
//! ```

pub mod aggregate;
pub mod extract;
pub mod geojson;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-export commonly used types at crate root
pub use aggregate::{aggregate_to_grid, DEFAULT_GRID_SIZE};
pub use extract::{
    extract_burned_area_points, extract_fire_points, ExtractOptions, FIRE_DETECTION_MIN,
};
pub use geojson::{CollectionProperties, Feature, FeatureCollection, FeatureProperties, Geometry};
pub use pipeline::{
    burned_area_feature_collection, burned_area_feature_collection_from_source,
    fire_feature_collection, fire_feature_collection_from_source,
};
pub use stats::{summarize_burned_area, BurnedAreaSummary};
pub use types::{DetectionKind, GeoPoint, GridCell};
