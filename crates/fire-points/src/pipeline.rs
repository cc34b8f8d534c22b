//! End-to-end assembly of map responses.
//!
//! These functions string the core steps together the way the serving
//! layer calls them: resolve the tile from the product filename, extract
//! points, optionally aggregate, and stamp collection metadata. HTTP
//! status mapping stays outside; everything here returns typed results.

use tracing::info;

use fire_common::{
    extract_tile_from_filename, DatasetArray, FireMapError, FireMapResult, RasterGrid,
    RasterSource,
};

use crate::aggregate::aggregate_to_grid;
use crate::extract::{extract_burned_area_points, extract_fire_points, ExtractOptions};
use crate::geojson::{CollectionProperties, FeatureCollection};

/// Build a GeoJSON FeatureCollection of fire detections for one product.
///
/// The tile is resolved from `filename`; an unmatched filename fails with
/// `UnresolvableTile` rather than guessing. A `NoData` mask and an empty
/// detection set both yield a valid empty collection whose properties
/// carry an explanatory `message`. When `aggregate` is given, points are
/// collapsed into cells of that size in degrees before encoding.
pub fn fire_feature_collection(
    filename: &str,
    fire_mask: &DatasetArray<u8>,
    confidence: Option<&RasterGrid<u8>>,
    frp: Option<&RasterGrid<f32>>,
    opts: &ExtractOptions,
    aggregate: Option<f64>,
) -> FireMapResult<FeatureCollection> {
    let tile = extract_tile_from_filename(filename)
        .ok_or_else(|| FireMapError::UnresolvableTile(filename.to_string()))?;

    let mask = match fire_mask.as_grid() {
        Some(grid) => grid,
        None => {
            return Ok(empty_collection(
                filename,
                &tile.label(),
                "No fire mask data available",
            ))
        }
    };

    let points = extract_fire_points(mask, tile, confidence, frp, opts)?;
    if points.is_empty() {
        return Ok(empty_collection(
            filename,
            &tile.label(),
            "No fire points found",
        ));
    }

    let collection = match aggregate {
        Some(grid_size) => {
            let cells = aggregate_to_grid(&points, grid_size);
            FeatureCollection::from_cells(&cells)
        }
        None => FeatureCollection::from_points(&points),
    };

    let count = collection.features.len();
    info!(source = filename, %tile, count, "built fire feature collection");

    Ok(collection.with_properties(
        CollectionProperties::new(count)
            .with_source(filename)
            .with_tile(tile.label()),
    ))
}

/// Build a GeoJSON FeatureCollection of burned-area detections.
///
/// Same contract as [`fire_feature_collection`], at 500 m resolution and
/// without confidence filtering or aggregation.
pub fn burned_area_feature_collection(
    filename: &str,
    burn_date: &DatasetArray<u16>,
    opts: &ExtractOptions,
) -> FireMapResult<FeatureCollection> {
    let tile = extract_tile_from_filename(filename)
        .ok_or_else(|| FireMapError::UnresolvableTile(filename.to_string()))?;

    let grid = match burn_date.as_grid() {
        Some(grid) => grid,
        None => {
            return Ok(empty_collection(
                filename,
                &tile.label(),
                "No burn date data available",
            ))
        }
    };

    let points = extract_burned_area_points(grid, tile, opts)?;
    if points.is_empty() {
        return Ok(empty_collection(
            filename,
            &tile.label(),
            "No burned area found",
        ));
    }

    let count = points.len();
    info!(source = filename, %tile, count, "built burned area feature collection");

    Ok(FeatureCollection::from_points(&points).with_properties(
        CollectionProperties::new(count)
            .with_source(filename)
            .with_tile(tile.label()),
    ))
}

/// [`fire_feature_collection`] driven by a [`RasterSource`] adapter.
pub fn fire_feature_collection_from_source<S: RasterSource>(
    source: &S,
    opts: &ExtractOptions,
    aggregate: Option<f64>,
) -> FireMapResult<FeatureCollection> {
    let mask = source.fire_mask()?;
    let confidence = source.confidence()?;
    let frp = source.max_frp()?;
    fire_feature_collection(
        source.filename(),
        &mask,
        confidence.as_ref(),
        frp.as_ref(),
        opts,
        aggregate,
    )
}

/// [`burned_area_feature_collection`] driven by a [`RasterSource`] adapter.
pub fn burned_area_feature_collection_from_source<S: RasterSource>(
    source: &S,
    opts: &ExtractOptions,
) -> FireMapResult<FeatureCollection> {
    let burn_date = source.burn_date()?;
    burned_area_feature_collection(source.filename(), &burn_date, opts)
}

fn empty_collection(source: &str, tile_label: &str, message: &str) -> FeatureCollection {
    FeatureCollection::new().with_properties(
        CollectionProperties::new(0)
            .with_source(source)
            .with_tile(tile_label)
            .with_message(message),
    )
}
