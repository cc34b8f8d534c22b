//! Tile identifier extraction from product filenames.
//!
//! MODIS/VIIRS product filenames embed the sinusoidal tile as a
//! `h11v09`-style token, e.g. `MOD14A1.A2019274.h11v09.061.hdf`.

use regex::Regex;
use std::sync::OnceLock;

use crate::tile::TileId;

static TILE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tile_pattern() -> &'static Regex {
    TILE_PATTERN.get_or_init(|| Regex::new(r"h(\d{2})v(\d{2})").expect("valid tile regex"))
}

/// Extract the tile identifier from a product filename.
///
/// Matches the first `h<2 digits>v<2 digits>` token anywhere in the
/// filename. Returns `None` when no token is present or when the matched
/// indices fall outside the 36x18 grid; callers must treat that as
/// "coordinates unavailable" rather than guessing a tile.
pub fn extract_tile_from_filename(filename: &str) -> Option<TileId> {
    let caps = tile_pattern().captures(filename)?;
    // Two-digit captures always parse; range is checked by TileId::new.
    let h: u32 = caps[1].parse().ok()?;
    let v: u32 = caps[2].parse().ok()?;
    TileId::new(h, v).ok()
}
