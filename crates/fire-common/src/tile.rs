//! Sinusoidal grid tile identifiers.
//!
//! The MODIS/VIIRS sinusoidal tiling scheme divides the globe into a
//! 36x18 grid of 10-degree cells, addressed by a horizontal index h
//! and a vertical index v. Product filenames carry the tile as a
//! `h11v09`-style label.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FireMapError, FireMapResult};

/// Number of horizontal tiles in the sinusoidal grid.
pub const GRID_TILES_H: u32 = 36;
/// Number of vertical tiles in the sinusoidal grid.
pub const GRID_TILES_V: u32 = 18;

/// A tile coordinate (h/v) in the sinusoidal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    /// Horizontal tile index (0-35)
    pub h: u32,
    /// Vertical tile index (0-17)
    pub v: u32,
}

impl TileId {
    /// Create a new tile identifier, validating against the grid bounds.
    pub fn new(h: u32, v: u32) -> FireMapResult<Self> {
        if h >= GRID_TILES_H || v >= GRID_TILES_V {
            return Err(FireMapError::InvalidTile { h, v });
        }
        Ok(Self { h, v })
    }

    /// The canonical `h11v09` label used in product filenames.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{:02}v{:02}", self.h, self.v)
    }
}
