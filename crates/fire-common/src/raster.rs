//! In-memory raster arrays.
//!
//! A `RasterGrid` is an owned 2-D array in row-major order, the shape a
//! raster-source adapter hands to the extraction pipeline after decoding
//! a product file. Production tiles are 1200x1200 (1 km products) or
//! 2400x2400 (500 m products), but any shape is accepted.

use crate::error::{FireMapError, FireMapResult};

/// A 2-D numeric array in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> RasterGrid<T> {
    /// Create a grid from a flat row-major vector.
    ///
    /// Fails if the data length does not match `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> FireMapResult<Self> {
        if data.len() != rows * cols {
            return Err(FireMapError::invalid_shape(format!(
                "expected {} values for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a grid from nested row vectors.
    ///
    /// Fails if the rows have uneven lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> FireMapResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(FireMapError::invalid_shape(format!(
                    "ragged rows: expected {} columns, got {}",
                    n_cols,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Create a grid filled with a single value.
    pub fn filled(value: T, rows: usize, cols: usize) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Grid shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the value at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Check whether another grid has the same shape.
    pub fn same_shape<U>(&self, other: &RasterGrid<U>) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// All (row, col) positions whose value satisfies the predicate,
    /// in row-major scan order.
    pub fn positions_where<P>(&self, mut predicate: P) -> Vec<(usize, usize)>
    where
        P: FnMut(T) -> bool,
    {
        let mut positions = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if predicate(self.data[row * self.cols + col]) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Raw row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A dataset read result carrying an explicit missing-data signal.
///
/// An all-zero grid is real data (no detections); only `NoData` means the
/// adapter could not produce the array. The core never infers missingness
/// from array contents.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetArray<T> {
    /// The dataset was read successfully.
    Data(RasterGrid<T>),
    /// The dataset is not available in the source.
    NoData,
}

impl<T: Copy> DatasetArray<T> {
    /// Borrow the grid if data is present.
    pub fn as_grid(&self) -> Option<&RasterGrid<T>> {
        match self {
            DatasetArray::Data(grid) => Some(grid),
            DatasetArray::NoData => None,
        }
    }

    /// Whether this read produced no data.
    pub fn is_no_data(&self) -> bool {
        matches!(self, DatasetArray::NoData)
    }
}
