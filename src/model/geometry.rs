//! Grid geometry - column widths and row heights
//!
//! Sizes are stored positionally. Every mutation clamps to the floor;
//! there is no ceiling at this layer (the resize gesture enforces one).

use crate::config::GridConfig;

/// Per-column widths and per-row heights in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
    min_column_width: f64,
    min_row_height: f64,
    default_row_height: f64,
}

impl GridGeometry {
    /// Create geometry for `columns` columns with default sizes from config
    pub fn new(columns: usize, config: &GridConfig) -> Self {
        let min_column_width = config.min_column_width;
        let min_row_height = config.min_row_height;
        Self {
            column_widths: vec![config.default_column_width.max(min_column_width); columns],
            row_heights: Vec::new(),
            min_column_width,
            min_row_height,
            default_row_height: config.default_row_height.max(min_row_height),
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    pub fn column_width(&self, index: usize) -> Option<f64> {
        self.column_widths.get(index).copied()
    }

    /// Height of a row; rows beyond the tracked range report the default
    pub fn row_height(&self, index: usize) -> f64 {
        self.row_heights
            .get(index)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Grow the row height array to cover `rows` rows
    ///
    /// Never shrinks: heights are positional and survive row removal.
    pub fn ensure_rows(&mut self, rows: usize) {
        if rows > self.row_heights.len() {
            self.row_heights.resize(rows, self.default_row_height);
        }
    }

    /// Add `delta` to a column width, clamped to the column floor
    ///
    /// Returns false if the index is out of range.
    pub fn resize_column(&mut self, index: usize, delta: f64) -> bool {
        let floor = self.min_column_width;
        match self.column_widths.get_mut(index) {
            Some(width) => {
                *width = (*width + delta).max(floor);
                true
            }
            None => false,
        }
    }

    /// Add `delta` to a row height, clamped to the row floor
    ///
    /// Returns false if the index is out of range.
    pub fn resize_row(&mut self, index: usize, delta: f64) -> bool {
        let floor = self.min_row_height;
        match self.row_heights.get_mut(index) {
            Some(height) => {
                *height = (*height + delta).max(floor);
                true
            }
            None => false,
        }
    }

    /// Sum of all column widths
    pub fn total_width(&self) -> f64 {
        self.column_widths.iter().sum()
    }

    /// Sum of heights for the first `rows` rows
    pub fn total_height(&self, rows: usize) -> f64 {
        (0..rows).map(|r| self.row_height(r)).sum()
    }
}
