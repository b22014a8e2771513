//! Rendered occupancy grid - what a player sees on a page
//!
//! The grid is `SPAWN_BUFFER_ROWS + field.height()` rows by `field.width()`
//! columns. The top four rows hold the floating active piece, bottom-aligned
//! and shifted to its horizontal position; the remaining rows are the settled
//! field.

use crate::field::Field;
use crate::shape::Shape;
use crate::types::SPAWN_BUFFER_ROWS;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedGrid {
    width: usize,
    rows: Vec<u64>,
}

impl RenderedGrid {
    /// Overlay `shape` at `h_pos` in the spawn buffer on top of `field`
    pub fn compose(field: &Field, shape: &Shape, h_pos: usize) -> Self {
        let mut rows = vec![0u64; SPAWN_BUFFER_ROWS];
        let top = SPAWN_BUFFER_ROWS - shape.height();
        for (r, &mask) in shape.rows().iter().enumerate() {
            rows[top + r] = (mask as u64) << h_pos;
        }
        rows.extend_from_slice(field.rows());

        Self {
            width: field.width(),
            rows,
        }
    }

    /// Total rows, spawn buffer included
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row bitmasks, top to bottom
    pub fn row_masks(&self) -> &[u64] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows.len() && col < self.width && self.rows[row] & (1u64 << col) != 0
    }

    /// Rows as 0/1 cells, top to bottom
    pub fn to_cells(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|&mask| {
                (0..self.width)
                    .map(|c| ((mask >> c) & 1) as u8)
                    .collect()
            })
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}
