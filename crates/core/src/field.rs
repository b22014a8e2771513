//! Field module - the grid of settled cells
//!
//! The field is `height` rows by `width` columns, each row packed into a
//! `u64` bitmask (bit `c` = column `c`). Rows are indexed top to bottom.
//! Dimensions are fixed at construction.

use std::fmt;

use crate::shape::Shape;
use crate::types::{MAX_FIELD_DIM, MIN_FIELD_WIDTH};

/// Invalid field dimensions or piece placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidHeight(usize),
    InvalidWidth(usize),
    ShapeTooWide { shape_width: usize, field_width: usize },
    PositionOutOfBounds { h_pos: usize, shape_width: usize, field_width: usize },
}

impl FieldError {
    pub fn code(self) -> &'static str {
        match self {
            FieldError::InvalidHeight(_) | FieldError::InvalidWidth(_) => "invalid_dimensions",
            FieldError::ShapeTooWide { .. } | FieldError::PositionOutOfBounds { .. } => {
                "invalid_placement"
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FieldError::InvalidHeight(h) => {
                write!(f, "field height {} outside 1..={}", h, MAX_FIELD_DIM)
            }
            FieldError::InvalidWidth(w) => write!(
                f,
                "field width {} outside {}..={}",
                w, MIN_FIELD_WIDTH, MAX_FIELD_DIM
            ),
            FieldError::ShapeTooWide {
                shape_width,
                field_width,
            } => write!(
                f,
                "shape of width {} does not fit a field of width {}",
                shape_width, field_width
            ),
            FieldError::PositionOutOfBounds {
                h_pos,
                shape_width,
                field_width,
            } => write!(
                f,
                "shape of width {} at column {} extends past a field of width {}",
                shape_width, h_pos, field_width
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Settled occupancy grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    height: usize,
    width: usize,
    rows: Vec<u64>,
}

impl Field {
    /// Create an empty field
    pub fn new(height: usize, width: usize) -> Result<Self, FieldError> {
        if height == 0 || height > MAX_FIELD_DIM {
            return Err(FieldError::InvalidHeight(height));
        }
        if !(MIN_FIELD_WIDTH..=MAX_FIELD_DIM).contains(&width) {
            return Err(FieldError::InvalidWidth(width));
        }
        Ok(Self {
            height,
            width,
            rows: vec![0; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row bitmasks, top to bottom
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.rows[row] & (1u64 << col) != 0)
    }

    /// Set cell at (row, col).
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        if occupied {
            self.rows[row] |= 1u64 << col;
        } else {
            self.rows[row] &= !(1u64 << col);
        }
        true
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Whether `shape` placed with its top-left corner at (`v_pos`, `h_pos`)
    /// shares a cell with the settled field.
    ///
    /// The caller guarantees the shape lies inside the field.
    pub fn overlaps(&self, shape: &Shape, v_pos: usize, h_pos: usize) -> bool {
        shape
            .rows()
            .iter()
            .enumerate()
            .any(|(r, &mask)| self.rows[v_pos + r] & ((mask as u64) << h_pos) != 0)
    }

    /// Copy of this field with `shape` settled at (`v_pos`, `h_pos`).
    ///
    /// The caller guarantees the placement is in bounds and overlap-free.
    pub fn with_settled(&self, shape: &Shape, v_pos: usize, h_pos: usize) -> Field {
        debug_assert!(v_pos + shape.height() <= self.height);
        debug_assert!(h_pos + shape.width() <= self.width);
        debug_assert!(!self.overlaps(shape, v_pos, h_pos));

        let mut out = self.clone();
        for (r, &mask) in shape.rows().iter().enumerate() {
            out.rows[v_pos + r] |= (mask as u64) << h_pos;
        }
        out
    }
}
