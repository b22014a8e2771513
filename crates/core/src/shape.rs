//! Shape module - tetromino occupancy patterns and clockwise rotation
//!
//! A [`Shape`] is one orientation of a piece stored as up to four row
//! bitmasks (bit `c` of row `r` is the cell at column `c`). The seven base
//! shapes live in a read-only catalogue that is built once on first use.
//!
//! Rotation never mutates: [`Shape::rotate`] returns a new shape turned 90°
//! clockwise. Four rotations give back the original.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum extent of a shape in either direction
pub const SHAPE_MAX_DIM: usize = 4;

/// One orientation of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Row bitmasks, top to bottom
    rows: ArrayVec<u8, SHAPE_MAX_DIM>,
    width: u8,
}

impl Shape {
    /// Build a shape from a 0/1 matrix, top row first.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4. Shapes are
    /// only ever built from literal tables.
    pub fn from_matrix(matrix: &[&[u8]]) -> Self {
        assert!(!matrix.is_empty() && matrix.len() <= SHAPE_MAX_DIM);
        let width = matrix[0].len();
        assert!(width > 0 && width <= SHAPE_MAX_DIM);

        let mut rows = ArrayVec::new();
        for row in matrix {
            assert_eq!(row.len(), width, "ragged shape matrix");
            let mut mask = 0u8;
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    mask |= 1 << c;
                }
            }
            rows.push(mask);
        }

        Self {
            rows,
            width: width as u8,
        }
    }

    /// The base (spawn) orientation of a piece kind
    pub fn of(kind: PieceKind) -> &'static Shape {
        &catalogue()[kind.index()]
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// Whether cell (row, col) is occupied; out-of-range cells are empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width() && self.rows[row] & (1 << col) != 0
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Rotate 90° clockwise.
    ///
    /// The result has this shape's width as its height and vice versa; cell
    /// `(r, c)` of the result is cell `(height - 1 - c, r)` of `self`.
    pub fn rotate(&self) -> Shape {
        let h = self.height();
        let w = self.width();

        let mut rows = ArrayVec::new();
        for r in 0..w {
            let mut mask = 0u8;
            for c in 0..h {
                if self.get(h - 1 - c, r) {
                    mask |= 1 << c;
                }
            }
            rows.push(mask);
        }

        Shape {
            rows,
            width: h as u8,
        }
    }
}

static CATALOGUE: OnceLock<[Shape; 7]> = OnceLock::new();

/// The seven base shapes, indexed by [`PieceKind::index`]
pub fn catalogue() -> &'static [Shape; 7] {
    CATALOGUE.get_or_init(|| {
        [
            // I
            Shape::from_matrix(&[&[1, 1, 1, 1]]),
            // J
            Shape::from_matrix(&[&[1, 0, 0], &[1, 1, 1]]),
            // L
            Shape::from_matrix(&[&[0, 0, 1], &[1, 1, 1]]),
            // O
            Shape::from_matrix(&[&[1, 1], &[1, 1]]),
            // S
            Shape::from_matrix(&[&[0, 1, 1], &[1, 1, 0]]),
            // T
            Shape::from_matrix(&[&[0, 1, 0], &[1, 1, 1]]),
            // Z
            Shape::from_matrix(&[&[1, 1, 0], &[0, 1, 1]]),
        ]
    })
}
