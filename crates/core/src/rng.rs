//! RNG module - deterministic piece selection
//!
//! The piece spawned after a landing is chosen by a [`PieceSelector`]. To keep
//! every transition a pure function of its input state, selectors decide from
//! the settled field alone: the same field always spawns the same piece.
//!
//! [`SeededSelector`] mixes a run seed with a digest of the field and feeds an
//! LCG; [`FixedSelector`] always returns one kind and is what tests use.

use arrayvec::ArrayVec;

use crate::field::{Field, FieldError};
use crate::fingerprint::Fnv1a128;
use crate::shape::Shape;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Chooses the piece that spawns on a given settled field.
///
/// Implementations must be pure (same field, same answer) and must only
/// return kinds whose base shape fits the field width.
pub trait PieceSelector {
    fn select(&self, field: &Field) -> PieceKind;
}

impl<S: PieceSelector + ?Sized> PieceSelector for &S {
    fn select(&self, field: &Field) -> PieceKind {
        (**self).select(field)
    }
}

/// Piece kinds whose base shape fits `width`, in catalogue order
pub fn kinds_fitting(width: usize) -> ArrayVec<PieceKind, 7> {
    PieceKind::ALL
        .iter()
        .copied()
        .filter(|&k| Shape::of(k).width() <= width)
        .collect()
}

/// Seeded choice among the pieces that fit the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededSelector {
    seed: u32,
}

impl SeededSelector {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl PieceSelector for SeededSelector {
    fn select(&self, field: &Field) -> PieceKind {
        let mut h = Fnv1a128::new();
        h.write(&self.seed.to_le_bytes());
        for &row in field.rows() {
            h.write_u64(row);
        }
        let digest = h.finish128();
        let folded = (digest ^ (digest >> 64)) as u64;
        let mut rng = SimpleRng::new((folded ^ (folded >> 32)) as u32);

        let fits = kinds_fitting(field.width());
        // Field::new guarantees width >= 2, so at least O fits.
        fits[rng.next_range(fits.len() as u32) as usize]
    }
}

/// Always the same piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector(pub PieceKind);

impl FixedSelector {
    /// Pin `kind`, rejecting it if its base shape is wider than `width`
    pub fn for_width(kind: PieceKind, width: usize) -> Result<Self, FieldError> {
        let shape_width = Shape::of(kind).width();
        if shape_width > width {
            return Err(FieldError::ShapeTooWide {
                shape_width,
                field_width: width,
            });
        }
        Ok(Self(kind))
    }
}

impl PieceSelector for FixedSelector {
    fn select(&self, _field: &Field) -> PieceKind {
        self.0
    }
}
