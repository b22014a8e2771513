//! State identity - 128-bit FNV-1a over the rendered grid
//!
//! Two states with the same rendered grid share one [`StateId`]. The digest
//! covers the grid dimensions followed by every row mask, so grids of
//! different shapes never feed the hasher the same byte stream.
//!
//! Ids are stable within a process. FNV happens to be stable across runs and
//! platforms too, but page names are not meant to be compared between runs.

use std::fmt;

use crate::render::RenderedGrid;

/// Identity of a rendered state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u128);

impl StateId {
    pub fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Page file name, e.g. `hash0123...cdef.html`
    pub fn page_name(self) -> String {
        format!("hash{}.html", self)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// 128-bit FNV-1a.
#[derive(Debug, Clone)]
pub struct Fnv1a128 {
    state: u128,
}

impl Fnv1a128 {
    const OFFSET_BASIS: u128 = 0x6c62272e07bb014262b821756295c58d;
    const PRIME: u128 = 0x0000000001000000000000000000013B;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u128;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    pub fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    pub fn finish128(&self) -> u128 {
        self.state
    }
}

impl Default for Fnv1a128 {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of a rendered grid
pub fn fingerprint(grid: &RenderedGrid) -> StateId {
    let mut h = Fnv1a128::new();
    h.write_u64(grid.height() as u64);
    h.write_u64(grid.width() as u64);
    for &row in grid.row_masks() {
        h.write_u64(row);
    }
    StateId(h.finish128())
}
