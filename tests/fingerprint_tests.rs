use std::collections::HashSet;

use html_tetris::core::{fingerprint, Field, GameState, RenderedGrid, Shape, StateId};
use html_tetris::types::PieceKind;

fn fnv1a128_bytes(bytes: impl Iterator<Item = u8>) -> u128 {
    // FNV-1a 128-bit.
    let mut h: u128 = 0x6c62272e07bb014262b821756295c58d;
    for b in bytes {
        h ^= b as u128;
        h = h.wrapping_mul(0x0000000001000000000000000000013B);
    }
    h
}

fn reference_id(grid: &RenderedGrid) -> StateId {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(grid.height() as u64).to_le_bytes());
    bytes.extend_from_slice(&(grid.width() as u64).to_le_bytes());
    for row in grid.row_masks() {
        bytes.extend_from_slice(&row.to_le_bytes());
    }
    StateId::from_raw(fnv1a128_bytes(bytes.into_iter()))
}

#[test]
fn fingerprint_is_fnv1a128_of_dimensions_and_rows() {
    let mut field = Field::new(5, 4).unwrap();
    field.set(4, 0, true);
    field.set(4, 1, true);
    let state = GameState::new(field, Shape::of(PieceKind::Z).clone(), 1).unwrap();

    let grid = state.render();
    assert_eq!(fingerprint(&grid), reference_id(&grid));
    assert_eq!(state.id(), reference_id(&grid));
}

#[test]
fn same_picture_same_id_regardless_of_orientation_history() {
    // O rotated is still O; S rotated twice is S again.
    let o = GameState::with_piece(5, 4, PieceKind::O).unwrap();
    assert_eq!(o.rotate().unwrap().id(), o.id());

    let s = GameState::with_piece(5, 4, PieceKind::S).unwrap();
    assert_eq!(s.rotate().unwrap().rotate().unwrap().id(), s.id());
    assert_ne!(s.rotate().unwrap().id(), s.id());
}

#[test]
fn every_base_piece_at_every_column_is_distinct() {
    let mut ids = HashSet::new();
    for kind in PieceKind::ALL {
        let mut state = GameState::with_piece(5, 6, kind).unwrap();
        loop {
            assert!(ids.insert(state.id()));
            match state.right() {
                Ok(next) => state = next,
                Err(_) => break,
            }
        }
    }
    // I: 3 columns, O: 5, the other five: 4 each.
    assert_eq!(ids.len(), 3 + 5 + 5 * 4);
}
