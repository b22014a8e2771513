//! Transition engine tests: bounds, landing and determinism

use std::collections::{HashSet, VecDeque};

use html_tetris::core::{
    Field, FixedSelector, GameState, PieceSelector, SeededSelector, Shape, TransitionError,
};
use html_tetris::types::{Action, PieceKind, SPAWN_BUFFER_ROWS};

/// Every state reachable from `initial`, deduplicated structurally.
fn reachable(initial: GameState, selector: &dyn PieceSelector) -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut out = Vec::new();
    seen.insert(initial.clone());
    queue.push_back(initial);

    while let Some(state) = queue.pop_front() {
        for action in Action::ALL {
            if let Ok(next) = state.apply(action, selector) {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
        out.push(state);
    }
    out
}

// ============== Bar On A 5x4 Field ==============

#[test]
fn test_bar_exactly_field_width() {
    let initial = GameState::with_piece(5, 4, PieceKind::I).unwrap();

    assert_eq!(initial.right(), Err(TransitionError::OutOfBounds));
    assert_eq!(initial.left(), Err(TransitionError::OutOfBounds));

    let next = initial.down(&FixedSelector(PieceKind::O)).unwrap();
    for col in 0..4 {
        assert_eq!(next.field().get(4, col), Some(true));
    }
    assert_eq!(next.field().occupied_count(), 4);

    // Bottom rendered row is the bottom field row.
    let grid = next.render();
    assert_eq!(grid.height(), 5 + SPAWN_BUFFER_ROWS);
    for col in 0..4 {
        assert!(grid.get(5 + 3, col));
    }
}

#[test]
fn test_vertical_bar_walks_to_right_wall() {
    let mut state = GameState::with_piece(5, 4, PieceKind::I)
        .unwrap()
        .rotate()
        .unwrap();
    for expected in 1..4 {
        state = state.right().unwrap();
        assert_eq!(state.h_pos(), expected);
    }
    assert_eq!(state.right(), Err(TransitionError::OutOfBounds));

    let landed = state.down(&FixedSelector(PieceKind::O)).unwrap();
    for row in 1..5 {
        assert_eq!(landed.field().get(row, 3), Some(true));
    }
    assert_eq!(landed.field().get(0, 3), Some(false));
}

#[test]
fn test_stack_until_game_over() {
    let sel = FixedSelector(PieceKind::I);
    let mut state = GameState::with_piece(5, 4, PieceKind::I).unwrap();
    for filled in 1..=5 {
        state = state.down(&sel).unwrap();
        assert_eq!(state.field().occupied_count(), filled * 4);
    }
    assert_eq!(state.down(&sel), Err(TransitionError::GameOver));
}

// ============== Landing ==============

#[test]
fn test_landing_stops_above_first_overlap_scanning_from_top() {
    // A hole under an overhang: the scan stops at the overhang even though
    // the column below it is open.
    //
    //   row 0  ....
    //   row 1  ....
    //   row 2  X...
    //   row 3  ....
    //   row 4  ....
    let mut field = Field::new(5, 4).unwrap();
    field.set(2, 0, true);
    let state = GameState::new(field, Shape::of(PieceKind::I).rotate(), 0).unwrap();

    assert_eq!(state.landing_row(), None);
    assert_eq!(
        state.down(&FixedSelector(PieceKind::O)),
        Err(TransitionError::GameOver)
    );

    let mut field = Field::new(5, 4).unwrap();
    field.set(2, 0, true);
    let o = GameState::new(field, Shape::of(PieceKind::O).clone(), 0).unwrap();
    assert_eq!(o.landing_row(), Some(0));
}

#[test]
fn test_rotate_right_left_keep_field() {
    let mut field = Field::new(5, 4).unwrap();
    field.set(4, 2, true);
    let state = GameState::new(field.clone(), Shape::of(PieceKind::T).clone(), 0).unwrap();

    assert_eq!(state.rotate().unwrap().field(), &field);
    assert_eq!(state.right().unwrap().field(), &field);
    assert_eq!(state.right().unwrap().left().unwrap().field(), &field);
}

#[test]
fn test_down_spawns_at_left_wall() {
    let state = GameState::with_piece(5, 4, PieceKind::O)
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap();
    let next = state.down(&FixedSelector(PieceKind::T)).unwrap();
    assert_eq!(next.h_pos(), 0);
    assert_eq!(next.shape(), Shape::of(PieceKind::T));
    assert_eq!(next.field().get(4, 2), Some(true));
    assert_eq!(next.field().get(4, 3), Some(true));
}

// ============== Properties Over Whole Reachable Sets ==============

#[test]
fn test_boundaries_hold_in_every_reachable_state() {
    let sel = SeededSelector::new(3);
    let initial = GameState::initial(4, 4, &sel).unwrap();
    for state in reachable(initial, &sel) {
        assert!(state.h_pos() + state.shape().width() <= state.field().width());
        if state.h_pos() == 0 {
            assert_eq!(state.left(), Err(TransitionError::OutOfBounds));
        }
        if let Ok(r) = state.rotate() {
            assert!(r.h_pos() + r.shape().width() <= 4);
        }
        if let Ok(r) = state.right() {
            assert!(r.h_pos() + r.shape().width() <= 4);
        }
    }
}

#[test]
fn test_down_adds_exactly_the_piece() {
    let sel = SeededSelector::new(11);
    let initial = GameState::initial(4, 3, &sel).unwrap();
    for state in reachable(initial, &sel) {
        let Ok(next) = state.down(&sel) else {
            continue;
        };
        let before = state.field();
        let after = next.field();
        assert_eq!(
            after.occupied_count(),
            before.occupied_count() + state.shape().cell_count()
        );
        // Settled cells never move or vanish.
        for (b, a) in before.rows().iter().zip(after.rows()) {
            assert_eq!(b & a, *b);
        }
    }
}

#[test]
fn test_transitions_are_deterministic() {
    let sel = SeededSelector::new(99);
    let initial = GameState::initial(4, 4, &sel).unwrap();
    for state in reachable(initial, &sel).into_iter().take(500) {
        for action in Action::ALL {
            let a = state.apply(action, &sel);
            let b = state.apply(action, &sel);
            assert_eq!(a, b);
            if let (Ok(a), Ok(b)) = (a, b) {
                assert_eq!(a.id(), b.id());
            }
        }
    }
}

#[test]
fn test_game_over_only_from_down() {
    let sel = FixedSelector(PieceKind::O);
    let initial = GameState::with_piece(3, 3, PieceKind::O).unwrap();
    for state in reachable(initial, &sel) {
        for action in [Action::Rotate, Action::Left, Action::Right] {
            assert_ne!(state.apply(action, &sel), Err(TransitionError::GameOver));
        }
    }
}
