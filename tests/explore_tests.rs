//! Explorer tests: exhaustiveness, single emission, edges, cancellation

use std::collections::{HashMap, HashSet, VecDeque};

use html_tetris::core::{
    fingerprint, FixedSelector, GameState, PieceSelector, RenderedGrid, SeededSelector, StateId,
    TransitionError,
};
use html_tetris::engine::{Edge, ExploreError, Explorer, RecordSink, StateRecord};
use html_tetris::types::{Action, PieceKind};

fn explore_all(initial: GameState, selector: &dyn PieceSelector) -> Vec<StateRecord> {
    Explorer::new(initial, selector)
        .collect::<Result<_, _>>()
        .expect("uncancelled run")
}

/// Breadth-first reference walk keyed by the rendered grid itself rather
/// than its fingerprint.
fn brute_force_grids(initial: GameState, selector: &dyn PieceSelector) -> HashSet<RenderedGrid> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(initial.render());
    queue.push_back(initial);

    while let Some(state) = queue.pop_front() {
        for action in Action::ALL {
            if let Ok(next) = state.apply(action, selector) {
                if seen.insert(next.render()) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

// ============== Exhaustiveness ==============

#[test]
fn test_matches_brute_force_3x3_fixed_piece() {
    let sel = FixedSelector(PieceKind::O);
    let initial = GameState::with_piece(3, 3, PieceKind::O).unwrap();

    let records = explore_all(initial.clone(), &sel);
    let expected = brute_force_grids(initial, &sel);

    let emitted: HashSet<RenderedGrid> = records.iter().map(|r| r.grid.clone()).collect();
    assert_eq!(records.len(), expected.len());
    assert_eq!(emitted, expected);
}

#[test]
fn test_matches_brute_force_3x3_seeded() {
    for seed in [1, 2, 3, 77] {
        let sel = SeededSelector::new(seed);
        let initial = GameState::initial(3, 3, &sel).unwrap();

        let records = explore_all(initial.clone(), &sel);
        let expected = brute_force_grids(initial, &sel);

        let emitted: HashSet<RenderedGrid> = records.iter().map(|r| r.grid.clone()).collect();
        assert_eq!(records.len(), expected.len(), "seed {}", seed);
        assert_eq!(emitted, expected, "seed {}", seed);
    }
}

#[test]
fn test_matches_brute_force_default_field() {
    let sel = SeededSelector::new(5);
    let initial = GameState::initial(5, 4, &sel).unwrap();

    let records = explore_all(initial.clone(), &sel);
    assert_eq!(records.len(), brute_force_grids(initial, &sel).len());
}

// ============== Emission ==============

#[test]
fn test_each_id_emitted_once_and_first() {
    let sel = SeededSelector::new(8);
    let initial = GameState::initial(4, 4, &sel).unwrap();
    let initial_id = initial.id();

    let records = explore_all(initial, &sel);
    assert_eq!(records[0].id, initial_id);

    let mut ids = HashSet::new();
    for r in &records {
        assert!(ids.insert(r.id), "{} emitted twice", r.id);
        assert_eq!(r.id, fingerprint(&r.grid));
    }
}

#[test]
fn test_every_edge_target_is_emitted() {
    let sel = SeededSelector::new(21);
    let initial = GameState::initial(4, 4, &sel).unwrap();
    let records = explore_all(initial, &sel);
    let ids: HashSet<StateId> = records.iter().map(|r| r.id).collect();

    let mut game_over = 0;
    for r in &records {
        for (_, edge) in r.edges.iter() {
            match edge {
                Edge::State(id) => assert!(ids.contains(&id)),
                Edge::GameOver => game_over += 1,
            }
        }
    }
    // The field never clears, so the game must be losable.
    assert!(game_over > 0);
}

#[test]
fn test_edges_agree_with_transitions() {
    let sel = FixedSelector(PieceKind::T);
    let initial = GameState::with_piece(4, 3, PieceKind::T).unwrap();

    // Rebuild id -> state with an independent walk, then re-derive edges.
    let mut states: HashMap<StateId, GameState> = HashMap::new();
    let mut queue = vec![initial.clone()];
    while let Some(s) = queue.pop() {
        if states.insert(s.id(), s.clone()).is_none() {
            for action in Action::ALL {
                if let Ok(n) = s.apply(action, &sel) {
                    queue.push(n);
                }
            }
        }
    }

    for record in explore_all(initial, &sel) {
        let state = &states[&record.id];
        for action in Action::ALL {
            let expected = match state.apply(action, &sel) {
                Ok(next) => Some(Edge::State(next.id())),
                Err(TransitionError::OutOfBounds) => None,
                Err(TransitionError::GameOver) => Some(Edge::GameOver),
            };
            assert_eq!(record.edges.get(action), expected);
        }
    }
}

#[test]
fn test_no_overlap_in_rendered_buffer_or_field() {
    // Rendered cells are single bits; the occupancy count of every grid is
    // the settled count plus the four cells of the floating piece.
    let sel = SeededSelector::new(4);
    let initial = GameState::initial(4, 4, &sel).unwrap();

    for record in explore_all(initial, &sel) {
        let field_cells: usize = record.grid.row_masks()[4..]
            .iter()
            .map(|r| r.count_ones() as usize)
            .sum();
        assert_eq!(record.grid.occupied_count(), field_cells + 4);
        assert_eq!(field_cells % 4, 0);
    }
}

// ============== Run / Cancel ==============

#[test]
fn test_run_into_vec_sink_returns_stats() {
    let sel = FixedSelector(PieceKind::O);
    let initial = GameState::with_piece(3, 4, PieceKind::O).unwrap();

    let mut sink: Vec<StateRecord> = Vec::new();
    let stats = Explorer::new(initial.clone(), &sel).run(&mut sink).unwrap();

    assert_eq!(stats.emitted, sink.len());
    assert_eq!(stats.discovered, sink.len());
    assert_eq!(stats.pending, 0);
    let edges: usize = sink.iter().map(|r| r.edges.len()).sum();
    assert_eq!(stats.state_edges + stats.game_over_edges, edges);
    assert_eq!(sink, explore_all(initial, &sel));
}

struct CancelAfter {
    seen: usize,
    limit: usize,
    token: html_tetris::engine::CancelToken,
}

impl RecordSink for CancelAfter {
    type Error = ExploreError;

    fn record(&mut self, _record: &StateRecord) -> Result<(), ExploreError> {
        self.seen += 1;
        if self.seen == self.limit {
            self.token.cancel();
        }
        Ok(())
    }
}

#[test]
fn test_cancel_mid_run_stops_between_iterations() {
    let sel = SeededSelector::new(2);
    let initial = GameState::initial(5, 4, &sel).unwrap();
    let explorer = Explorer::new(initial, &sel);

    let mut sink = CancelAfter {
        seen: 0,
        limit: 10,
        token: explorer.cancel_token(),
    };
    let err = explorer.run(&mut sink).unwrap_err();

    assert_eq!(err, ExploreError::Cancelled);
    assert_eq!(sink.seen, 10);
}

#[test]
fn test_lifo_order_goes_deep_first() {
    // With LIFO removal the second record is the last successor pushed by the
    // first one, which is its `down` successor when that is new.
    let sel = FixedSelector(PieceKind::O);
    let initial = GameState::with_piece(4, 4, PieceKind::O).unwrap();
    let down_id = initial.down(&sel).unwrap().id();

    let records = explore_all(initial, &sel);
    assert_eq!(records[1].id, down_id);
}
