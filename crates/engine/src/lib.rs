//! State-space explorer.
//!
//! Walks every state reachable from an initial [`GameState`](core::GameState)
//! and yields one [`StateRecord`] per distinct rendered grid, together with
//! the edge taken by each action.
//!
//! ```
//! use html_tetris_core::{FixedSelector, GameState};
//! use html_tetris_engine::{Edge, Explorer};
//! use html_tetris_types::{Action, PieceKind};
//!
//! let selector = FixedSelector(PieceKind::O);
//! let initial = GameState::with_piece(2, 2, PieceKind::O).unwrap();
//! let records: Vec<_> = Explorer::new(initial, &selector)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! // The first drop fills the field; the second has nowhere to go.
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].edges.get(Action::Down), Some(Edge::GameOver));
//! ```

pub mod edges;
pub mod explore;

pub use html_tetris_core as core;
pub use html_tetris_types as types;

pub use edges::{Edge, EdgeMap};
pub use explore::{CancelToken, ExploreError, ExploreStats, Explorer, RecordSink, StateRecord};
