//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds the game rules of the simplified falling-block game whose
//! reachable states become the generated pages. It has no I/O.
//!
//! - **Deterministic**: every transition is a pure function of its input
//!   state (and the selector, which is itself pure)
//! - **Immutable states**: transitions build new states; unchanged fields
//!   are shared between a state and its rotate/left/right successors
//!
//! # Module Structure
//!
//! - [`shape`]: the seven base shapes and clockwise rotation
//! - [`field`]: settled occupancy grid with overlap checks
//! - [`game_state`]: active piece + field, and the four transitions
//! - [`render`]: the `(H + 4) x W` grid a page displays
//! - [`fingerprint`]: 128-bit identity of a rendered grid
//! - [`rng`]: seedable next-piece selection
//!
//! # Game Rules
//!
//! - The active piece floats in a four-row buffer above the field
//! - `rotate` turns it clockwise in place; `left`/`right` shift it one column
//! - `down` drops it as far as it goes, settles it and spawns the next piece
//!   at the left wall; no lines are ever cleared
//! - A piece that cannot enter the field ends the game
//!
//! # Example
//!
//! ```
//! use html_tetris_core::{FixedSelector, GameState, TransitionError};
//! use html_tetris_types::PieceKind;
//!
//! let state = GameState::with_piece(5, 4, PieceKind::I).unwrap();
//! assert_eq!(state.right(), Err(TransitionError::OutOfBounds));
//!
//! let next = state.down(&FixedSelector(PieceKind::O)).unwrap();
//! assert_eq!(next.field().occupied_count(), 4);
//! ```

pub mod field;
pub mod fingerprint;
pub mod game_state;
pub mod render;
pub mod rng;
pub mod shape;

pub use html_tetris_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, FieldError};
pub use fingerprint::{fingerprint, StateId};
pub use game_state::{GameState, TransitionError};
pub use render::RenderedGrid;
pub use rng::{FixedSelector, PieceSelector, SeededSelector, SimpleRng};
pub use shape::{catalogue, Shape};
