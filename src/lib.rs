//! HTML Tetris DFA (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can write `html_tetris::{core,engine,site,term,types}`.

pub use html_tetris_core as core;
pub use html_tetris_engine as engine;
pub use html_tetris_site as site;
pub use html_tetris_term as term;
pub use html_tetris_types as types;
