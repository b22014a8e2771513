//! Terminal progress reporting for long explorations.
//!
//! Kept out of the explorer so the core crates stay free of terminal I/O.

pub mod progress;

pub use html_tetris_engine as engine;

pub use progress::{encode_line_into, format_line, ProgressLine, REDRAW_INTERVAL};
