//! Static site emitter.
//!
//! Turns the explorer's records into a tree of linked HTML pages, one per
//! reachable state, plus an entry page and a single game-over page.
//!
//! - See [`config`] for the environment variables a run reads
//! - See [`pages`] for the HTML markup
//! - See [`graph`] for the optional JSON-lines dump of the automaton
//! - See [`emitter`] for the directory layout and the [`generate`] driver

pub mod config;
pub mod emitter;
pub mod graph;
pub mod pages;

pub use html_tetris_core as core;
pub use html_tetris_engine as engine;
pub use html_tetris_types as types;

pub use config::SiteConfig;
pub use emitter::{generate, prepare_output_dir, PageEmitter, Summary};
pub use graph::{GraphRecord, GraphWriter};
