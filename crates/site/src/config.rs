//! Run configuration read from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `FIELD_HEIGHT` | 5 |
//! | `FIELD_WIDTH` | 4 |
//! | `TETRIS_DFA_OUT_DIR` | `static` |
//! | `TETRIS_DFA_SEED` | derived from the clock |
//! | `TETRIS_DFA_PIECE` | unset (seeded choice) |
//! | `TETRIS_DFA_GRAPH_PATH` | unset (no dump) |
//! | `TETRIS_DFA_QUIET` | unset |
//!
//! Unparseable values fall back to the default; dimensions are checked by
//! [`SiteConfig::validate`].

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{Field, FixedSelector, PieceSelector, SeededSelector};
use crate::types::{PieceKind, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub height: usize,
    pub width: usize,
    pub out_dir: PathBuf,
    pub seed: u32,
    /// Pin every spawned piece (the opening one included) to one kind
    pub piece: Option<PieceKind>,
    /// JSON-lines dump of every emitted record
    pub graph_path: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_FIELD_HEIGHT,
            width: DEFAULT_FIELD_WIDTH,
            out_dir: PathBuf::from("static"),
            seed: 1,
            piece: None,
            graph_path: None,
            quiet: false,
        }
    }
}

impl SiteConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let height = lookup("FIELD_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let width = lookup("FIELD_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let out_dir = non_empty(lookup("TETRIS_DFA_OUT_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.out_dir);

        let seed = lookup("TETRIS_DFA_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let piece = non_empty(lookup("TETRIS_DFA_PIECE")).and_then(|s| PieceKind::from_str(&s));

        let graph_path = non_empty(lookup("TETRIS_DFA_GRAPH_PATH")).map(PathBuf::from);

        let quiet = lookup("TETRIS_DFA_QUIET")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            height,
            width,
            out_dir,
            seed,
            piece,
            graph_path,
            quiet,
        }
    }

    /// Reject dimensions the field cannot represent and pinned pieces that
    /// do not fit.
    pub fn validate(&self) -> Result<()> {
        Field::new(self.height, self.width)?;

        if let Some(kind) = self.piece {
            FixedSelector::for_width(kind, self.width)
                .with_context(|| format!("TETRIS_DFA_PIECE={}", kind.as_str()))?;
        }
        Ok(())
    }

    /// Piece selector for this run
    pub fn selector(&self) -> Box<dyn PieceSelector> {
        match self.piece {
            Some(kind) => Box::new(FixedSelector(kind)),
            None => Box::new(SeededSelector::new(self.seed)),
        }
    }

    /// Directory holding the per-state pages
    pub fn state_dir(&self) -> PathBuf {
        self.out_dir.join("state")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}
