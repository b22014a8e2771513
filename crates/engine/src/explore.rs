//! State-space explorer
//!
//! Depth-first walk over every state reachable from one initial state. Each
//! state is emitted exactly once as a [`StateRecord`]: its id, its rendered
//! grid and its out-edges.
//!
//! Deduplication is by [`StateId`]. An id enters the visited set when the
//! state is first discovered, so a state reached along many paths (right then
//! left, different drop orders producing the same field) is pushed once.
//!
//! The walk terminates because rotate/left/right only permute finitely many
//! piece placements over a fixed field, and down strictly adds settled cells
//! to a bounded grid.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{fingerprint, GameState, PieceSelector, RenderedGrid, StateId, TransitionError};
use crate::edges::{Edge, EdgeMap};
use crate::types::Action;

/// One emitted state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub id: StateId,
    pub grid: RenderedGrid,
    pub edges: EdgeMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreError {
    /// Stopped through a [`CancelToken`] before the worklist drained
    Cancelled,
}

impl ExploreError {
    pub fn message(self) -> &'static str {
        match self {
            ExploreError::Cancelled => "exploration cancelled before completion",
        }
    }
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExploreError {}

/// Shared flag checked once per explorer iteration
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Running totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Records emitted so far
    pub emitted: usize,
    /// Distinct states discovered (the visited set size)
    pub discovered: usize,
    /// Discovered but not yet emitted
    pub pending: usize,
    /// State-to-state edges recorded
    pub state_edges: usize,
    /// Edges into the end page
    pub game_over_edges: usize,
}

/// Consumer of emitted records
pub trait RecordSink {
    type Error: From<ExploreError>;

    fn record(&mut self, record: &StateRecord) -> Result<(), Self::Error>;
}

impl RecordSink for Vec<StateRecord> {
    type Error = ExploreError;

    fn record(&mut self, record: &StateRecord) -> Result<(), Self::Error> {
        self.push(record.clone());
        Ok(())
    }
}

pub struct Explorer<'a> {
    selector: &'a dyn PieceSelector,
    initial_id: StateId,
    visited: HashSet<StateId>,
    worklist: Vec<(StateId, GameState)>,
    cancel: CancelToken,
    stats: ExploreStats,
    done: bool,
}

impl<'a> Explorer<'a> {
    pub fn new(initial: GameState, selector: &'a dyn PieceSelector) -> Self {
        let initial_id = initial.id();
        let mut visited = HashSet::new();
        visited.insert(initial_id);

        Self {
            selector,
            initial_id,
            visited,
            worklist: vec![(initial_id, initial)],
            cancel: CancelToken::new(),
            stats: ExploreStats {
                discovered: 1,
                pending: 1,
                ..ExploreStats::default()
            },
            done: false,
        }
    }

    /// Use an externally owned cancellation flag
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Id of the state the walk started from (the Restart target)
    pub fn initial_id(&self) -> StateId {
        self.initial_id
    }

    pub fn stats(&self) -> ExploreStats {
        self.stats
    }

    /// Drain the walk into `sink`; stops at the first sink error or on
    /// cancellation.
    pub fn run<K: RecordSink>(mut self, sink: &mut K) -> Result<ExploreStats, K::Error> {
        while let Some(record) = self.next() {
            sink.record(&record?)?;
        }
        Ok(self.stats)
    }

    fn expand(&mut self, id: StateId, state: &GameState) -> StateRecord {
        let mut edges = EdgeMap::new();

        for action in Action::ALL {
            match state.apply(action, self.selector) {
                Ok(next) => {
                    let next_id = fingerprint(&next.render());
                    if self.visited.insert(next_id) {
                        self.worklist.push((next_id, next));
                    }
                    edges.set(action, Edge::State(next_id));
                    self.stats.state_edges += 1;
                }
                Err(TransitionError::OutOfBounds) => {}
                Err(TransitionError::GameOver) => {
                    edges.set(action, Edge::GameOver);
                    self.stats.game_over_edges += 1;
                }
            }
        }

        StateRecord {
            id,
            grid: state.render(),
            edges,
        }
    }
}

impl Iterator for Explorer<'_> {
    type Item = Result<StateRecord, ExploreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.cancel.is_cancelled() {
            self.done = true;
            self.worklist.clear();
            return Some(Err(ExploreError::Cancelled));
        }

        let Some((id, state)) = self.worklist.pop() else {
            self.done = true;
            return None;
        };

        let record = self.expand(id, &state);
        self.stats.emitted += 1;
        self.stats.discovered = self.visited.len();
        self.stats.pending = self.worklist.len();
        Some(Ok(record))
    }
}

impl std::iter::FusedIterator for Explorer<'_> {}
