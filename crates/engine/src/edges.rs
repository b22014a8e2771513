//! Per-state out-edges

use crate::core::StateId;
use crate::types::Action;

/// Where an action leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Another state's page
    State(StateId),
    /// The single end-of-game page
    GameOver,
}

/// Action -> edge, with absent entries for out-of-bounds actions.
///
/// Stack-only: one slot per [`Action`], indexed by [`Action::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeMap {
    slots: [Option<Edge>; 4],
}

impl EdgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, edge: Edge) {
        self.slots[action.index()] = Some(edge);
    }

    pub fn get(&self, action: Action) -> Option<Edge> {
        self.slots[action.index()]
    }

    /// Present edges in exploration order
    pub fn iter(&self) -> impl Iterator<Item = (Action, Edge)> + '_ {
        Action::ALL
            .iter()
            .filter_map(move |&a| self.get(a).map(|e| (a, e)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
