//! Core types module - shared vocabulary for the DFA generator
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the simulation core, the explorer and the page emitter alike.
//!
//! # Field Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FIELD_HEIGHT` | 5 | Settled rows when `FIELD_HEIGHT` is unset |
//! | `DEFAULT_FIELD_WIDTH` | 4 | Columns when `FIELD_WIDTH` is unset |
//! | `SPAWN_BUFFER_ROWS` | 4 | Rows above the field where the active piece floats |
//! | `MAX_FIELD_DIM` | 64 | Upper bound for either dimension |
//!
//! # Examples
//!
//! ```
//! use html_tetris_types::{Action, PieceKind};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = Action::from_str("Down").unwrap();
//! assert_eq!(action, Action::Down);
//! assert_eq!(action.as_str(), "down");
//! ```

/// Settled field height used when none is configured
pub const DEFAULT_FIELD_HEIGHT: usize = 5;

/// Field width used when none is configured
pub const DEFAULT_FIELD_WIDTH: usize = 4;

/// Height of the spawn buffer drawn above the settled field.
///
/// No catalogue shape is taller than this in any orientation.
pub const SPAWN_BUFFER_ROWS: usize = 4;

/// Largest supported field dimension (rows are packed into `u64`)
pub const MAX_FIELD_DIM: usize = 64;

/// Narrowest supported field (the O piece must fit)
pub const MIN_FIELD_WIDTH: usize = 2;

/// The seven tetromino piece kinds, in catalogue order
///
/// - **I**: horizontal bar, 1x4
/// - **J**: 2x3, hook on the left
/// - **L**: 2x3, hook on the right
/// - **O**: 2x2 square
/// - **S**: 2x3, S-shaped
/// - **T**: 2x3, T-shaped
/// - **Z**: 2x3, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use html_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position in the catalogue (0..7)
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Player actions that move the automaton from one page to the next
///
/// The declaration order is the order in which the explorer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Rotate the active piece 90° clockwise in place
    Rotate,
    /// Shift the active piece one column right
    Right,
    /// Shift the active piece one column left
    Left,
    /// Drop the active piece, settle it and spawn the next one
    Down,
}

impl Action {
    /// All actions in exploration order
    pub const ALL: [Action; 4] = [Action::Rotate, Action::Right, Action::Left, Action::Down];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use html_tetris_types::Action;
    ///
    /// assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
    /// assert_eq!(Action::from_str("LEFT"), Some(Action::Left));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(Action::Rotate),
            "right" => Some(Action::Right),
            "left" => Some(Action::Left),
            "down" => Some(Action::Down),
            _ => None,
        }
    }

    /// Lowercase name, also used as the key in the JSON graph dump
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Rotate => "rotate",
            Action::Right => "right",
            Action::Left => "left",
            Action::Down => "down",
        }
    }

    /// Capitalized link label used on the generated pages
    pub fn label(&self) -> &'static str {
        match self {
            Action::Rotate => "Rotate",
            Action::Right => "Right",
            Action::Left => "Left",
            Action::Down => "Down",
        }
    }

    /// Stable slot index for fixed-size per-action tables
    pub fn index(&self) -> usize {
        match self {
            Action::Rotate => 0,
            Action::Right => 1,
            Action::Left => 2,
            Action::Down => 3,
        }
    }
}
