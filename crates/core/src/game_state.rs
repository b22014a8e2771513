//! Game state - the unit of exploration and its four transitions
//!
//! A [`GameState`] is a settled [`Field`] plus the active [`Shape`] floating
//! in the spawn buffer at column `h_pos`. The active piece has no vertical
//! position: `down` resolves gravity, settles the piece and spawns the next
//! one in a single step.
//!
//! Every transition is pure and returns a new state or a [`TransitionError`].
//! Only `down` changes the field, and it only ever adds cells.

use std::fmt;
use std::sync::Arc;

use crate::field::{Field, FieldError};
use crate::fingerprint::{fingerprint, StateId};
use crate::render::RenderedGrid;
use crate::rng::PieceSelector;
use crate::shape::Shape;
use crate::types::{Action, PieceKind};

/// Why a transition did not produce a successor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionError {
    /// The move would push the piece past a field edge; the action has no edge
    OutOfBounds,
    /// The piece cannot enter the field; the action leads to the end page
    GameOver,
}

impl TransitionError {
    pub fn code(self) -> &'static str {
        match self {
            TransitionError::OutOfBounds => "out_of_bounds",
            TransitionError::GameOver => "game_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TransitionError::OutOfBounds => "Out of bounds",
            TransitionError::GameOver => "End of Game",
        }
    }
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TransitionError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    field: Arc<Field>,
    shape: Shape,
    h_pos: usize,
}

impl GameState {
    /// Place `shape` at column `h_pos` above `field`
    pub fn new(field: Field, shape: Shape, h_pos: usize) -> Result<Self, FieldError> {
        Self::with_shared_field(Arc::new(field), shape, h_pos)
    }

    fn with_shared_field(
        field: Arc<Field>,
        shape: Shape,
        h_pos: usize,
    ) -> Result<Self, FieldError> {
        if shape.width() > field.width() {
            return Err(FieldError::ShapeTooWide {
                shape_width: shape.width(),
                field_width: field.width(),
            });
        }
        if h_pos + shape.width() > field.width() {
            return Err(FieldError::PositionOutOfBounds {
                h_pos,
                shape_width: shape.width(),
                field_width: field.width(),
            });
        }
        Ok(Self {
            field,
            shape,
            h_pos,
        })
    }

    /// Empty field with the selector's opening piece at column 0
    pub fn initial(
        height: usize,
        width: usize,
        selector: &dyn PieceSelector,
    ) -> Result<Self, FieldError> {
        let field = Field::new(height, width)?;
        let kind = selector.select(&field);
        Self::new(field, Shape::of(kind).clone(), 0)
    }

    /// Empty field with a chosen opening piece at column 0
    pub fn with_piece(height: usize, width: usize, kind: PieceKind) -> Result<Self, FieldError> {
        Self::new(Field::new(height, width)?, Shape::of(kind).clone(), 0)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn h_pos(&self) -> usize {
        self.h_pos
    }

    /// Rotate the active piece clockwise, keeping its left edge
    pub fn rotate(&self) -> Result<GameState, TransitionError> {
        let rotated = self.shape.rotate();
        if self.field.width() - self.h_pos < rotated.width() {
            return Err(TransitionError::OutOfBounds);
        }
        Ok(GameState {
            field: Arc::clone(&self.field),
            shape: rotated,
            h_pos: self.h_pos,
        })
    }

    pub fn left(&self) -> Result<GameState, TransitionError> {
        let Some(h_pos) = self.h_pos.checked_sub(1) else {
            return Err(TransitionError::OutOfBounds);
        };
        Ok(GameState {
            field: Arc::clone(&self.field),
            shape: self.shape.clone(),
            h_pos,
        })
    }

    pub fn right(&self) -> Result<GameState, TransitionError> {
        if self.field.width() - (self.h_pos + 1) < self.shape.width() {
            return Err(TransitionError::OutOfBounds);
        }
        Ok(GameState {
            field: Arc::clone(&self.field),
            shape: self.shape.clone(),
            h_pos: self.h_pos + 1,
        })
    }

    /// Drop the active piece, settle it, and spawn the selector's next piece
    /// at column 0.
    ///
    /// # Panics
    ///
    /// If the selector returns a piece wider than the field.
    pub fn down(&self, selector: &dyn PieceSelector) -> Result<GameState, TransitionError> {
        let Some(v_pos) = self.landing_row() else {
            return Err(TransitionError::GameOver);
        };

        let field = self.field.with_settled(&self.shape, v_pos, self.h_pos);
        let next = Shape::of(selector.select(&field)).clone();
        assert!(
            next.width() <= field.width(),
            "selector returned a piece of width {} for a field of width {}",
            next.width(),
            field.width()
        );

        Ok(GameState {
            field: Arc::new(field),
            shape: next,
            h_pos: 0,
        })
    }

    /// Apply one action
    pub fn apply(
        &self,
        action: Action,
        selector: &dyn PieceSelector,
    ) -> Result<GameState, TransitionError> {
        match action {
            Action::Rotate => self.rotate(),
            Action::Right => self.right(),
            Action::Left => self.left(),
            Action::Down => self.down(selector),
        }
    }

    /// Field row where the active piece's top row comes to rest.
    ///
    /// Candidate rows are scanned from the top; the piece rests one row above
    /// the first candidate that overlaps settled cells, or at the bottom if
    /// none does. None when the piece overlaps already at row 0 or is taller
    /// than the field.
    pub fn landing_row(&self) -> Option<usize> {
        let shape_height = self.shape.height();
        if shape_height > self.field.height() {
            return None;
        }
        let lowest = self.field.height() - shape_height;
        for v_pos in 0..=lowest {
            if self.field.overlaps(&self.shape, v_pos, self.h_pos) {
                return v_pos.checked_sub(1);
            }
        }
        Some(lowest)
    }

    pub fn render(&self) -> RenderedGrid {
        RenderedGrid::compose(&self.field, &self.shape, self.h_pos)
    }

    pub fn id(&self) -> StateId {
        fingerprint(&self.render())
    }
}
