use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use serde::Deserialize;
use std::collections::VecDeque;

/// The snake: where it is and which way it is going
///
/// The head is kept apart from the rest of the body so that the snake always
/// has at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(crate) head: Cell,

    /// The positions of the cells behind the head, starting with the one
    /// adjacent to the head and ending with the tail
    pub(crate) body: VecDeque<Cell>,

    /// The direction in which the snake last moved
    pub(crate) direction: Direction,
}

impl Snake {
    /// Create the snake a new game starts with: three cells in a row, facing
    /// right, at [`consts::START_BODY_PIXELS`].
    pub(crate) fn starting(grid: Grid) -> Snake {
        let mut cells = consts::START_BODY_PIXELS
            .iter()
            .map(|&(x, y)| grid.cell_at(x, y));
        let head = cells.next().unwrap_or_default();
        Snake {
            head,
            body: cells.collect(),
            direction: Direction::Right,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over all of the snake's cells from head to tail
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Returns `true` if the snake is allowed to move in `direction` next,
    /// i.e., if doing so would not reverse it onto its own neck
    pub(crate) fn can_turn(&self, direction: Direction) -> bool {
        !self.direction.is_reversal(direction)
    }

    /// Return the cell the head would move to if the snake moved in
    /// `direction`
    pub(crate) fn propose_head(&self, grid: Grid, direction: Direction) -> Cell {
        grid.advance(self.head, direction)
    }

    /// Returns `true` if moving the head to `candidate` would run the snake
    /// into itself.  This must be called before the move is committed.
    ///
    /// Under [`TailRule::Vacating`], the tail does not count when the snake
    /// is not growing, as it moves out of the way on the same tick.
    pub(crate) fn would_self_collide(&self, candidate: Cell, grows: bool, rule: TailRule) -> bool {
        let mut span = self.len();
        if rule == TailRule::Vacating && !grows {
            span -= 1;
        }
        self.cells().take(span).any(|c| c == candidate)
    }

    /// Move the head to `candidate`, recording that the snake moved in
    /// `direction`.  If `grew` is false, the tail is dropped so that the
    /// length stays the same.
    pub(crate) fn commit_move(&mut self, candidate: Cell, direction: Direction, grew: bool) {
        self.body.push_front(self.head);
        self.head = candidate;
        self.direction = direction;
        if !grew {
            let _ = self.body.pop_back();
        }
    }
}

/// Which of the snake's cells a head move is checked against
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TailRule {
    /// Every cell except a tail that is about to be vacated
    #[default]
    Vacating,

    /// Every cell, including the tail even when it is about to move away
    Strict,
}
