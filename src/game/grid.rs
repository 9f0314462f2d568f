use super::direction::Direction;
use ratatui::layout::{Position, Positions, Rect, Size};
use thiserror::Error;

/// A single grid-aligned position, given as a column & row index
pub(crate) type Cell = Position;

/// The playing field: a fixed number of columns and rows obtained by cutting a
/// screen of some pixel size into square blocks.  Movement off any edge wraps
/// around to the opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    columns: u16,
    rows: u16,
    block: u16,
}

impl Grid {
    /// The smallest number of columns that can hold the starting snake
    pub(crate) const MIN_COLUMNS: u16 = 6;

    /// The smallest number of rows that can hold the starting snake
    pub(crate) const MIN_ROWS: u16 = 3;

    /// Construct a grid covering a `width`×`height` pixel screen divided into
    /// `block`×`block` pixel cells.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `block` is zero, if either dimension is not a multiple
    /// of `block`, or if the result has fewer than [`Grid::MIN_COLUMNS`]
    /// columns or [`Grid::MIN_ROWS`] rows.
    pub(crate) fn from_screen(width: u16, height: u16, block: u16) -> Result<Grid, GridError> {
        if block == 0 {
            return Err(GridError::ZeroBlock);
        }
        if width % block != 0 || height % block != 0 {
            return Err(GridError::Misaligned {
                width,
                height,
                block,
            });
        }
        let columns = width / block;
        let rows = height / block;
        if columns < Self::MIN_COLUMNS || rows < Self::MIN_ROWS {
            return Err(GridError::TooSmall { columns, rows });
        }
        Ok(Grid {
            columns,
            rows,
            block,
        })
    }

    pub(crate) fn columns(self) -> u16 {
        self.columns
    }

    pub(crate) fn rows(self) -> u16 {
        self.rows
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.columns,
            height: self.rows,
        }
    }

    /// Total number of cells in the grid
    pub(crate) fn capacity(self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn cells(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Return the cell containing the screen pixel at (`x`, `y`).  Pixels
    /// beyond the screen's extent wrap around.
    pub(crate) fn cell_at(self, x: u16, y: u16) -> Cell {
        Position {
            x: (x / self.block) % self.columns,
            y: (y / self.block) % self.rows,
        }
    }

    /// Return the cell one step from `cell` in `direction`, wrapping around
    /// the edges of the grid
    pub(crate) fn advance(self, cell: Cell, direction: Direction) -> Cell {
        let Position { mut x, mut y } = cell;
        match direction {
            Direction::Up => y = decrement_wrapping(y, self.rows),
            Direction::Down => y = increment_wrapping(y, self.rows),
            Direction::Left => x = decrement_wrapping(x, self.columns),
            Direction::Right => x = increment_wrapping(x, self.columns),
        }
        Position { x, y }
    }
}

// `extent` is always nonzero, as guaranteed by `Grid::from_screen()`.

fn decrement_wrapping(v: u16, extent: u16) -> u16 {
    (v % extent).checked_sub(1).unwrap_or(extent - 1)
}

fn increment_wrapping(v: u16, extent: u16) -> u16 {
    let v = v % extent + 1;
    if v == extent {
        0
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("block size must be nonzero")]
    ZeroBlock,
    #[error("screen size {width}x{height} is not a multiple of block size {block}")]
    Misaligned { width: u16, height: u16, block: u16 },
    #[error(
        "grid of {columns}x{rows} cells is too small; need at least {}x{} cells",
        Grid::MIN_COLUMNS,
        Grid::MIN_ROWS
    )]
    TooSmall { columns: u16, rows: u16 },
}
