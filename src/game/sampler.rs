use super::grid::{Cell, Grid};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// Choose a cell of `grid` uniformly at random from among those not in
/// `occupied`.  Every cell in `occupied` must lie on the grid.
///
/// # Errors
///
/// Returns `Err` if every cell of the grid is occupied.
pub(crate) fn sample_safe<R: Rng + ?Sized>(
    grid: Grid,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Result<Cell, GridFull> {
    if occupied.len() >= grid.capacity() {
        return Err(GridFull);
    }
    grid.cells()
        .filter(|p| !occupied.contains(p))
        .choose(rng)
        .ok_or(GridFull)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the grid")]
pub(crate) struct GridFull;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::layout::Position;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_returns_occupied() {
        let grid = Grid::from_screen(60, 30, 10).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut occupied = HashSet::new();
        // Fill the grid one cell at a time; each draw must land on a free cell.
        for _ in 0..grid.capacity() {
            let cell = sample_safe(grid, &occupied, &mut rng).unwrap();
            assert!(cell.x < grid.columns() && cell.y < grid.rows());
            assert!(occupied.insert(cell), "{cell:?} was already occupied");
        }
        assert_eq!(occupied.len(), grid.capacity());
    }

    #[test]
    fn single_free_cell() {
        let grid = Grid::from_screen(60, 30, 10).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let free = Position::new(4, 1);
        let occupied = grid.cells().filter(|&p| p != free).collect::<HashSet<_>>();
        for _ in 0..10 {
            assert_eq!(sample_safe(grid, &occupied, &mut rng), Ok(free));
        }
    }

    #[test]
    fn full_grid() {
        let grid = Grid::from_screen(60, 30, 10).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = grid.cells().collect::<HashSet<_>>();
        assert_eq!(sample_safe(grid, &occupied, &mut rng), Err(GridFull));
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = Grid::from_screen(60, 30, 10).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = HashSet::from([Position::new(0, 0), Position::new(5, 2)]);
        let seen = (0..2000)
            .map(|_| sample_safe(grid, &occupied, &mut rng).unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), grid.capacity() - occupied.len());
    }
}
