//! Fixed-size letter grid.
//!
//! Cells are stored in row-major order and addressed by index. Adjacency is
//! orthogonal only and never wraps across row boundaries.

use rand::Rng;

use super::letter::{Letter, LetterState, Player};

/// Vowels placed on a freshly generated grid.
pub const VOWELS: &str = "AEIOU";

/// Consonants used for every non-vowel cell of a freshly generated grid.
pub const CONSONANTS: &str = "BCDFHJKLMNPQRSTVWXYZ";

/// Errors raised when building a grid from explicit cells.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },

    #[error("grid dimensions {rows}x{columns} are too large")]
    TooLarge { rows: usize, columns: usize },

    #[error("expected {expected} cells for the grid, got {got}")]
    CellCountMismatch { expected: usize, got: usize },
}

/// A rectangular grid of letter cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Letter>,
}

/// Number of cells in a `rows` x `columns` grid.
fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
    if rows == 0 || columns == 0 {
        return Err(GridError::EmptyDimensions { rows, columns });
    }
    rows.checked_mul(columns).ok_or(GridError::TooLarge { rows, columns })
}

impl Grid {
    /// Builds a grid from row-major cells.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Letter>) -> Result<Grid, GridError> {
        let expected = cell_count(rows, columns)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Grid { rows, columns, cells })
    }

    /// Generates an unplayed grid with `vowels` vowels at distinct random
    /// cells and random consonants everywhere else.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        vowels: usize,
        rng: &mut R,
    ) -> Result<Grid, GridError> {
        let size = cell_count(rows, columns)?;
        let vowel_cells = rand::seq::index::sample(rng, size, vowels.min(size)).into_vec();

        let vowel_bytes = VOWELS.as_bytes();
        let consonant_bytes = CONSONANTS.as_bytes();
        let cells = (0..size)
            .map(|i| {
                let pool = if vowel_cells.contains(&i) {
                    vowel_bytes
                } else {
                    consonant_bytes
                };
                Letter {
                    character: pool[rng.gen_range(0..pool.len())] as char,
                    state: LetterState::Unplayed,
                }
            })
            .collect();

        Ok(Grid { rows, columns, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains_cell(&self, cell: usize) -> bool {
        cell < self.cells.len()
    }

    pub fn cells(&self) -> &[Letter] {
        &self.cells
    }

    pub fn letter(&self, cell: usize) -> char {
        self.cells[cell].character
    }

    pub fn state(&self, cell: usize) -> LetterState {
        self.cells[cell].state
    }

    pub fn set_state(&mut self, cell: usize, state: LetterState) {
        self.cells[cell].state = state;
    }

    /// Orthogonal neighbors of `cell`: above, below, left, right.
    ///
    /// Left and right are dropped at the first and last column, above and
    /// below at the first and last row.
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> {
        let row = cell / self.columns;
        let column = cell % self.columns;
        let above = (row > 0).then(|| cell - self.columns);
        let below = (row + 1 < self.rows).then(|| cell + self.columns);
        let left = (column > 0).then(|| cell - 1);
        let right = (column + 1 < self.columns).then(|| cell + 1);
        [above, below, left, right].into_iter().flatten()
    }

    /// True if every neighbor of `cell` is owned or locked by `player`.
    /// Vacuously true for a cell without neighbors.
    pub fn enclosed_by(&self, cell: usize, player: Player) -> bool {
        self.neighbors(cell).all(|n| self.cells[n].state.held_by(player))
    }

    /// Number of cells `player` owns or has locked.
    pub fn count_held(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.state.held_by(player)).count()
    }

    /// True once no cell is `Unplayed`.
    pub fn is_fully_claimed(&self) -> bool {
        self.cells.iter().all(|c| c.state != LetterState::Unplayed)
    }

    /// Decodes the letters at `cells` into a word.
    pub fn spell(&self, cells: &[usize]) -> String {
        cells.iter().map(|&i| self.cells[i].character).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn alphabet_grid() -> Grid {
        let cells = "ABCDEFGHIJKLMNOPQRSTUVWXY"
            .chars()
            .map(|c| Letter::new(c).unwrap())
            .collect();
        Grid::from_cells(5, 5, cells).unwrap()
    }

    fn sorted_neighbors(grid: &Grid, cell: usize) -> Vec<usize> {
        let mut v: Vec<usize> = grid.neighbors(cell).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn corner_cells_have_two_neighbors() {
        let grid = alphabet_grid();
        assert_eq!(sorted_neighbors(&grid, 0), vec![1, 5]);
        assert_eq!(sorted_neighbors(&grid, 4), vec![3, 9]);
        assert_eq!(sorted_neighbors(&grid, 20), vec![15, 21]);
        assert_eq!(sorted_neighbors(&grid, 24), vec![19, 23]);
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        let grid = alphabet_grid();
        assert_eq!(sorted_neighbors(&grid, 12), vec![7, 11, 13, 17]);
    }

    #[test]
    fn row_edges_do_not_wrap() {
        let grid = alphabet_grid();
        // Cell 5 starts row 1 and cell 9 ends it.
        assert_eq!(sorted_neighbors(&grid, 5), vec![0, 6, 10]);
        assert_eq!(sorted_neighbors(&grid, 9), vec![4, 8, 14]);
    }

    #[test]
    fn neighbors_stay_in_bounds_on_rectangular_grids() {
        for (rows, columns) in [(1, 1), (1, 4), (4, 1), (3, 7), (6, 2)] {
            let cells = vec![Letter::new('A').unwrap(); rows * columns];
            let grid = Grid::from_cells(rows, columns, cells).unwrap();
            for cell in 0..grid.len() {
                for n in grid.neighbors(cell) {
                    assert!(n < grid.len());
                    let same_row = n / columns == cell / columns;
                    let same_column = n % columns == cell % columns;
                    assert!(same_row || same_column, "{n} is not orthogonal to {cell}");
                    if same_row {
                        assert_eq!((n as isize - cell as isize).abs(), 1);
                    }
                }
            }
        }
    }

    #[test]
    fn single_cell_grid_is_vacuously_enclosed() {
        let grid = Grid::from_cells(1, 1, vec![Letter::new('A').unwrap()]).unwrap();
        assert_eq!(grid.neighbors(0).count(), 0);
        assert!(grid.enclosed_by(0, Player::One));
        assert!(grid.enclosed_by(0, Player::Two));
    }

    #[test]
    fn from_cells_checks_dimensions() {
        assert_eq!(
            Grid::from_cells(0, 5, vec![]),
            Err(GridError::EmptyDimensions { rows: 0, columns: 5 })
        );
        assert_eq!(
            Grid::from_cells(2, 2, vec![Letter::new('A').unwrap(); 3]),
            Err(GridError::CellCountMismatch { expected: 4, got: 3 })
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let huge = usize::MAX / 2;
        assert_eq!(
            Grid::from_cells(huge, 3, vec![Letter::new('A').unwrap()]),
            Err(GridError::TooLarge { rows: huge, columns: 3 })
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(3, huge, 4, &mut rng),
            Err(GridError::TooLarge { rows: 3, columns: huge })
        );
    }

    #[test]
    fn random_grid_places_requested_vowels() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(5, 5, 4, &mut rng).unwrap();
        assert_eq!(grid.len(), 25);
        let vowels = grid
            .cells()
            .iter()
            .filter(|c| VOWELS.contains(c.character))
            .count();
        assert_eq!(vowels, 4);
        assert!(grid.cells().iter().all(|c| c.state == LetterState::Unplayed));
        assert!(grid
            .cells()
            .iter()
            .all(|c| VOWELS.contains(c.character) || CONSONANTS.contains(c.character)));
    }

    #[test]
    fn random_grid_is_reproducible_under_a_seed() {
        let a = Grid::random(5, 5, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(5, 5, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn spell_and_counts() {
        let mut grid = alphabet_grid();
        assert_eq!(grid.spell(&[19, 7, 4]), "THE");
        assert!(!grid.is_empty());
        grid.set_state(19, LetterState::Player1Owned);
        grid.set_state(7, LetterState::Player1Locked);
        grid.set_state(4, LetterState::Player2Owned);
        assert_eq!(grid.count_held(Player::One), 2);
        assert_eq!(grid.count_held(Player::Two), 1);
        assert!(!grid.is_fully_claimed());
    }
}
