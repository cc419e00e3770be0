//! Ownership assignment and lock propagation.
//!
//! After a word is accepted its cells are claimed by the active player, then
//! every cell's lock state is recomputed from the resulting board.

use crate::board::{Grid, LetterState, Player};

/// Claims every cell of an accepted word for `player`.
///
/// Locked cells are immune and keep their state.
pub fn claim_cells(grid: &mut Grid, cells: &[usize], player: Player) {
    for &cell in cells {
        if !grid.state(cell).is_locked() {
            grid.set_state(cell, LetterState::owned_by(player));
        }
    }
}

/// Computes the next state of a single cell from the pre-pass board.
///
/// Rules apply in order: enclosure by player 1 locks for player 1, a player 1
/// lock that lost its enclosure falls back to plain ownership, then the same
/// two rules for player 2. Anything else is left unchanged.
pub fn next_lock_state(grid: &Grid, cell: usize) -> LetterState {
    let current = grid.state(cell);
    if grid.enclosed_by(cell, Player::One) {
        LetterState::Player1Locked
    } else if current == LetterState::Player1Locked {
        LetterState::Player1Owned
    } else if grid.enclosed_by(cell, Player::Two) {
        LetterState::Player2Locked
    } else if current == LetterState::Player2Locked {
        LetterState::Player2Owned
    } else {
        current
    }
}

/// Recomputes every cell's lock state in one pass.
///
/// All cells are evaluated against the same snapshot, so a lock formed in
/// this pass does not feed into a neighbor's evaluation until the next pass.
pub fn recompute_lock_state(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for cell in 0..grid.len() {
        next.set_state(cell, next_lock_state(grid, cell));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Letter;

    /// Builds a grid of `A`s whose states follow the board notation characters.
    fn grid_from(rows: usize, columns: usize, states: &str) -> Grid {
        let cells = states
            .chars()
            .map(|c| Letter::with_state('A', LetterState::from_notation_char(c).unwrap()).unwrap())
            .collect();
        Grid::from_cells(rows, columns, cells).unwrap()
    }

    fn notation(grid: &Grid) -> String {
        grid.cells().iter().map(|c| c.state.notation_char()).collect()
    }

    #[test]
    fn enclosed_unplayed_cell_is_locked() {
        let grid = grid_from(3, 3, ".a.a.a.a.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Player1Locked);
        // Corner cells are enclosed by two owned edges.
        assert_eq!(next.state(0), LetterState::Player1Locked);
    }

    #[test]
    fn enclosed_opponent_cell_flips_to_locked() {
        let grid = grid_from(3, 3, ".b.bab.b.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Player2Locked);
    }

    #[test]
    fn lock_reverts_to_owned_when_enclosure_breaks() {
        let grid = grid_from(3, 3, ".a.bAa.a.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Player1Owned);

        let grid = grid_from(3, 3, ".b.aBb.b.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Player2Owned);
    }

    #[test]
    fn lock_never_flips_directly_to_opponent() {
        // Player 1's lock is now surrounded by player 2: it first falls back
        // to plain player 1 ownership.
        let grid = grid_from(3, 3, ".b.bAb.b.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Player1Owned);

        // On the following pass it is captured.
        let after = recompute_lock_state(&next);
        assert_eq!(after.state(4), LetterState::Player2Locked);
    }

    #[test]
    fn mixed_neighbors_leave_cells_unchanged() {
        let grid = grid_from(3, 3, ".a.b.a.b.");
        let next = recompute_lock_state(&grid);
        assert_eq!(next.state(4), LetterState::Unplayed);
        assert_eq!(next.state(1), LetterState::Player1Owned);
        assert_eq!(next.state(3), LetterState::Player2Owned);
    }

    #[test]
    fn pass_uses_pre_pass_snapshot() {
        let grid = grid_from(1, 3, "a.a");
        let next = recompute_lock_state(&grid);
        assert_eq!(notation(&next), "aAa");
        // Cells 0 and 2 saw an unplayed neighbor in the snapshot.
        let again = recompute_lock_state(&next);
        assert_eq!(notation(&again), "AAA");
    }

    #[test]
    fn claim_skips_locked_cells() {
        let mut grid = grid_from(1, 4, ".aBb");
        claim_cells(&mut grid, &[0, 1, 2, 3], Player::One);
        assert_eq!(notation(&grid), "aaBa");
    }

    #[test]
    fn recompute_is_pure() {
        let grid = grid_from(3, 3, ".a.a.a.a.");
        let before = grid.clone();
        let _ = recompute_lock_state(&grid);
        assert_eq!(grid, before);
    }
}
