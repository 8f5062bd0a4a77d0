//! Brute-force backtracking: full solves and uniqueness checks.
//!
//! The search is a depth-first walk with the minimum-remaining-values
//! heuristic: it always branches on an empty cell with the fewest
//! candidates, trying digits in ascending order, so the search — like the
//! strategy driver — is fully deterministic. The uniqueness check aborts as
//! soon as a second solution turns up; it dominates generator runtime, and
//! the early exit is what keeps hole punching affordable.

use tutoku_core::{Board, Cell, Digit, DigitSet};

use crate::Grid;

/// Working state for the search: values plus a per-cell candidate table.
#[derive(Debug, Clone)]
struct Search {
    values: Board,
    candidates: [DigitSet; 81],
}

impl Search {
    /// Builds the search state, or `None` when the board already breaks the
    /// one-digit-per-house rule (zero solutions).
    fn from_board(board: &Board) -> Option<Self> {
        let grid = Grid::new(board).ok()?;
        let mut candidates = [DigitSet::EMPTY; 81];
        for cell in grid.empty_cells() {
            candidates[usize::from(cell.index())] = grid.candidates_at(cell);
        }
        Some(Self {
            values: board.clone(),
            candidates,
        })
    }

    fn candidates_at(&self, cell: Cell) -> DigitSet {
        self.candidates[usize::from(cell.index())]
    }

    /// Places a digit and prunes it from the peers' candidates.
    ///
    /// Returns `false` when a peer runs out of candidates (dead branch).
    fn place(&mut self, cell: Cell, digit: Digit) -> bool {
        self.values.set(cell, Some(digit));
        self.candidates[usize::from(cell.index())] = DigitSet::EMPTY;
        for peer in cell.peers() {
            if self.values.is_empty_cell(peer) {
                let slot = &mut self.candidates[usize::from(peer.index())];
                if slot.remove(digit) && slot.is_empty() {
                    return false;
                }
            }
        }
        true
    }

    /// Picks the empty cell with the fewest candidates, row-major on ties.
    fn best_cell(&self) -> Option<Cell> {
        let mut best: Option<(usize, Cell)> = None;
        for cell in Cell::ALL {
            if !self.values.is_empty_cell(cell) {
                continue;
            }
            let count = self.candidates_at(cell).len();
            if best.is_none_or(|(min, _)| count < min) {
                best = Some((count, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }
}

/// Solves the board by backtracking, returning the first solution found in
/// MRV order, or `None` when the board has no solution.
#[must_use]
pub fn brute_force_solve(board: &Board) -> Option<Board> {
    let search = Search::from_board(board)?;
    first_solution(&search)
}

fn first_solution(search: &Search) -> Option<Board> {
    let Some(cell) = search.best_cell() else {
        return Some(search.values.clone());
    };
    for digit in search.candidates_at(cell) {
        let mut next = search.clone();
        if next.place(cell, digit) {
            if let Some(solution) = first_solution(&next) {
                return Some(solution);
            }
        }
    }
    None
}

/// Returns `true` iff the board has exactly one solution.
///
/// The search stops as soon as a second solution is found.
#[must_use]
pub fn has_unique_solution(board: &Board) -> bool {
    let Some(search) = Search::from_board(board) else {
        return false;
    };
    let mut found = 0;
    count_solutions(&search, 2, &mut found);
    found == 1
}

fn count_solutions(search: &Search, limit: u32, found: &mut u32) {
    let Some(cell) = search.best_cell() else {
        *found += 1;
        return;
    };
    for digit in search.candidates_at(cell) {
        let mut next = search.clone();
        if next.place(cell, digit) {
            count_solutions(&next, limit, found);
            if *found >= limit {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str = "003020600\n900305001\n001806400\n008102900\n700000008\n\
                        006708200\n002609500\n800203009\n005010300";

    const EASY_SOLUTION: &str =
        "483921657\n967345821\n251876493\n548132976\n729564138\n136798245\n\
         372689514\n814253769\n695417382";

    #[test]
    fn test_solves_known_puzzle() {
        let solution = brute_force_solve(&EASY.parse().unwrap()).unwrap();
        assert_eq!(solution, EASY_SOLUTION.parse().unwrap());
    }

    #[test]
    fn test_solution_keeps_the_givens() {
        let board: Board = EASY.parse().unwrap();
        let solution = brute_force_solve(&board).unwrap();
        for cell in Cell::ALL {
            if let Some(digit) = board.value(cell) {
                assert_eq!(solution.value(cell), Some(digit));
            }
        }
        assert!(solution.is_complete());
    }

    #[test]
    fn test_unsolvable_board_returns_none() {
        // Two 5s in one row: no solution, and the uniqueness check agrees.
        let board: Board = "550000000\n000000000\n000000000\n000000000\n000000000\n\
                            000000000\n000000000\n000000000\n000000000"
            .parse()
            .unwrap();
        assert_eq!(brute_force_solve(&board), None);
        assert!(!has_unique_solution(&board));
    }

    #[test]
    fn test_proper_puzzle_is_unique() {
        assert!(has_unique_solution(&EASY.parse().unwrap()));
    }

    #[test]
    fn test_empty_board_has_many_solutions() {
        assert!(!has_unique_solution(&Board::new()));
        assert!(brute_force_solve(&Board::new()).is_some());
    }

    #[test]
    fn test_solved_board_is_its_own_unique_solution() {
        let solved: Board = EASY_SOLUTION.parse().unwrap();
        assert_eq!(brute_force_solve(&solved), Some(solved.clone()));
        assert!(has_unique_solution(&solved));
    }
}
