use tutoku_core::{Board, Cell, CellSet, Digit, DigitSet, House};

use crate::{SolverError, Step};

/// Solver state: cell values, the immutable givens, and per-cell candidates.
///
/// Candidates are stored digit-centrically: for each digit, the set of empty
/// cells where it is still possible. That makes "where can digit d go in
/// house h" a single mask intersection, which is the query every strategy
/// detector asks most.
///
/// Between steps the grid maintains the candidate invariant: an empty cell's
/// candidate set is exactly the digits absent from its row, column, and box,
/// minus whatever eliminations strategies have proven. Filled cells have no
/// candidates. The only mutating operation is [`apply_step`](Self::apply_step).
///
/// # Examples
///
/// ```
/// use tutoku_core::{Board, Cell, Digit};
/// use tutoku_solver::Grid;
///
/// let board: Board = "003020600\n900305001\n001806400\n008102900\n700000008\n\
///                     006708200\n002609500\n800203009\n005010300"
///     .parse()
///     .unwrap();
/// let grid = Grid::new(&board)?;
/// assert!(!grid.is_solved());
/// assert!(!grid.candidates_at(Cell::new(0, 0)).contains(Digit::D3));
/// # Ok::<(), tutoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Board,
    givens: CellSet,
    empty: CellSet,
    digit_cells: [CellSet; 9],
}

impl Grid {
    /// Builds a grid from initial values and derives the candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInitialBoard`] if any digit appears
    /// more than once within a house.
    pub fn new(board: &Board) -> Result<Self, SolverError> {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for cell in house.cells() {
                if let Some(digit) = board.value(cell) {
                    if !seen.insert(digit) {
                        return Err(SolverError::InvalidInitialBoard { house, digit });
                    }
                }
            }
        }

        let empty = board.empty_cells();
        let mut digit_cells = [CellSet::EMPTY; 9];
        for cell in empty {
            let mut used = DigitSet::new();
            for peer in cell.peers() {
                if let Some(digit) = board.value(peer) {
                    used.insert(digit);
                }
            }
            for digit in !used {
                digit_cells[usize::from(digit.value() - 1)].insert(cell);
            }
        }

        Ok(Self {
            values: board.clone(),
            givens: !empty,
            empty,
            digit_cells,
        })
    }

    /// Returns the current cell values.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.values
    }

    /// Returns the value of a cell, or `None` if it is still empty.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.values.value(cell)
    }

    /// Returns the cells that were filled in the initial puzzle.
    #[must_use]
    pub fn givens(&self) -> CellSet {
        self.givens
    }

    /// Returns `true` if the cell was filled in the initial puzzle.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.givens.contains(cell)
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> CellSet {
        self.empty
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.empty.is_empty()
    }

    /// Returns the empty cells where `digit` is still a candidate.
    #[must_use]
    pub fn digit_cells(&self, digit: Digit) -> CellSet {
        self.digit_cells[usize::from(digit.value() - 1)]
    }

    /// Returns the candidate set of a cell (empty for filled cells).
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> DigitSet {
        let mut candidates = DigitSet::new();
        for digit in Digit::ALL {
            if self.digit_cells(digit).contains(cell) {
                candidates.insert(digit);
            }
        }
        candidates
    }

    /// Returns the empty cells that have exactly `n` candidates.
    #[must_use]
    pub fn cells_with_candidates(&self, n: usize) -> CellSet {
        self.empty
            .iter()
            .filter(|&cell| self.candidates_at(cell).len() == n)
            .collect()
    }

    /// Returns the total number of candidates across all empty cells.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.digit_cells.iter().map(|set| set.len()).sum()
    }

    /// Applies a step: removes its eliminations, then performs its
    /// placements, propagating each placed digit to the cell's peers.
    ///
    /// The update is atomic: on error the grid is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ContradictionDetected`] if any empty cell
    /// would be left with no candidates. On a puzzle that has a solution
    /// this indicates an unsound deduction and is treated as fatal by the
    /// driver.
    pub fn apply_step(&mut self, step: &Step) -> Result<(), SolverError> {
        let mut next = self.clone();

        for &(cell, digit) in &step.eliminations {
            debug_assert!(next.empty.contains(cell));
            next.digit_cells[usize::from(digit.value() - 1)].remove(cell);
        }
        for &(cell, _) in &step.eliminations {
            if next.empty.contains(cell) && next.candidates_at(cell).is_empty() {
                return Err(SolverError::ContradictionDetected { cell });
            }
        }

        for &(cell, digit) in &step.placements {
            debug_assert!(next.empty.contains(cell));
            debug_assert!(next.candidates_at(cell).contains(digit));
            next.values.set(cell, Some(digit));
            next.empty.remove(cell);
            for set in &mut next.digit_cells {
                set.remove(cell);
            }

            let index = usize::from(digit.value() - 1);
            let affected = cell.peers() & next.digit_cells[index];
            next.digit_cells[index] &= !affected;
            for peer in affected {
                if next.candidates_at(peer).is_empty() {
                    return Err(SolverError::ContradictionDetected { cell: peer });
                }
            }
        }

        *self = next;
        Ok(())
    }

    /// Removes a single candidate without any consistency bookkeeping.
    ///
    /// Test scaffolding only: the strategy tester uses this to sculpt
    /// candidate patterns that would otherwise take many solved cells to
    /// set up.
    pub(crate) fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.digit_cells[usize::from(digit.value() - 1)].remove(cell)
    }
}
