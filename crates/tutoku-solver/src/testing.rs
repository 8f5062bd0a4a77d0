//! Test harness for strategy detectors.
//!
//! [`StrategyTester`] tracks an initial and a current grid, lets tests
//! sculpt candidate patterns directly, runs a single strategy, and asserts
//! on the outcome with `#[track_caller]` panics.
//!
//! ```
//! use tutoku_core::{Cell, Digit};
//! use tutoku_solver::{Strategy, testing::StrategyTester};
//!
//! StrategyTester::empty()
//!     .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
//!     .with_candidates(Cell::new(0, 4), [Digit::D1, Digit::D2])
//!     .apply(Strategy::NakedPair)
//!     .assert_eliminated(Cell::new(0, 7), [Digit::D1, Digit::D2]);
//! ```

use tutoku_core::{Board, Cell, Digit, DigitSet};

use crate::{Grid, Step, Strategy};

/// A fluent harness for exercising one strategy against a sculpted grid.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Grid,
    current: Grid,
    last_step: Option<Step>,
}

impl StrategyTester {
    /// Creates a tester over a fully empty board (every cell has all nine
    /// candidates).
    ///
    /// # Panics
    ///
    /// Never panics; the empty board is always valid.
    #[must_use]
    pub fn empty() -> Self {
        let grid = Grid::new(&Board::new()).expect("empty board is valid");
        Self {
            initial: grid.clone(),
            current: grid,
            last_step: None,
        }
    }

    /// Creates a tester from nine-line puzzle text.
    ///
    /// # Panics
    ///
    /// Panics if the text does not parse or the board is invalid.
    #[track_caller]
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        let board: Board = text.parse().expect("test board must parse");
        let grid = Grid::new(&board).expect("test board must be valid");
        Self {
            initial: grid.clone(),
            current: grid,
            last_step: None,
        }
    }

    /// Restricts a cell's candidates to exactly `keep`, updating the
    /// initial snapshot as well (this is setup, not a deduction).
    #[must_use]
    pub fn with_candidates<I>(mut self, cell: Cell, keep: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let keep: DigitSet = keep.into_iter().collect();
        for digit in !keep {
            self.current.remove_candidate(cell, digit);
            self.initial.remove_candidate(cell, digit);
        }
        self
    }

    /// Removes `digits` from a cell's candidates as setup.
    #[must_use]
    pub fn without_candidates<I>(mut self, cell: Cell, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        for digit in digits {
            self.current.remove_candidate(cell, digit);
            self.initial.remove_candidate(cell, digit);
        }
        self
    }

    /// Returns the grid under test.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Returns the step produced by the last [`apply`](Self::apply).
    ///
    /// # Panics
    ///
    /// Panics if no strategy has been applied yet.
    #[track_caller]
    #[must_use]
    pub fn step(&self) -> &Step {
        self.last_step.as_ref().expect("no strategy applied yet")
    }

    /// Runs the strategy's detector, asserts it fires, and applies the step.
    ///
    /// # Panics
    ///
    /// Panics if the detector finds nothing, emits an empty step, reports a
    /// different strategy, or the step fails to apply.
    #[track_caller]
    #[must_use]
    pub fn apply(mut self, strategy: Strategy) -> Self {
        let step = strategy
            .find(&self.current)
            .unwrap_or_else(|| panic!("expected {strategy} to find a step"));
        assert_eq!(step.strategy(), strategy, "step reports wrong strategy");
        assert!(
            !step.placements().is_empty() || !step.eliminations().is_empty(),
            "{strategy} emitted a step with no changes"
        );
        self.current
            .apply_step(&step)
            .unwrap_or_else(|err| panic!("{strategy} step failed to apply: {err}"));
        self.last_step = Some(step);
        self
    }

    /// Asserts the strategy's detector finds nothing on the current grid.
    #[track_caller]
    #[must_use]
    pub fn assert_no_step(self, strategy: Strategy) -> Self {
        if let Some(step) = strategy.find(&self.current) {
            panic!("expected {strategy} to find nothing, found: {step}");
        }
        self
    }

    /// Asserts the cell now holds `digit` as a placed value.
    #[track_caller]
    #[must_use]
    pub fn assert_placed(self, cell: Cell, digit: Digit) -> Self {
        assert_eq!(
            self.current.value(cell),
            Some(digit),
            "expected {digit} placed at {cell}, candidates are {}",
            self.current.candidates_at(cell),
        );
        self
    }

    /// Asserts that all of `digits` were candidates at `cell` initially and
    /// have been removed.
    #[track_caller]
    #[must_use]
    pub fn assert_eliminated<I>(self, cell: Cell, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let digits: DigitSet = digits.into_iter().collect();
        let initial = self.initial.candidates_at(cell);
        let current = self.current.candidates_at(cell);
        assert!(
            digits.is_subset(initial),
            "expected {digits} to start as candidates at {cell}, had {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "expected {digits} eliminated from {cell}, still has {}",
            current & digits,
        );
        self
    }

    /// Asserts the cell's candidates are unchanged from the initial state.
    #[track_caller]
    #[must_use]
    pub fn assert_unchanged(self, cell: Cell) -> Self {
        let initial = self.initial.candidates_at(cell);
        let current = self.current.candidates_at(cell);
        assert_eq!(
            initial, current,
            "expected no change at {cell}, candidates went {initial} -> {current}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sculpting_updates_both_snapshots() {
        let tester = StrategyTester::empty()
            .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .without_candidates(Cell::new(8, 8), [Digit::D9]);
        assert_eq!(tester.grid().candidates_at(Cell::new(0, 0)).len(), 2);
        assert!(
            !tester
                .grid()
                .candidates_at(Cell::new(8, 8))
                .contains(Digit::D9)
        );
    }

    #[test]
    #[should_panic(expected = "expected Full House to find a step")]
    fn test_apply_panics_when_nothing_fires() {
        let _ = StrategyTester::empty().apply(Strategy::FullHouse);
    }

    #[test]
    #[should_panic(expected = "expected no change")]
    fn test_assert_unchanged_detects_changes() {
        let _ = StrategyTester::empty()
            .with_candidates(Cell::new(4, 4), [Digit::D5])
            .apply(Strategy::NakedSingle)
            .assert_unchanged(Cell::new(4, 5));
    }
}
