use tutoku_core::Board;

use crate::{Grid, SolverError, Step, Strategy, Tier};

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell was filled by the strategies.
    Solved,
    /// No strategy applied before the puzzle was solved. This is the
    /// expected result for puzzles beyond the implemented technique set,
    /// not an error.
    Stuck {
        /// The last strategy that made progress, if any step was applied.
        last_applied: Option<Strategy>,
    },
}

/// The full trace of a solve run: every step in emission order, the final
/// grid, and the outcome.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The emitted steps, in application order.
    pub steps: Vec<Step>,
    /// The grid after the last applied step.
    pub grid: Grid,
    /// How the run ended.
    pub outcome: Outcome,
}

impl SolveReport {
    /// Returns `true` if the puzzle was completely solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Returns the distinct strategies used, in order of first use.
    #[must_use]
    pub fn strategies_used(&self) -> Vec<Strategy> {
        let mut used = Vec::new();
        for step in &self.steps {
            if !used.contains(&step.strategy()) {
                used.push(step.strategy());
            }
        }
        used
    }

    /// Returns the hardest tier among the strategies used, or `None` when
    /// no step was needed.
    #[must_use]
    pub fn max_tier(&self) -> Option<Tier> {
        self.steps.iter().map(|step| step.strategy().tier()).max()
    }
}

/// The solving driver: tries strategies in order and applies the first that
/// fires, then starts over from the easiest.
///
/// Restarting from the top after every applied step guarantees that the
/// easiest applicable technique is always used next, which is what makes the
/// emitted trace — and the difficulty rating derived from it — a
/// deterministic function of the initial board.
///
/// # Examples
///
/// ```
/// use tutoku_core::Board;
/// use tutoku_solver::{Outcome, StrategySolver};
///
/// let board: Board = "003020600\n900305001\n001806400\n008102900\n700000008\n\
///                     006708200\n002609500\n800203009\n005010300"
///     .parse()
///     .unwrap();
/// let report = StrategySolver::new().solve(&board)?;
/// assert_eq!(report.outcome, Outcome::Solved);
/// for step in &report.steps {
///     println!("{step}");
/// }
/// # Ok::<(), tutoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategySolver {
    strategies: Vec<Strategy>,
}

impl Default for StrategySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategySolver {
    /// Creates a solver with all 21 strategies in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
        }
    }

    /// Creates a solver restricted to the given strategies, tried in the
    /// given order.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// Returns the configured strategies in application order.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Finds the next step without mutating the grid (the hint API).
    ///
    /// Returns the first applicable strategy's step, or `None` when the
    /// solver is stuck on this grid.
    #[must_use]
    pub fn next_step(&self, grid: &Grid) -> Option<Step> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(grid))
    }

    /// Solves the board as far as the configured strategies allow.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInitialBoard`] for a board that
    /// duplicates a digit within a house, and
    /// [`SolverError::ContradictionDetected`] if applying a step empties a
    /// cell's candidates (a solver bug on solvable puzzles).
    pub fn solve(&self, board: &Board) -> Result<SolveReport, SolverError> {
        let mut grid = Grid::new(board)?;
        let mut steps: Vec<Step> = Vec::new();

        while !grid.is_solved() {
            let Some(step) = self.next_step(&grid) else {
                let last_applied = steps.last().map(Step::strategy);
                return Ok(SolveReport {
                    steps,
                    grid,
                    outcome: Outcome::Stuck { last_applied },
                });
            };
            grid.apply_step(&step)?;
            steps.push(step);
        }

        Ok(SolveReport {
            steps,
            grid,
            outcome: Outcome::Solved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str = "003020600\n900305001\n001806400\n008102900\n700000008\n\
                        006708200\n002609500\n800203009\n005010300";

    #[test]
    fn test_solves_easy_puzzle_with_singles_only() {
        let report = StrategySolver::new().solve(&EASY.parse().unwrap()).unwrap();
        assert_eq!(report.outcome, Outcome::Solved);
        assert!(report.grid.is_solved());
        assert!(!report.steps.is_empty());
        for strategy in report.strategies_used() {
            assert_eq!(strategy.tier(), Tier::Beginner);
        }
        assert_eq!(report.max_tier(), Some(Tier::Beginner));
    }

    #[test]
    fn test_every_step_changes_something() {
        let report = StrategySolver::new().solve(&EASY.parse().unwrap()).unwrap();
        for step in &report.steps {
            assert!(!step.placements().is_empty() || !step.eliminations().is_empty());
        }
    }

    #[test]
    fn test_trace_is_deterministic() {
        let board: Board = EASY.parse().unwrap();
        let first = StrategySolver::new().solve(&board).unwrap();
        let second = StrategySolver::new().solve(&board).unwrap();
        assert_eq!(first.steps, second.steps);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn test_restricted_solver_gets_stuck() {
        // Full House alone cannot crack the easy puzzle from a cold start.
        let solver = StrategySolver::with_strategies(vec![Strategy::FullHouse]);
        let report = solver.solve(&EASY.parse().unwrap()).unwrap();
        assert_eq!(
            report.outcome,
            Outcome::Stuck { last_applied: None }
        );
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_solved_board_needs_no_steps() {
        let solved: Board =
            "534678912\n672195348\n198342567\n859761423\n426853791\n713924856\n\
             961537284\n287419635\n345286179"
                .parse()
                .unwrap();
        let report = StrategySolver::new().solve(&solved).unwrap();
        assert_eq!(report.outcome, Outcome::Solved);
        assert!(report.steps.is_empty());
        assert_eq!(report.max_tier(), None);
    }

    #[test]
    fn test_invalid_board_refused() {
        let board: Board = "550000000\n000000000\n000000000\n000000000\n000000000\n\
                            000000000\n000000000\n000000000\n000000000"
            .parse()
            .unwrap();
        assert!(StrategySolver::new().solve(&board).is_err());
    }

    #[test]
    fn test_next_step_does_not_mutate() {
        let grid = Grid::new(&EASY.parse().unwrap()).unwrap();
        let snapshot = grid.clone();
        let solver = StrategySolver::new();
        let first = solver.next_step(&grid).unwrap();
        assert_eq!(grid, snapshot);
        let second = solver.next_step(&grid).unwrap();
        assert_eq!(first, second);
    }
}
