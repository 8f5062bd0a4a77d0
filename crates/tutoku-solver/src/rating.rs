use tutoku_core::Board;

use crate::{Outcome, SolverError, StrategySolver, Tier};

/// Rates a puzzle's difficulty by solving it with the full strategy set.
///
/// Returns the highest tier (1-4) among the strategies the driver needed,
/// or `0` when the driver got stuck — the puzzle requires techniques beyond
/// the implemented set — or when the board was already solved. Because the
/// driver is deterministic, the rating is a pure function of the initial
/// values.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInitialBoard`] for boards that duplicate a
/// digit within a house, and propagates
/// [`SolverError::ContradictionDetected`] when solving a board that has no
/// solution.
pub fn rate(board: &Board) -> Result<u8, SolverError> {
    let report = StrategySolver::new().solve(board)?;
    Ok(match report.outcome {
        Outcome::Solved => report.max_tier().map_or(0, Tier::level),
        Outcome::Stuck { .. } => 0,
    })
}
