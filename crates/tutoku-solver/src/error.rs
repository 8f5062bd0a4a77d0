use tutoku_core::{Cell, Digit, House};

/// Errors surfaced by grid construction and step application.
///
/// Both variants are terminal for the strategy driver: an invalid board is
/// refused before any step is attempted, and a contradiction while applying
/// a step means either the puzzle has no solution or a detector emitted an
/// unsound deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The initial board repeats a digit within a house.
    #[display("invalid initial board: digit {digit} appears more than once in {house}")]
    InvalidInitialBoard {
        /// The house containing the repeated digit.
        house: House,
        /// The repeated digit.
        digit: Digit,
    },
    /// Applying a step would leave an empty cell with no candidates.
    #[display("contradiction detected: {cell} has no remaining candidate")]
    ContradictionDetected {
        /// The cell that ran out of candidates.
        cell: Cell,
    },
}
