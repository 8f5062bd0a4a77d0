//! Human-strategy Sudoku solving for the Tutoku tutor.
//!
//! The solver applies the 21 named deduction strategies in a fixed
//! easiest-first order and records every deduction as a [`Step`] with the
//! cells it affects and a plain-English justification. Because each detector
//! scans houses, cells, and digits in ascending order and the driver restarts
//! from the easiest strategy after every applied step, the emitted trace is a
//! deterministic function of the initial board — which is what makes the
//! difficulty rating reproducible.
//!
//! # Architecture
//!
//! - [`Grid`] holds values, the immutable givens, and digit-centric
//!   candidates; [`Grid::apply_step`] is the only mutation.
//! - [`Strategy`] enumerates the 21 detectors; each maps a grid to at most
//!   one [`Step`].
//! - [`StrategySolver`] is the driver loop: first applicable strategy wins,
//!   then start over. It produces a [`SolveReport`] with the step timeline
//!   and the [`Outcome`].
//! - [`rate`] turns a solve trace into a difficulty tier 0-4.
//! - [`backtrack`] is the brute-force fallback: full solves and the
//!   early-exit uniqueness check the generator depends on.
//!
//! The strategy engine never guesses: puzzles beyond the implemented
//! technique set end in [`Outcome::Stuck`], and the caller decides whether
//! to fall back to [`backtrack::brute_force_solve`].
//!
//! # Examples
//!
//! ```
//! use tutoku_core::Board;
//! use tutoku_solver::{Outcome, StrategySolver, rate};
//!
//! let board: Board = "003020600\n900305001\n001806400\n008102900\n700000008\n\
//!                     006708200\n002609500\n800203009\n005010300"
//!     .parse()
//!     .unwrap();
//!
//! let report = StrategySolver::new().solve(&board)?;
//! assert_eq!(report.outcome, Outcome::Solved);
//! assert_eq!(rate(&board)?, 1);
//! # Ok::<(), tutoku_solver::SolverError>(())
//! ```

pub mod backtrack;
mod error;
mod grid;
mod rating;
mod solver;
mod step;
pub mod strategy;
pub mod testing;

pub use self::{
    error::SolverError,
    grid::Grid,
    rating::rate,
    solver::{Outcome, SolveReport, StrategySolver},
    step::Step,
    strategy::{Strategy, Tier},
};
