//! Core data structures for the Tutoku Sudoku tutor.
//!
//! This crate provides the grid model leaves shared by the solver and the
//! generator:
//!
//! - [`Digit`] - a Sudoku digit 1-9
//! - [`DigitSet`] - a candidate set, stored as a 9-bit mask
//! - [`Cell`] - a grid coordinate `(row, col)` in the range 0-8
//! - [`CellSet`] - a set of grid cells, stored as an 81-bit mask
//! - [`House`] - one of the 27 houses (9 rows, 9 columns, 9 boxes)
//! - [`Board`] - 81 cell values plus the line-oriented puzzle text format
//! - [`collection`] - the built-in puzzle library
//!
//! Both bitset types iterate in ascending order (digits 1-9, cells
//! row-major), which is what makes every downstream scan deterministic.

mod board;
mod cell;
mod cell_set;
pub mod collection;
mod digit;
mod digit_set;
mod house;

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    cell_set::{CellSet, CellSetIter},
    digit::{Digit, DigitOutOfRange},
    digit_set::{DigitSet, DigitSetIter},
    house::House,
};
