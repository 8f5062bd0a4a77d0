use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, CellSet, Digit};

/// A 9×9 board of cell values, where `None` means empty.
///
/// `Board` is the cell-centric value grid: the puzzle as loaded from text,
/// the solution returned by the backtracker, and the output of the
/// generator. Candidate tracking lives in the solver crate.
///
/// # Text format
///
/// A board serialises as nine newline-separated rows of nine characters
/// `0`-`9`, with `0` for empty. Parsing is line-oriented: each line is
/// whitespace-trimmed and kept only if it is exactly nine ASCII digits;
/// anything else (blank lines, separators, comments) is skipped. Exactly
/// nine digit rows must remain.
///
/// ```
/// use tutoku_core::{Board, Cell, Digit};
///
/// let board: Board = "003020600\n900305001\n001806400\n008102900\n700000008\n\
///                     006708200\n002609500\n800203009\n005010300"
///     .parse()
///     .unwrap();
/// assert_eq!(board.value(Cell::new(0, 2)), Some(Digit::D3));
/// assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a board from 81 row-major cell values.
    #[must_use]
    pub const fn from_cells(cells: [Option<Digit>; 81]) -> Self {
        Self { cells }
    }

    /// Returns the value of a cell, or `None` if it is empty.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index() as usize]
    }

    /// Sets or clears the value of a cell.
    pub fn set(&mut self, cell: Cell, value: Option<Digit>) {
        self.cells[cell.index() as usize] = value;
    }

    /// Returns `true` if the cell has no value.
    #[must_use]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.value(cell).is_none()
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.is_empty_cell(cell))
            .collect()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_none()).count()
    }

    /// Returns `true` if every cell has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when puzzle text does not contain exactly nine digit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected 9 rows of 9 digits, found {found}")]
pub struct ParseBoardError {
    /// How many valid nine-digit rows the input contained.
    pub found: usize,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| line.len() == 9 && line.bytes().all(|b| b.is_ascii_digit()))
            .collect();
        if rows.len() != 9 {
            return Err(ParseBoardError { found: rows.len() });
        }

        let mut cells = [None; 81];
        for (row, line) in rows.iter().enumerate() {
            for (col, b) in line.bytes().enumerate() {
                if b != b'0' {
                    cells[row * 9 + col] = Some(Digit::new(b - b'0'));
                }
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                match self.value(Cell::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "0")?,
                }
            }
        }
        Ok(())
    }
}
