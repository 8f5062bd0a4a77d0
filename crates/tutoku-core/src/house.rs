use std::fmt::{self, Display};

use crate::{Cell, CellSet};

/// A Sudoku house: one of the 9 rows, 9 columns, or 9 boxes.
///
/// [`House::ALL`] lists the 27 houses in the canonical scan order (rows 0-8,
/// then columns 0-8, then boxes 0-8); every detector that walks houses walks
/// them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row, identified by its index 0-8.
    Row(u8),
    /// A column, identified by its index 0-8.
    Column(u8),
    /// A 3×3 box, identified by its index 0-8 (left-to-right, top-to-bottom).
    Box(u8),
}

impl House {
    /// All 27 houses: rows, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0u8;
        while i < 9 {
            all[i as usize] = Self::Row(i);
            all[i as usize + 9] = Self::Column(i);
            all[i as usize + 18] = Self::Box(i);
            i += 1;
        }
        all
    };

    /// Returns the house's index within its kind (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Row(i) | Self::Column(i) | Self::Box(i) => i,
        }
    }

    /// Returns the nine cells of this house.
    ///
    /// Iterating the returned set yields the cells row-major, which for rows
    /// means left-to-right, for columns top-to-bottom, and for boxes the
    /// usual reading order.
    #[must_use]
    pub fn cells(self) -> CellSet {
        match self {
            Self::Row(i) => CellSet::ROWS[i as usize],
            Self::Column(i) => CellSet::COLUMNS[i as usize],
            Self::Box(i) => CellSet::BOXES[i as usize],
        }
    }

    /// Returns `true` if the cell belongs to this house.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        match self {
            Self::Row(i) => cell.row() == i,
            Self::Column(i) => cell.col() == i,
            Self::Box(i) => cell.box_index() == i,
        }
    }

    /// Returns the house of the given kind that contains the cell.
    #[must_use]
    pub const fn row_of(cell: Cell) -> Self {
        Self::Row(cell.row())
    }

    /// Returns the column house containing the cell.
    #[must_use]
    pub const fn column_of(cell: Cell) -> Self {
        Self::Column(cell.col())
    }

    /// Returns the box house containing the cell.
    #[must_use]
    pub const fn box_of(cell: Cell) -> Self {
        Self::Box(cell.box_index())
    }
}

impl Display for House {
    /// Formats as `Row 3`, `Column 7`, or `Box 5`, all 1-based, matching the
    /// vocabulary of step explanations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "Row {}", i + 1),
            Self::Column(i) => write!(f, "Column {}", i + 1),
            Self::Box(i) => write!(f, "Box {}", i + 1),
        }
    }
}
