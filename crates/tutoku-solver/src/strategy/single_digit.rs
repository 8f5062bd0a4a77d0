//! Skyscraper and 2-String Kite: two strong links on one digit.

use tinyvec::ArrayVec;
use tutoku_core::{Cell, CellSet, Digit};

use crate::{Grid, Step, Strategy};

/// Lines of one orientation where the digit has exactly two homes, as
/// `(line index, first cross index, second cross index)`.
fn lines_with_two(grid: &Grid, digit: Digit, rows_base: bool) -> ArrayVec<[(u8, u8, u8); 9]> {
    let mut lines = ArrayVec::new();
    for line in 0..9u8 {
        let line_cells = if rows_base {
            CellSet::ROWS[usize::from(line)]
        } else {
            CellSet::COLUMNS[usize::from(line)]
        };
        let Some((cell1, cell2)) = (grid.digit_cells(digit) & line_cells).pair() else {
            continue;
        };
        if rows_base {
            lines.push((line, cell1.col(), cell2.col()));
        } else {
            lines.push((line, cell1.row(), cell2.row()));
        }
    }
    lines
}

fn cell_at(rows_base: bool, line: u8, cross: u8) -> Cell {
    if rows_base {
        Cell::new(line, cross)
    } else {
        Cell::new(cross, line)
    }
}

pub(crate) fn skyscraper(grid: &Grid) -> Option<Step> {
    for digit in Digit::ALL {
        if let Some(step) = skyscraper_axis(grid, digit, true) {
            return Some(step);
        }
        if let Some(step) = skyscraper_axis(grid, digit, false) {
            return Some(step);
        }
    }
    None
}

fn skyscraper_axis(grid: &Grid, digit: Digit, rows_base: bool) -> Option<Step> {
    let lines = lines_with_two(grid, digit, rows_base);
    for i in 0..lines.len() {
        for j in i + 1..lines.len() {
            let (line1, a1, a2) = lines[i];
            let (line2, b1, b2) = lines[j];

            // The two lines must share exactly one cross index, the trunk.
            let a1_shared = a1 == b1 || a1 == b2;
            let a2_shared = a2 == b1 || a2 == b2;
            let trunk = match (a1_shared, a2_shared) {
                (true, false) => a1,
                (false, true) => a2,
                _ => continue,
            };
            let roof1 = cell_at(rows_base, line1, if a1 == trunk { a2 } else { a1 });
            let roof2 = cell_at(rows_base, line2, if b1 == trunk { b2 } else { b1 });
            if roof1.box_index() == roof2.box_index() {
                continue;
            }

            let trunk1 = cell_at(rows_base, line1, trunk);
            let trunk2 = cell_at(rows_base, line2, trunk);
            let targets = (roof1.peers() & roof2.peers() & grid.digit_cells(digit))
                .without(trunk1)
                .without(trunk2);
            if targets.is_empty() {
                continue;
            }

            let line_name = if rows_base { "rows" } else { "columns" };
            let cross_name = if rows_base { "column" } else { "row" };
            return Some(Step {
                strategy: Strategy::Skyscraper,
                placements: vec![],
                eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
                pattern_cells: vec![trunk1, trunk2, roof1, roof2],
                house: None,
                explanation: format!(
                    "Skyscraper on digit {digit}: {line_name} {} and {} each hold \
                     {digit} in exactly two cells and share {cross_name} {} as the \
                     trunk. The trunk's strong link forces one of the roofs {roof1} \
                     and {roof2} to be {digit}, so any cell seeing both roofs can \
                     drop {digit}.",
                    line1 + 1,
                    line2 + 1,
                    trunk + 1,
                ),
            });
        }
    }
    None
}

pub(crate) fn two_string_kite(grid: &Grid) -> Option<Step> {
    for digit in Digit::ALL {
        let row_two = lines_with_two(grid, digit, true);
        let col_two = lines_with_two(grid, digit, false);

        for &(row, rc1, rc2) in &row_two {
            for pivot_col in [rc1, rc2] {
                let Some(&(_, cr1, cr2)) =
                    col_two.iter().find(|&&(col, _, _)| col == pivot_col)
                else {
                    continue;
                };
                if cr1 != row && cr2 != row {
                    continue;
                }
                let tail_row = Cell::new(row, if rc1 == pivot_col { rc2 } else { rc1 });
                let tail_col = Cell::new(if cr1 == row { cr2 } else { cr1 }, pivot_col);
                if tail_row.box_index() == tail_col.box_index() {
                    continue;
                }

                let pivot = Cell::new(row, pivot_col);
                let targets = (tail_row.peers() & tail_col.peers() & grid.digit_cells(digit))
                    .without(pivot);
                if targets.is_empty() {
                    continue;
                }

                return Some(Step {
                    strategy: Strategy::TwoStringKite,
                    placements: vec![],
                    eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
                    pattern_cells: vec![pivot, tail_row, tail_col],
                    house: None,
                    explanation: format!(
                        "2-String Kite on digit {digit}: row {} and column {} each \
                         hold {digit} in exactly two cells and meet at the pivot \
                         {pivot}. One string runs to {tail_row}, the other to \
                         {tail_col}; one of the two tails must be {digit}, so any \
                         cell seeing both tails can drop {digit}.",
                        row + 1,
                        pivot_col + 1,
                    ),
                });
            }
        }
    }
    None
}
