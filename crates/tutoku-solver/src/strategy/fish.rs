//! X-Wing and Swordfish: base lines covering a digit with few cells whose
//! cross lines then exclude it everywhere else.

use tinyvec::ArrayVec;
use tutoku_core::{Cell, CellSet, Digit};

use crate::{Grid, Step, Strategy};

/// Base-line orientation: `true` scans rows as base lines, `false` columns.
fn line_cells(rows_base: bool, index: u8) -> CellSet {
    if rows_base {
        CellSet::ROWS[usize::from(index)]
    } else {
        CellSet::COLUMNS[usize::from(index)]
    }
}

fn cross_cells(rows_base: bool, index: u8) -> CellSet {
    line_cells(!rows_base, index)
}

fn cross_index(rows_base: bool, cell: Cell) -> u8 {
    if rows_base { cell.col() } else { cell.row() }
}

fn cell_at(rows_base: bool, line: u8, cross: u8) -> Cell {
    if rows_base {
        Cell::new(line, cross)
    } else {
        Cell::new(cross, line)
    }
}

fn mask_indices(mask: u16) -> impl Iterator<Item = u8> {
    (0..9u8).filter(move |i| mask & (1 << i) != 0)
}

pub(crate) fn x_wing(grid: &Grid) -> Option<Step> {
    for digit in Digit::ALL {
        if let Some(step) = x_wing_axis(grid, digit, true) {
            return Some(step);
        }
        if let Some(step) = x_wing_axis(grid, digit, false) {
            return Some(step);
        }
    }
    None
}

fn x_wing_axis(grid: &Grid, digit: Digit, rows_base: bool) -> Option<Step> {
    // Base lines where the digit has exactly two homes, with their cross mask.
    let mut lines: ArrayVec<[(u8, u16); 9]> = ArrayVec::new();
    for line in 0..9u8 {
        let homes = grid.digit_cells(digit) & line_cells(rows_base, line);
        if homes.len() == 2 {
            let mask = homes
                .iter()
                .fold(0u16, |m, cell| m | 1 << cross_index(rows_base, cell));
            lines.push((line, mask));
        }
    }

    for i in 0..lines.len() {
        for j in i + 1..lines.len() {
            let (line1, mask1) = lines[i];
            let (line2, mask2) = lines[j];
            if mask1 != mask2 {
                continue;
            }

            let mut targets = CellSet::EMPTY;
            for cross in mask_indices(mask1) {
                targets |= cross_cells(rows_base, cross);
            }
            targets &= grid.digit_cells(digit);
            targets &= !(line_cells(rows_base, line1) | line_cells(rows_base, line2));
            if targets.is_empty() {
                continue;
            }

            let crosses: Vec<u8> = mask_indices(mask1).collect();
            let corners = vec![
                cell_at(rows_base, line1, crosses[0]),
                cell_at(rows_base, line1, crosses[1]),
                cell_at(rows_base, line2, crosses[0]),
                cell_at(rows_base, line2, crosses[1]),
            ];
            let (base_name, cover_name) = if rows_base {
                ("rows", "columns")
            } else {
                ("columns", "rows")
            };
            return Some(Step {
                strategy: Strategy::XWing,
                placements: vec![],
                eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
                pattern_cells: corners,
                house: None,
                explanation: format!(
                    "Digit {digit} forms an X-Wing: it appears in exactly two cells of \
                     {base_name} {} and {}, in the same two {cover_name} ({} and {}). \
                     Whichever diagonal pair holds {digit}, each of those two \
                     {cover_name} receives one instance, so {digit} is impossible \
                     everywhere else in them.",
                    line1 + 1,
                    line2 + 1,
                    crosses[0] + 1,
                    crosses[1] + 1,
                ),
            });
        }
    }
    None
}

pub(crate) fn swordfish(grid: &Grid) -> Option<Step> {
    for digit in Digit::ALL {
        if let Some(step) = swordfish_axis(grid, digit, true) {
            return Some(step);
        }
        if let Some(step) = swordfish_axis(grid, digit, false) {
            return Some(step);
        }
    }
    None
}

fn swordfish_axis(grid: &Grid, digit: Digit, rows_base: bool) -> Option<Step> {
    // Base lines where the digit has two or three homes.
    let mut lines: ArrayVec<[(u8, u16); 9]> = ArrayVec::new();
    for line in 0..9u8 {
        let homes = grid.digit_cells(digit) & line_cells(rows_base, line);
        if homes.len() == 2 || homes.len() == 3 {
            let mask = homes
                .iter()
                .fold(0u16, |m, cell| m | 1 << cross_index(rows_base, cell));
            lines.push((line, mask));
        }
    }

    for i in 0..lines.len() {
        for j in i + 1..lines.len() {
            for k in j + 1..lines.len() {
                let (line1, mask1) = lines[i];
                let (line2, mask2) = lines[j];
                let (line3, mask3) = lines[k];
                let cover = mask1 | mask2 | mask3;
                if cover.count_ones() != 3 {
                    continue;
                }

                let base =
                    line_cells(rows_base, line1)
                        | line_cells(rows_base, line2)
                        | line_cells(rows_base, line3);
                let mut targets = CellSet::EMPTY;
                for cross in mask_indices(cover) {
                    targets |= cross_cells(rows_base, cross);
                }
                targets &= grid.digit_cells(digit);
                targets &= !base;
                if targets.is_empty() {
                    continue;
                }

                let pattern: Vec<Cell> = (grid.digit_cells(digit) & base).iter().collect();
                let (base_name, cover_name) = if rows_base {
                    ("rows", "columns")
                } else {
                    ("columns", "rows")
                };
                let base_list = format!("{},{},{}", line1 + 1, line2 + 1, line3 + 1);
                let cover_list = mask_indices(cover)
                    .map(|c| (c + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                return Some(Step {
                    strategy: Strategy::Swordfish,
                    placements: vec![],
                    eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
                    pattern_cells: pattern,
                    house: None,
                    explanation: format!(
                        "Digit {digit} forms a Swordfish across {base_name} {base_list}: \
                         in each of them {digit} only appears within {cover_name} \
                         {cover_list}. The digit must occupy one cell per base line and \
                         one per cover line, so it is impossible everywhere else in \
                         {cover_name} {cover_list}.",
                    ),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::testing::StrategyTester;

    use super::*;

    #[test]
    fn test_x_wing_rows_eliminates_in_columns() {
        // Digit 1 is confined to columns 2 and 8 in rows 1 and 5.
        let mut tester = StrategyTester::empty();
        for row in [0u8, 4] {
            for col in 0..9 {
                if col != 1 && col != 7 {
                    tester = tester.without_candidates(Cell::new(row, col), [Digit::D1]);
                }
            }
        }
        let tester = tester
            .apply(Strategy::XWing)
            .assert_eliminated(Cell::new(2, 1), [Digit::D1])
            .assert_eliminated(Cell::new(6, 7), [Digit::D1])
            .assert_unchanged(Cell::new(2, 2));
        assert_eq!(
            tester.step().pattern_cells(),
            &[
                Cell::new(0, 1),
                Cell::new(0, 7),
                Cell::new(4, 1),
                Cell::new(4, 7),
            ]
        );
    }

    #[test]
    fn test_x_wing_columns_eliminates_in_rows() {
        let mut tester = StrategyTester::empty();
        for col in [0u8, 5] {
            for row in 0..9 {
                if row != 2 && row != 6 {
                    tester = tester.without_candidates(Cell::new(row, col), [Digit::D8]);
                }
            }
        }
        tester
            .apply(Strategy::XWing)
            .assert_eliminated(Cell::new(2, 4), [Digit::D8])
            .assert_eliminated(Cell::new(6, 8), [Digit::D8]);
    }

    #[test]
    fn test_swordfish_in_rows() {
        // Digit 2 confined to columns {1,4,7} in rows 1, 4, and 7.
        let mut tester = StrategyTester::empty();
        for row in [0u8, 3, 6] {
            for col in 0..9 {
                if col != 0 && col != 3 && col != 6 {
                    tester = tester.without_candidates(Cell::new(row, col), [Digit::D2]);
                }
            }
        }
        tester
            .apply(Strategy::Swordfish)
            .assert_eliminated(Cell::new(1, 0), [Digit::D2])
            .assert_eliminated(Cell::new(8, 6), [Digit::D2])
            .assert_unchanged(Cell::new(1, 1));
    }

    #[test]
    fn test_no_fish_on_empty_grid() {
        StrategyTester::empty()
            .assert_no_step(Strategy::XWing)
            .assert_no_step(Strategy::Swordfish);
    }
}
