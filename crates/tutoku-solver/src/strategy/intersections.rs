//! Pointing Pairs/Triples and Box-Line Reduction.
//!
//! Both are box/line intersection arguments: the digit is locked into the
//! intersection of a box and a line, and leaves the rest of one of the two.

use tutoku_core::{CellSet, Digit, House};

use super::{boxes_of, cells_list, cols_of, rows_of};
use crate::{Grid, Step, Strategy};

pub(crate) fn pointing(grid: &Grid) -> Option<Step> {
    for b in 0..9u8 {
        let box_cells = CellSet::BOXES[usize::from(b)];
        for digit in Digit::ALL {
            let homes = grid.digit_cells(digit) & box_cells;
            if homes.len() < 2 || homes.len() > 3 {
                continue;
            }

            let rows = rows_of(homes);
            if rows.count_ones() == 1 {
                #[expect(clippy::cast_possible_truncation)]
                let row = rows.trailing_zeros() as u8;
                let targets =
                    grid.digit_cells(digit) & CellSet::ROWS[usize::from(row)] & !box_cells;
                if !targets.is_empty() {
                    return Some(pointing_step(digit, b, House::Row(row), homes, targets));
                }
            }

            let cols = cols_of(homes);
            if cols.count_ones() == 1 {
                #[expect(clippy::cast_possible_truncation)]
                let col = cols.trailing_zeros() as u8;
                let targets =
                    grid.digit_cells(digit) & CellSet::COLUMNS[usize::from(col)] & !box_cells;
                if !targets.is_empty() {
                    return Some(pointing_step(digit, b, House::Column(col), homes, targets));
                }
            }
        }
    }
    None
}

fn pointing_step(
    digit: Digit,
    box_index: u8,
    line: House,
    homes: CellSet,
    targets: CellSet,
) -> Step {
    let house = House::Box(box_index);
    let kind = if homes.len() == 2 { "pair" } else { "triple" };
    Step {
        strategy: Strategy::PointingPairs,
        placements: vec![],
        eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
        pattern_cells: homes.iter().collect(),
        house: Some(house),
        explanation: format!(
            "In {house}, digit {digit} can only appear in {} — a pointing {kind} \
             lying entirely in {line}. Since {digit} must go somewhere in this box, \
             it cannot appear anywhere else in {line} outside the box.",
            cells_list(homes),
        ),
    }
}

pub(crate) fn box_line(grid: &Grid) -> Option<Step> {
    for house in House::ALL {
        if matches!(house, House::Box(_)) {
            continue;
        }
        for digit in Digit::ALL {
            let homes = grid.digit_cells(digit) & house.cells();
            if homes.len() < 2 {
                continue;
            }
            let boxes = boxes_of(homes);
            if boxes.count_ones() != 1 {
                continue;
            }
            let b = boxes.trailing_zeros() as usize;
            let targets = grid.digit_cells(digit) & CellSet::BOXES[b] & !house.cells();
            if targets.is_empty() {
                continue;
            }

            #[expect(clippy::cast_possible_truncation)]
            let box_house = House::Box(b as u8);
            return Some(Step {
                strategy: Strategy::BoxLineReduction,
                placements: vec![],
                eliminations: targets.iter().map(|cell| (cell, digit)).collect(),
                pattern_cells: homes.iter().collect(),
                house: Some(house),
                explanation: format!(
                    "In {house}, digit {digit} can only appear inside {box_house}, at {}. \
                     Since {digit} must be somewhere in {house}, it is claimed by this \
                     line and cannot appear elsewhere in {box_house}.",
                    cells_list(homes),
                ),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use tutoku_core::Cell;

    use crate::testing::StrategyTester;

    use super::*;

    #[test]
    fn test_pointing_pair_eliminates_along_row() {
        // In box 1 (top-left), confine digit 7 to R1C1 and R1C2.
        let mut tester = StrategyTester::empty();
        for cell in CellSet::BOXES[0].iter() {
            if cell.row() != 0 || cell.col() > 1 {
                tester = tester.without_candidates(cell, [Digit::D7]);
            }
        }
        let tester = tester
            .apply(Strategy::PointingPairs)
            .assert_eliminated(Cell::new(0, 3), [Digit::D7])
            .assert_eliminated(Cell::new(0, 8), [Digit::D7])
            .assert_unchanged(Cell::new(1, 3));
        assert_eq!(tester.step().house(), Some(House::Box(0)));
        assert_eq!(
            tester.step().pattern_cells(),
            &[Cell::new(0, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn test_pointing_triple_eliminates_along_column() {
        let mut tester = StrategyTester::empty();
        for cell in CellSet::BOXES[0].iter() {
            if cell.col() != 2 {
                tester = tester.without_candidates(cell, [Digit::D4]);
            }
        }
        tester
            .apply(Strategy::PointingPairs)
            .assert_eliminated(Cell::new(5, 2), [Digit::D4])
            .assert_eliminated(Cell::new(8, 2), [Digit::D4])
            .assert_unchanged(Cell::new(5, 1));
    }

    #[test]
    fn test_box_line_reduction_from_row() {
        // In row 5, confine digit 3 to the middle box: it leaves the rest of
        // that box.
        let mut tester = StrategyTester::empty();
        for col in 0..9 {
            if !(3..6).contains(&col) {
                tester = tester.without_candidates(Cell::new(4, col), [Digit::D3]);
            }
        }
        let tester = tester
            .apply(Strategy::BoxLineReduction)
            .assert_eliminated(Cell::new(3, 3), [Digit::D3])
            .assert_eliminated(Cell::new(5, 5), [Digit::D3])
            .assert_unchanged(Cell::new(3, 0));
        assert_eq!(tester.step().house(), Some(House::Row(4)));
    }

    #[test]
    fn test_no_step_when_digit_spans_boxes() {
        StrategyTester::empty()
            .assert_no_step(Strategy::PointingPairs)
            .assert_no_step(Strategy::BoxLineReduction);
    }
}
