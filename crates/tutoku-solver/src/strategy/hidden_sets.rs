//! Hidden Pair/Triple/Quad: N digits of a house confined to the same N cells.

use tutoku_core::{CellSet, Digit, DigitSet, House};

use super::{cells_list, combinations};
use crate::{Grid, Step, Strategy};

pub(crate) fn find(grid: &Grid, size: usize, strategy: Strategy) -> Option<Step> {
    for house in House::ALL {
        // Digits whose homes in this house number 2..=size.
        let mut confined: Vec<(Digit, CellSet)> = Vec::new();
        for digit in Digit::ALL {
            let homes = grid.digit_cells(digit) & house.cells();
            if (2..=size).contains(&homes.len()) {
                confined.push((digit, homes));
            }
        }
        if confined.len() < size {
            continue;
        }

        let step = combinations(&confined, size, &mut |combo: &[(Digit, CellSet)]| {
            let mut cells = CellSet::new();
            let mut digits = DigitSet::new();
            for &(digit, homes) in combo {
                cells |= homes;
                digits.insert(digit);
            }
            if cells.len() != size {
                return None;
            }

            let mut eliminations = Vec::new();
            for cell in cells {
                for digit in grid.candidates_at(cell).difference(digits) {
                    eliminations.push((cell, digit));
                }
            }
            if eliminations.is_empty() {
                return None;
            }

            Some(Step {
                strategy,
                placements: vec![],
                eliminations,
                pattern_cells: cells.iter().collect(),
                house: Some(house),
                explanation: format!(
                    "In {house}, the digits {digits} can only appear in the cells {}. \
                     Since these {size} digits are confined to exactly these {size} \
                     cells, those cells cannot hold any other digit.",
                    cells_list(cells),
                ),
            })
        });
        if step.is_some() {
            return step;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use tutoku_core::Cell;

    use crate::testing::StrategyTester;

    use super::*;

    /// Confines `digits` within row 1 to `cols` by removing them everywhere
    /// else in that row.
    fn confine_in_row0(
        mut tester: StrategyTester,
        digits: &[Digit],
        cols: &[u8],
    ) -> StrategyTester {
        for col in 0..9 {
            if !cols.contains(&col) {
                tester = tester.without_candidates(Cell::new(0, col), digits.iter().copied());
            }
        }
        // Keep the boxes from offering the digits a second home column-wise.
        for row in 1..3 {
            for col in 0..9 {
                tester = tester.without_candidates(Cell::new(row, col), digits.iter().copied());
            }
        }
        tester
    }

    #[test]
    fn test_hidden_pair_strips_other_candidates() {
        let tester = confine_in_row0(
            StrategyTester::empty(),
            &[Digit::D1, Digit::D2],
            &[2, 6],
        );
        tester
            .apply(Strategy::HiddenPair)
            .assert_eliminated(
                Cell::new(0, 2),
                [
                    Digit::D3,
                    Digit::D4,
                    Digit::D5,
                    Digit::D6,
                    Digit::D7,
                    Digit::D8,
                    Digit::D9,
                ],
            )
            .assert_eliminated(Cell::new(0, 6), [Digit::D3, Digit::D9]);
    }

    #[test]
    fn test_hidden_pair_reports_house_and_cells() {
        let tester = confine_in_row0(
            StrategyTester::empty(),
            &[Digit::D1, Digit::D2],
            &[2, 6],
        )
        .apply(Strategy::HiddenPair);
        assert_eq!(tester.step().house(), Some(House::Row(0)));
        assert_eq!(
            tester.step().pattern_cells(),
            &[Cell::new(0, 2), Cell::new(0, 6)]
        );
    }

    #[test]
    fn test_hidden_triple() {
        let tester = confine_in_row0(
            StrategyTester::empty(),
            &[Digit::D1, Digit::D2, Digit::D3],
            &[0, 4, 8],
        );
        tester
            .apply(Strategy::HiddenTriple)
            .assert_eliminated(Cell::new(0, 0), [Digit::D4, Digit::D9]);
    }

    #[test]
    fn test_hidden_set_already_clean_is_silent() {
        // The pair cells hold nothing but the pair: no eliminations to make.
        let mut tester = confine_in_row0(
            StrategyTester::empty(),
            &[Digit::D1, Digit::D2],
            &[2, 6],
        );
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                tester = tester.without_candidates(Cell::new(0, 2), [digit]);
                tester = tester.without_candidates(Cell::new(0, 6), [digit]);
            }
        }
        tester.assert_no_step(Strategy::HiddenPair);
    }

    #[test]
    fn test_no_step_on_empty_grid() {
        StrategyTester::empty().assert_no_step(Strategy::HiddenQuad);
    }
}
