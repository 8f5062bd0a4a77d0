//! Naked Pair/Triple/Quad: N cells of a house confined to the same N digits.

use tutoku_core::{Cell, CellSet, DigitSet, House};

use super::{cells_list, combinations};
use crate::{Grid, Step, Strategy};

const SET_NAMES: [&str; 5] = ["", "", "pair", "triple", "quad"];

pub(crate) fn find(grid: &Grid, size: usize, strategy: Strategy) -> Option<Step> {
    for house in House::ALL {
        let house_empty = house.cells() & grid.empty_cells();

        // Only cells that could be members: 2..=size candidates.
        let members: Vec<Cell> = house_empty
            .iter()
            .filter(|&cell| {
                let n = grid.candidates_at(cell).len();
                n > 1 && n <= size
            })
            .collect();
        if members.len() < size {
            continue;
        }

        let step = combinations(&members, size, &mut |combo: &[Cell]| {
            let mut union = DigitSet::new();
            for &cell in combo {
                union |= grid.candidates_at(cell);
            }
            if union.len() != size {
                return None;
            }

            let combo_cells: CellSet = combo.iter().copied().collect();
            let mut eliminations = Vec::new();
            for cell in house_empty & !combo_cells {
                for digit in grid.candidates_at(cell) & union {
                    eliminations.push((cell, digit));
                }
            }
            // A locked set that eliminates nothing is not worth reporting.
            if eliminations.is_empty() {
                return None;
            }

            Some(Step {
                strategy,
                placements: vec![],
                eliminations,
                pattern_cells: combo.to_vec(),
                house: Some(house),
                explanation: format!(
                    "In {house}, the {size} cells {} together contain only the digits \
                     {union}. These digits must be distributed among exactly these cells \
                     (in some order), so no other cell in this house can contain them — \
                     a naked {}.",
                    cells_list(combo.iter().copied()),
                    SET_NAMES[size],
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
    use tutoku_core::{Cell, Digit};

    use crate::testing::StrategyTester;

    use super::*;

    #[test]
    fn test_naked_pair_in_row() {
        // R1C1 and R1C5 are both reduced to {1,2}; 1 and 2 leave the rest of row 1.
        StrategyTester::empty()
            .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .with_candidates(Cell::new(0, 4), [Digit::D1, Digit::D2])
            .apply(Strategy::NakedPair)
            .assert_eliminated(Cell::new(0, 6), [Digit::D1, Digit::D2])
            .assert_unchanged(Cell::new(1, 6));
    }

    #[test]
    fn test_naked_pair_without_eliminations_is_silent() {
        let mut tester = StrategyTester::empty()
            .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .with_candidates(Cell::new(0, 4), [Digit::D1, Digit::D2]);
        // Strip 1 and 2 from the rest of row 1 and of both boxes up front.
        for col in 0..9 {
            let cell = Cell::new(0, col);
            if col != 0 && col != 4 {
                tester = tester.without_candidates(cell, [Digit::D1, Digit::D2]);
            }
        }
        for cell in (CellSet::BOXES[0] | CellSet::BOXES[1]).iter() {
            if cell != Cell::new(0, 0) && cell != Cell::new(0, 4) {
                tester = tester.without_candidates(cell, [Digit::D1, Digit::D2]);
            }
        }
        tester.assert_no_step(Strategy::NakedPair);
    }

    #[test]
    fn test_naked_triple_in_column() {
        StrategyTester::empty()
            .with_candidates(Cell::new(0, 3), [Digit::D4, Digit::D5])
            .with_candidates(Cell::new(4, 3), [Digit::D5, Digit::D6])
            .with_candidates(Cell::new(8, 3), [Digit::D4, Digit::D6])
            .apply(Strategy::NakedTriple)
            .assert_eliminated(Cell::new(2, 3), [Digit::D4, Digit::D5, Digit::D6]);
    }

    #[test]
    fn test_naked_quad_in_box() {
        StrategyTester::empty()
            .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .with_candidates(Cell::new(0, 1), [Digit::D2, Digit::D3])
            .with_candidates(Cell::new(1, 0), [Digit::D3, Digit::D4])
            .with_candidates(Cell::new(1, 1), [Digit::D4, Digit::D1])
            .apply(Strategy::NakedQuad)
            .assert_eliminated(
                Cell::new(2, 2),
                [Digit::D1, Digit::D2, Digit::D3, Digit::D4],
            );
    }

    #[test]
    fn test_reports_pattern_and_house() {
        let tester = StrategyTester::empty()
            .with_candidates(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .with_candidates(Cell::new(0, 4), [Digit::D1, Digit::D2])
            .apply(Strategy::NakedPair);
        assert_eq!(tester.step().house(), Some(House::Row(0)));
        assert_eq!(
            tester.step().pattern_cells(),
            &[Cell::new(0, 0), Cell::new(0, 4)]
        );
        assert!(tester.step().placements().is_empty());
    }

    #[test]
    fn test_no_step_on_empty_grid() {
        StrategyTester::empty().assert_no_step(Strategy::NakedPair);
    }
}
