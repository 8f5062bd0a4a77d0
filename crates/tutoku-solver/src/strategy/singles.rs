//! Tier 1: Full House, Naked Single, Hidden Single.

use tutoku_core::{Digit, House};

use crate::{Grid, Step, Strategy};

pub(crate) fn full_house(grid: &Grid) -> Option<Step> {
    for house in House::ALL {
        let empty = house.cells() & grid.empty_cells();
        let Some(cell) = empty.single() else {
            continue;
        };
        let Some(digit) = grid.candidates_at(cell).single() else {
            continue;
        };
        return Some(Step {
            strategy: Strategy::FullHouse,
            placements: vec![(cell, digit)],
            eliminations: vec![],
            pattern_cells: vec![cell],
            house: Some(house),
            explanation: format!(
                "{house} has only one empty cell: {cell}. Every other digit 1-9 \
                 already appears in this house, so the missing digit {digit} must go here."
            ),
        });
    }
    None
}

pub(crate) fn naked_single(grid: &Grid) -> Option<Step> {
    for cell in grid.empty_cells() {
        let Some(digit) = grid.candidates_at(cell).single() else {
            continue;
        };
        return Some(Step {
            strategy: Strategy::NakedSingle,
            placements: vec![(cell, digit)],
            eliminations: vec![],
            pattern_cells: vec![cell],
            house: None,
            explanation: format!(
                "Cell {cell} has only one candidate left: {digit}. All other digits \
                 already appear in its row, column, or box, so {digit} is the only possibility."
            ),
        });
    }
    None
}

pub(crate) fn hidden_single(grid: &Grid) -> Option<Step> {
    for house in House::ALL {
        for digit in Digit::ALL {
            let homes = grid.digit_cells(digit) & house.cells();
            let Some(cell) = homes.single() else {
                continue;
            };
            // A lone empty cell in the house is a Full House, reported earlier.
            if (house.cells() & grid.empty_cells()).len() == 1 {
                continue;
            }
            return Some(Step {
                strategy: Strategy::HiddenSingle,
                placements: vec![(cell, digit)],
                eliminations: vec![],
                pattern_cells: vec![cell],
                house: Some(house),
                explanation: format!(
                    "In {house}, digit {digit} can only go in one place: {cell}. Every \
                     other cell of this house has {digit} ruled out, so even though \
                     {cell} may have other candidates, {digit} is hidden here as the \
                     only option for this house."
                ),
            });
        }
    }
    None
}
