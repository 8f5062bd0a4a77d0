//! Unique Rectangle and BUG+1: deductions from the assumption that the
//! puzzle has exactly one solution.

use tutoku_core::{Cell, CellSet, Digit, DigitSet};

use super::{boxes_of, cells_list};
use crate::{Grid, Step, Strategy};

pub(crate) fn unique_rectangle(grid: &Grid) -> Option<Step> {
    for i in 0..9u8 {
        for j in i + 1..9 {
            let pair = DigitSet::from_iter([Digit::new(i + 1), Digit::new(j + 1)]);
            if let Some(step) = unique_rectangle_for(grid, pair) {
                return Some(step);
            }
        }
    }
    None
}

fn unique_rectangle_for(grid: &Grid, pair: DigitSet) -> Option<Step> {
    let (digit_a, digit_b) = pair.pair()?;
    for row1 in 0..9u8 {
        for row2 in row1 + 1..9 {
            for col1 in 0..9u8 {
                for col2 in col1 + 1..9 {
                    let corners = [
                        Cell::new(row1, col1),
                        Cell::new(row1, col2),
                        Cell::new(row2, col1),
                        Cell::new(row2, col2),
                    ];
                    let corner_set: CellSet = corners.iter().copied().collect();
                    // The rectangle must span exactly two boxes, or the
                    // deadly pattern argument does not hold.
                    if boxes_of(corner_set).count_ones() != 2 {
                        continue;
                    }
                    if !corners.iter().all(|&cell| {
                        grid.empty_cells().contains(cell)
                            && pair.is_subset(grid.candidates_at(cell))
                    }) {
                        continue;
                    }

                    let floors: Vec<Cell> = corners
                        .iter()
                        .copied()
                        .filter(|&cell| grid.candidates_at(cell) == pair)
                        .collect();
                    let roofs: Vec<Cell> = corners
                        .iter()
                        .copied()
                        .filter(|&cell| grid.candidates_at(cell) != pair)
                        .collect();

                    // Type 1: three floors pin the fourth corner.
                    if floors.len() == 3 && roofs.len() == 1 {
                        let roof = roofs[0];
                        return Some(Step {
                            strategy: Strategy::UniqueRectangle,
                            placements: vec![],
                            eliminations: vec![(roof, digit_a), (roof, digit_b)],
                            pattern_cells: corners.to_vec(),
                            house: None,
                            explanation: format!(
                                "Unique Rectangle (type 1) on digits {pair} at {}. \
                                 Three corners hold exactly {pair}; if {roof} did too, \
                                 the four cells could swap {digit_a} and {digit_b} \
                                 freely and the puzzle would have two solutions. So \
                                 {digit_a} and {digit_b} are impossible at {roof}.",
                                cells_list(corners.iter().copied()),
                            ),
                        });
                    }

                    // Type 2: two roofs carrying the same lone extra digit.
                    if floors.len() == 2 && roofs.len() == 2 {
                        let extra1 = grid.candidates_at(roofs[0]).difference(pair);
                        let extra2 = grid.candidates_at(roofs[1]).difference(pair);
                        if extra1 != extra2 {
                            continue;
                        }
                        let Some(extra) = extra1.single() else {
                            continue;
                        };
                        let targets = (roofs[0].peers()
                            & roofs[1].peers()
                            & grid.digit_cells(extra))
                            & !corner_set;
                        if targets.is_empty() {
                            continue;
                        }
                        return Some(Step {
                            strategy: Strategy::UniqueRectangle,
                            placements: vec![],
                            eliminations: targets.iter().map(|cell| (cell, extra)).collect(),
                            pattern_cells: corners.to_vec(),
                            house: None,
                            explanation: format!(
                                "Unique Rectangle (type 2) on digits {pair} at {}. Two \
                                 corners hold exactly {pair}; the other two also carry \
                                 {extra}. To avoid a deadly rectangle, {extra} must \
                                 land in {} or {}, so cells seeing both cannot hold \
                                 {extra}.",
                                cells_list(corners.iter().copied()),
                                roofs[0],
                                roofs[1],
                            ),
                        });
                    }
                }
            }
        }
    }
    None
}

pub(crate) fn bug_plus_one(grid: &Grid) -> Option<Step> {
    let bivalue = grid.cells_with_candidates(2);
    let trivalue = grid.cells_with_candidates(3);
    let cell = trivalue.single()?;
    if (bivalue | trivalue) != grid.empty_cells() {
        return None;
    }

    let houses = [
        CellSet::ROWS[usize::from(cell.row())],
        CellSet::COLUMNS[usize::from(cell.col())],
        CellSet::BOXES[usize::from(cell.box_index())],
    ];
    for digit in grid.candidates_at(cell) {
        let odd_everywhere = houses
            .iter()
            .all(|&house| (grid.digit_cells(digit) & house).len() % 2 == 1);
        if odd_everywhere {
            let candidates = grid.candidates_at(cell);
            return Some(Step {
                strategy: Strategy::BugPlusOne,
                placements: vec![(cell, digit)],
                eliminations: vec![],
                pattern_cells: vec![cell],
                house: None,
                explanation: format!(
                    "BUG+1: every empty cell holds exactly two candidates except \
                     {cell}, which holds {candidates}. Placing anything but {digit} \
                     there would leave a bivalue universal grave, a configuration \
                     with more than one solution. So {digit} goes in {cell}."
                ),
            });
        }
    }
    None
}
