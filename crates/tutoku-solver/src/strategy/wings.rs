//! Y-Wing, XYZ-Wing, and W-Wing: bivalue-cell hinge patterns.

use tutoku_core::{Cell, House};

use super::cells_list;
use crate::{Grid, Step, Strategy};

pub(crate) fn y_wing(grid: &Grid) -> Option<Step> {
    let bivalue = grid.cells_with_candidates(2);
    for pivot in bivalue {
        let pivot_digits = grid.candidates_at(pivot);
        let (a, b) = pivot_digits.pair()?;

        // Wings: bivalue peers sharing exactly one digit with the pivot.
        let wings: Vec<Cell> = (bivalue & pivot.peers())
            .iter()
            .filter(|&wing| (grid.candidates_at(wing) & pivot_digits).len() == 1)
            .collect();

        for i in 0..wings.len() {
            for j in i + 1..wings.len() {
                let (wing1, wing2) = (wings[i], wings[j]);
                let digits1 = grid.candidates_at(wing1);
                let digits2 = grid.candidates_at(wing2);
                if (digits1 & pivot_digits) == (digits2 & pivot_digits) {
                    continue;
                }
                let Some(shared) = (digits1 | digits2).difference(pivot_digits).single() else {
                    continue;
                };
                if !digits1.contains(shared) || !digits2.contains(shared) {
                    continue;
                }

                let targets = (wing1.peers() & wing2.peers() & grid.digit_cells(shared))
                    .without(pivot);
                if targets.is_empty() {
                    continue;
                }

                return Some(Step {
                    strategy: Strategy::YWing,
                    placements: vec![],
                    eliminations: targets.iter().map(|cell| (cell, shared)).collect(),
                    pattern_cells: vec![pivot, wing1, wing2],
                    house: None,
                    explanation: format!(
                        "Y-Wing: pivot {pivot} = {pivot_digits}, wing {wing1} = \
                         {digits1}, wing {wing2} = {digits2}. The pivot must be {a} or \
                         {b}; either way one wing is forced to {shared}, so no cell \
                         seeing both wings can contain {shared}."
                    ),
                });
            }
        }
    }
    None
}

pub(crate) fn xyz_wing(grid: &Grid) -> Option<Step> {
    let trivalue = grid.cells_with_candidates(3);
    let bivalue = grid.cells_with_candidates(2);
    for pivot in trivalue {
        let pivot_digits = grid.candidates_at(pivot);

        // Wings: bivalue peers whose candidates sit inside the pivot's three.
        let wings: Vec<Cell> = (bivalue & pivot.peers())
            .iter()
            .filter(|&wing| grid.candidates_at(wing).is_subset(pivot_digits))
            .collect();

        for i in 0..wings.len() {
            for j in i + 1..wings.len() {
                let (wing1, wing2) = (wings[i], wings[j]);
                let digits1 = grid.candidates_at(wing1);
                let digits2 = grid.candidates_at(wing2);
                if (digits1 | digits2) != pivot_digits {
                    continue;
                }
                let Some(shared) = (digits1 & digits2).single() else {
                    continue;
                };

                // Unlike the Y-Wing, the pivot itself holds the shared digit,
                // so a target must see all three pattern cells.
                let targets =
                    pivot.peers() & wing1.peers() & wing2.peers() & grid.digit_cells(shared);
                if targets.is_empty() {
                    continue;
                }

                return Some(Step {
                    strategy: Strategy::XyzWing,
                    placements: vec![],
                    eliminations: targets.iter().map(|cell| (cell, shared)).collect(),
                    pattern_cells: vec![pivot, wing1, wing2],
                    house: None,
                    explanation: format!(
                        "XYZ-Wing: pivot {pivot} = {pivot_digits}, wing {wing1} = \
                         {digits1}, wing {wing2} = {digits2}. The shared digit {shared} \
                         must land in one of these three cells, so any cell seeing all \
                         three cannot contain {shared}."
                    ),
                });
            }
        }
    }
    None
}

pub(crate) fn w_wing(grid: &Grid) -> Option<Step> {
    let twins: Vec<Cell> = grid.cells_with_candidates(2).iter().collect();
    for i in 0..twins.len() {
        for j in i + 1..twins.len() {
            let (first, second) = (twins[i], twins[j]);
            let digits = grid.candidates_at(first);
            if digits != grid.candidates_at(second) {
                continue;
            }
            // Twins that see each other are a naked pair, not a W-Wing.
            if first.sees(second) {
                continue;
            }
            let Some((a, b)) = digits.pair() else {
                continue;
            };

            for (bridge, eliminated) in [(a, b), (b, a)] {
                for house in House::ALL {
                    let ends = grid.digit_cells(bridge) & house.cells();
                    let Some((end1, end2)) = ends.pair() else {
                        continue;
                    };
                    let linked = (end1.sees(first) && end2.sees(second))
                        || (end1.sees(second) && end2.sees(first));
                    if !linked {
                        continue;
                    }

                    let targets = first.peers() & second.peers() & grid.digit_cells(eliminated);
                    if targets.is_empty() {
                        continue;
                    }

                    return Some(Step {
                        strategy: Strategy::WWing,
                        placements: vec![],
                        eliminations: targets.iter().map(|cell| (cell, eliminated)).collect(),
                        pattern_cells: vec![end1, end2, first, second],
                        house: Some(house),
                        explanation: format!(
                            "W-Wing: {first} and {second} both hold exactly {digits} and \
                             do not see each other. In {house}, digit {bridge} is \
                             confined to {} — one end sees each twin, so one of the \
                             twins is forced to {eliminated}. No cell seeing both twins \
                             can contain {eliminated}.",
                            cells_list([end1, end2]),
                        ),
                    });
                }
            }
        }
    }
    None
}
