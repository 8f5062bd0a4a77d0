//! Simple Coloring (singles chains) over one digit's conjugate pairs.

use std::collections::VecDeque;

use tutoku_core::{Cell, CellSet, Digit, House};

use super::cells_list;
use crate::{Grid, Step, Strategy};

pub(crate) fn simple_coloring(grid: &Grid) -> Option<Step> {
    for digit in Digit::ALL {
        let homes = grid.digit_cells(digit);

        // Strong links: houses where the digit has exactly two homes.
        let mut vertices = CellSet::EMPTY;
        let mut adjacency = [CellSet::EMPTY; 81];
        for house in House::ALL {
            let Some((cell1, cell2)) = (homes & house.cells()).pair() else {
                continue;
            };
            adjacency[usize::from(cell1.index())].insert(cell2);
            adjacency[usize::from(cell2.index())].insert(cell1);
            vertices.insert(cell1);
            vertices.insert(cell2);
        }
        if vertices.len() < 4 {
            continue;
        }

        let mut visited = CellSet::EMPTY;
        for start in vertices {
            if visited.contains(start) {
                continue;
            }

            // Two-color the connected component by breadth-first search.
            let mut blue = CellSet::EMPTY;
            let mut green = CellSet::EMPTY;
            let mut queue = VecDeque::new();
            queue.push_back((start, true));
            while let Some((cell, is_blue)) = queue.pop_front() {
                if blue.contains(cell) || green.contains(cell) {
                    continue;
                }
                if is_blue {
                    blue.insert(cell);
                } else {
                    green.insert(cell);
                }
                for neighbor in adjacency[usize::from(cell.index())] {
                    if !blue.contains(neighbor) && !green.contains(neighbor) {
                        queue.push_back((neighbor, !is_blue));
                    }
                }
            }
            let component = blue | green;
            visited |= component;

            // Rule 1: two same-colored cells sharing a house falsify that
            // whole color.
            for (colored, name, other) in [(blue, "blue", "green"), (green, "green", "blue")] {
                let Some((clash1, clash2)) = find_house_clash(colored) else {
                    continue;
                };
                return Some(Step {
                    strategy: Strategy::SimpleColoring,
                    placements: vec![],
                    eliminations: colored.iter().map(|cell| (cell, digit)).collect(),
                    pattern_cells: component.iter().collect(),
                    house: None,
                    explanation: format!(
                        "For digit {digit}, the conjugate-pair chain was two-colored. \
                         Two {name} cells ({clash1} and {clash2}) share a house, which \
                         is a contradiction, so the {name} color cannot hold {digit} \
                         anywhere and the {other} cells must. {digit} is eliminated \
                         from every {name} cell."
                    ),
                });
            }

            // Rule 2: a cell outside the chain that sees both colors can
            // never hold the digit, whichever color wins.
            let eliminations: Vec<(Cell, Digit)> = (homes & !component)
                .iter()
                .filter(|&cell| {
                    let peers = cell.peers();
                    !(peers & blue).is_empty() && !(peers & green).is_empty()
                })
                .map(|cell| (cell, digit))
                .collect();
            if !eliminations.is_empty() {
                return Some(Step {
                    strategy: Strategy::SimpleColoring,
                    placements: vec![],
                    eliminations,
                    pattern_cells: component.iter().collect(),
                    house: None,
                    explanation: format!(
                        "For digit {digit}, conjugate pairs form a chain colored blue \
                         ({}) and green ({}). One color must hold {digit} and the other \
                         must not; a cell that sees both colors loses {digit} whichever \
                         way it falls.",
                        cells_list(blue),
                        cells_list(green),
                    ),
                });
            }
        }
    }
    None
}

/// First pair of cells in the set, in lexicographic pair order, that share a
/// house.
fn find_house_clash(cells: CellSet) -> Option<(Cell, Cell)> {
    let list: Vec<Cell> = cells.iter().collect();
    for i in 0..list.len() {
        for j in i + 1..list.len() {
            if list[i].sees(list[j]) {
                return Some((list[i], list[j]));
            }
        }
    }
    None
}
