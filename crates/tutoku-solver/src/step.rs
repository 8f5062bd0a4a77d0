use std::fmt::{self, Display};

use tutoku_core::{Cell, Digit, House};

use crate::Strategy;

/// One deduction: which strategy fired, what it changes, and why.
///
/// A step is immutable once emitted. It carries the placements and candidate
/// eliminations to apply, the cells that define the pattern (for a front-end
/// to highlight), the house the pattern primarily lives in when there is one,
/// and a plain-English justification.
///
/// Every step has at least one placement or one elimination; detectors that
/// would produce neither return no step instead.
///
/// Equality is structural over everything *except* the explanation, so two
/// steps describing the same deduction in different words compare equal.
#[derive(Debug, Clone)]
pub struct Step {
    pub(crate) strategy: Strategy,
    pub(crate) placements: Vec<(Cell, Digit)>,
    pub(crate) eliminations: Vec<(Cell, Digit)>,
    pub(crate) pattern_cells: Vec<Cell>,
    pub(crate) house: Option<House>,
    pub(crate) explanation: String,
}

impl Step {
    /// The strategy that produced this step.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Digits to place, as `(cell, digit)` pairs.
    #[must_use]
    pub fn placements(&self) -> &[(Cell, Digit)] {
        &self.placements
    }

    /// Candidates to remove, as `(cell, digit)` pairs.
    #[must_use]
    pub fn eliminations(&self) -> &[(Cell, Digit)] {
        &self.eliminations
    }

    /// The cells that define the pattern.
    #[must_use]
    pub fn pattern_cells(&self) -> &[Cell] {
        &self.pattern_cells
    }

    /// The house the pattern primarily lives in, if any.
    #[must_use]
    pub fn house(&self) -> Option<House> {
        self.house
    }

    /// The human-readable justification for this deduction.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.strategy == other.strategy
            && self.placements == other.placements
            && self.eliminations == other.eliminations
            && self.pattern_cells == other.pattern_cells
            && self.house == other.house
    }
}

impl Eq for Step {}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.strategy.name(), self.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_explanation() {
        let make = |explanation: &str| Step {
            strategy: Strategy::NakedSingle,
            placements: vec![(Cell::new(0, 0), Digit::D1)],
            eliminations: vec![],
            pattern_cells: vec![Cell::new(0, 0)],
            house: None,
            explanation: explanation.to_owned(),
        };
        assert_eq!(make("one wording"), make("another wording"));
    }

    #[test]
    fn test_equality_compares_changes() {
        let base = Step {
            strategy: Strategy::NakedSingle,
            placements: vec![(Cell::new(0, 0), Digit::D1)],
            eliminations: vec![],
            pattern_cells: vec![Cell::new(0, 0)],
            house: None,
            explanation: String::new(),
        };
        let mut other = base.clone();
        other.placements = vec![(Cell::new(0, 0), Digit::D2)];
        assert_ne!(base, other);
    }

    #[test]
    fn test_display_names_strategy() {
        let step = Step {
            strategy: Strategy::XWing,
            placements: vec![],
            eliminations: vec![(Cell::new(1, 1), Digit::D4)],
            pattern_cells: vec![],
            house: None,
            explanation: "four corners".to_owned(),
        };
        assert_eq!(step.to_string(), "[X-Wing] four corners");
    }
}
