use std::fmt::{self, Display};

/// A Sudoku digit, 1 through 9.
///
/// The enum is `repr(u8)` with every variant equal to its numeric value, so
/// converting to `u8` is free. Build one with [`Digit::new`] when the value
/// is known to be in range, or through the `TryFrom<u8>` impl when it came
/// from untrusted input.
///
/// # Examples
///
/// ```
/// use tutoku_core::Digit;
///
/// let five = Digit::new(5);
/// assert_eq!(five, Digit::D5);
/// assert_eq!(u8::from(five), 5);
///
/// assert!(Digit::try_from(7).is_ok());
/// assert!(Digit::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// 1
    D1 = 1,
    /// 2
    D2 = 2,
    /// 3
    D3 = 3,
    /// 4
    D4 = 4,
    /// 5
    D5 = 5,
    /// 6
    D6 = 6,
    /// 7
    D7 = 7,
    /// 8
    D8 = 8,
    /// 9
    D9 = 9,
}

impl Digit {
    /// The nine digits in ascending order; the scan order every detector
    /// uses when it walks digits.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Wraps a raw value already known to lie in 1-9.
    ///
    /// # Panics
    ///
    /// Panics when `value` is outside 1-9. Go through the `TryFrom<u8>`
    /// impl instead when the value needs checking.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(1 <= value && value <= 9, "a Sudoku digit must be 1-9");
        Self::ALL[(value - 1) as usize]
    }

    /// Returns the numeric value, 1-9.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Error produced when a raw value is not a Sudoku digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{value} is not a Sudoku digit (expected 1-9)")]
pub struct DigitOutOfRange {
    /// The rejected value.
    pub value: u8,
}

impl TryFrom<u8> for Digit {
    type Error = DigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=9).contains(&value) {
            Ok(Self::new(value))
        } else {
            Err(DigitOutOfRange { value })
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agrees_with_value() {
        for digit in Digit::ALL {
            assert_eq!(Digit::new(digit.value()), digit);
        }
        assert_eq!(Digit::new(1), Digit::D1);
        assert_eq!(Digit::new(9), Digit::D9);
    }

    #[test]
    fn test_all_is_ascending() {
        for window in Digit::ALL.windows(2) {
            assert!(window[0].value() + 1 == window[1].value());
        }
    }

    #[test]
    fn test_try_from_checks_the_range() {
        assert_eq!(Digit::try_from(4), Ok(Digit::D4));
        assert_eq!(Digit::try_from(0), Err(DigitOutOfRange { value: 0 }));
        assert_eq!(Digit::try_from(10), Err(DigitOutOfRange { value: 10 }));
        assert_eq!(
            DigitOutOfRange { value: 12 }.to_string(),
            "12 is not a Sudoku digit (expected 1-9)"
        );
    }

    #[test]
    fn test_display_is_the_bare_value() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D9.to_string(), "9");
    }

    #[test]
    #[should_panic(expected = "a Sudoku digit must be 1-9")]
    fn test_new_rejects_zero() {
        let _ = Digit::new(0);
    }
}
