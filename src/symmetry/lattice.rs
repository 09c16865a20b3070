/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Lattice centering types
//!
//! The first letter of a Hermann-Mauguin symbol (and of a Hall symbol, after
//! an optional leading `-`) names the centering of the conventional cell.

use serde::Serialize;
use std::fmt;

/// Lattice centering of a conventional cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Centering {
    P,
    I,
    F,
    A,
    B,
    C,
    R,
}

impl Centering {
    pub const ALL: [Centering; 7] = [
        Centering::P,
        Centering::I,
        Centering::F,
        Centering::A,
        Centering::B,
        Centering::C,
        Centering::R,
    ];

    /// Gets the letter for the symbol.
    pub fn letter(&self) -> char {
        match self {
            Centering::P => 'P',
            Centering::I => 'I',
            Centering::F => 'F',
            Centering::A => 'A',
            Centering::B => 'B',
            Centering::C => 'C',
            Centering::R => 'R',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Centering::P => "primitive",
            Centering::I => "body centering",
            Centering::F => "face centering",
            Centering::A | Centering::B | Centering::C => "single face centering",
            Centering::R => "rhombohedral centering",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }

    /// Centering named by an HM or Hall symbol
    ///
    /// Returns `None` for empty symbols and for Hall-only centerings such as
    /// `S` and `T`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        symbol
            .trim_start_matches('-')
            .chars()
            .next()
            .and_then(Self::from_letter)
    }

    /// Whether reflection (h, k, l) satisfies the integral reflection condition
    ///
    /// Rhombohedral centering uses the obverse setting on hexagonal axes.
    pub fn reflection_allowed(&self, h: i32, k: i32, l: i32) -> bool {
        match self {
            Centering::P => true,
            Centering::I => (h + k + l).rem_euclid(2) == 0,
            Centering::F => {
                let parity = [h, k, l].map(|i| i.rem_euclid(2));
                parity.iter().all(|&p| p == parity[0])
            }
            Centering::A => (k + l).rem_euclid(2) == 0,
            Centering::B => (h + l).rem_euclid(2) == 0,
            Centering::C => (h + k).rem_euclid(2) == 0,
            Centering::R => (-h + k + l).rem_euclid(3) == 0,
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Centering::from_symbol("P21/c"), Some(Centering::P));
        assert_eq!(Centering::from_symbol("-F 4 2 3"), Some(Centering::F));
        assert_eq!(Centering::from_symbol("R3:H"), Some(Centering::R));
        assert_eq!(Centering::from_symbol("T 3 -2\""), None);
        assert_eq!(Centering::from_symbol(""), None);
    }

    #[test]
    fn test_reflection_conditions() {
        assert!(Centering::I.reflection_allowed(1, 1, 0));
        assert!(!Centering::I.reflection_allowed(1, 0, 0));

        assert!(Centering::F.reflection_allowed(1, 1, 1));
        assert!(Centering::F.reflection_allowed(2, 0, 0));
        assert!(!Centering::F.reflection_allowed(1, 1, 0));
        assert!(Centering::F.reflection_allowed(-1, 1, 3));

        assert!(Centering::C.reflection_allowed(1, 1, 5));
        assert!(!Centering::C.reflection_allowed(1, 0, 5));

        assert!(Centering::R.reflection_allowed(1, 0, 1));
        assert!(!Centering::R.reflection_allowed(1, 0, 0));
        assert!(Centering::R.reflection_allowed(0, 0, 3));

        assert!(Centering::P.reflection_allowed(1, 0, 0));
    }
}
