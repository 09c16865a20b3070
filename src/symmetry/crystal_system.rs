/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Crystal systems and the space-group numbers that belong to them
//!
//! The seven crystal systems partition the space-group numbers 1..=230 into
//! contiguous ranges.

use super::errors::{check_number, Result, SymmetryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// A crystal system, as defined in the International Tables for Crystallography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

/// Error returned when parsing an unrecognised crystal system name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown crystal system: {0}")]
pub struct UnknownCrystalSystem(pub String);

impl CrystalSystem {
    /// All crystal systems in order of increasing space-group number
    pub const ALL: [CrystalSystem; 7] = [
        CrystalSystem::Triclinic,
        CrystalSystem::Monoclinic,
        CrystalSystem::Orthorhombic,
        CrystalSystem::Tetragonal,
        CrystalSystem::Trigonal,
        CrystalSystem::Hexagonal,
        CrystalSystem::Cubic,
    ];

    /// Lower-case name of the crystal system
    pub fn name(&self) -> &'static str {
        match self {
            CrystalSystem::Triclinic => "triclinic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Cubic => "cubic",
        }
    }

    /// Half-open range of space-group numbers in this crystal system
    pub fn numbers(&self) -> Range<u16> {
        match self {
            CrystalSystem::Triclinic => 1..3,
            CrystalSystem::Monoclinic => 3..16,
            CrystalSystem::Orthorhombic => 16..75,
            CrystalSystem::Tetragonal => 75..143,
            CrystalSystem::Trigonal => 143..168,
            CrystalSystem::Hexagonal => 168..195,
            CrystalSystem::Cubic => 195..231,
        }
    }

    /// Crystal system of a space-group number
    pub fn from_number(number: u16) -> Result<Self> {
        let number = check_number(number)?;
        Self::ALL
            .into_iter()
            .find(|system| system.numbers().contains(&number))
            .ok_or(SymmetryError::OutOfRange(number))
    }

    /// Crystal family: trigonal groups belong to the hexagonal family
    pub fn family(&self) -> Self {
        match *self {
            CrystalSystem::Trigonal => CrystalSystem::Hexagonal,
            other => other,
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrystalSystem {
    type Err = UnknownCrystalSystem;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|system| system.name() == lower)
            .ok_or_else(|| UnknownCrystalSystem(s.to_string()))
    }
}

/// Crystal system of a space-group number, `OutOfRange` outside 1..=230
pub fn crystal_system_from_number(number: u16) -> Result<CrystalSystem> {
    CrystalSystem::from_number(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_partition_all_numbers() {
        let mut expected_start = 1;
        for system in CrystalSystem::ALL {
            let range = system.numbers();
            assert_eq!(range.start, expected_start, "gap before {}", system);
            assert!(range.end > range.start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, 231);
    }

    #[test]
    fn test_every_number_has_one_system() {
        for number in 1..=230u16 {
            let owners = CrystalSystem::ALL
                .iter()
                .filter(|system| system.numbers().contains(&number))
                .count();
            assert_eq!(owners, 1, "space group {}", number);
            assert!(CrystalSystem::from_number(number).is_ok());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cubic".parse::<CrystalSystem>(), Ok(CrystalSystem::Cubic));
        assert_eq!(" Trigonal ".parse::<CrystalSystem>(), Ok(CrystalSystem::Trigonal));
        assert!("rhombic".parse::<CrystalSystem>().is_err());
        for system in CrystalSystem::ALL {
            assert_eq!(system.to_string().parse::<CrystalSystem>(), Ok(system));
        }
    }

    #[test]
    fn test_family() {
        assert_eq!(CrystalSystem::Trigonal.family(), CrystalSystem::Hexagonal);
        assert_eq!(CrystalSystem::Cubic.family(), CrystalSystem::Cubic);
    }
}
