/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Error types for the symmetry module

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Smallest valid space-group number
pub const MIN_SPACE_GROUP: u16 = 1;

/// Largest valid space-group number
pub const MAX_SPACE_GROUP: u16 = 230;

/// The lookup tables a symbol can be resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Table {
    HmToHall,
    HallToNumber,
    NumberToHall,
    HallToHm,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::HmToHall => "Hermann-Mauguin to Hall",
            Table::HallToNumber => "Hall to number",
            Table::NumberToHall => "number to Hall",
            Table::HallToHm => "Hall to Hermann-Mauguin",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while resolving space-group symbols
///
/// `NotFound` and `Ambiguous` are ordinary outcomes of a lookup and callers
/// are expected to branch on them. `Inconsistent` means one table produced a
/// key that another table does not know, i.e. a defect in the data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymmetryError {
    #[error("'{key}' not found in the {table} table")]
    NotFound { table: Table, key: String },

    #[error(
        "space group {number} has {} conventional settings: {}",
        .candidates.len(),
        .candidates.join(", ")
    )]
    Ambiguous {
        number: u16,
        candidates: Vec<&'static str>,
    },

    #[error("space group number {0} is outside 1..=230")]
    OutOfRange(u16),

    #[error("table inconsistency: '{key}' is missing from the {table} table")]
    Inconsistent { table: Table, key: String },
}

impl SymmetryError {
    pub(crate) fn not_found(table: Table, key: &str) -> Self {
        SymmetryError::NotFound {
            table,
            key: key.to_string(),
        }
    }

    /// Reclassify a lookup miss on a key produced by another table.
    ///
    /// Other variants pass through unchanged.
    pub fn into_inconsistent(self) -> Self {
        match self {
            SymmetryError::NotFound { table, key } => SymmetryError::Inconsistent { table, key },
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SymmetryError::NotFound { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, SymmetryError::Ambiguous { .. })
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(self, SymmetryError::Inconsistent { .. })
    }
}

/// Check that a space-group number lies in 1..=230
pub fn check_number(number: u16) -> Result<u16> {
    if (MIN_SPACE_GROUP..=MAX_SPACE_GROUP).contains(&number) {
        Ok(number)
    } else {
        Err(SymmetryError::OutOfRange(number))
    }
}

/// Result type for symmetry lookups
pub type Result<T> = std::result::Result<T, SymmetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inconsistent() {
        let miss = SymmetryError::not_found(Table::HallToNumber, "X 1");
        assert!(miss.is_not_found());

        let escalated = miss.into_inconsistent();
        assert!(escalated.is_inconsistent());
        assert_eq!(
            escalated,
            SymmetryError::Inconsistent {
                table: Table::HallToNumber,
                key: "X 1".to_string()
            }
        );

        let range = SymmetryError::OutOfRange(231).into_inconsistent();
        assert_eq!(range, SymmetryError::OutOfRange(231));
    }

    #[test]
    fn test_error_messages() {
        let err = SymmetryError::Ambiguous {
            number: 48,
            candidates: vec!["P 2 2 -1n", "-P 2ab 2bc"],
        };
        assert_eq!(
            err.to_string(),
            "space group 48 has 2 conventional settings: P 2 2 -1n, -P 2ab 2bc"
        );
        assert_eq!(
            SymmetryError::OutOfRange(0).to_string(),
            "space group number 0 is outside 1..=230"
        );
    }

    #[test]
    fn test_check_number() {
        assert_eq!(check_number(1), Ok(1));
        assert_eq!(check_number(230), Ok(230));
        assert_eq!(check_number(0), Err(SymmetryError::OutOfRange(0)));
        assert_eq!(check_number(231), Err(SymmetryError::OutOfRange(231)));
    }
}
