/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Cross-table consistency checks
//!
//! Every Hall symbol reachable from the HM table should be known to the
//! number and HM tables, every canonical number entry should round-trip, and
//! every canonical HM symbol should map back to its own Hall symbol. The
//! checks report what the shipped data actually contains; they never repair it.

use super::resolver::{self, UNKNOWN_HALL};
use super::tables::{HALL_TO_HM, HM_TO_HALL, NUMBER_TO_HALL};
use log::warn;
use serde::Serialize;
use std::fmt;

/// A defect found by [`check_tables`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableIssue {
    /// An HM spelling maps to a Hall symbol without a space-group number
    MissingNumber { hm: &'static str, hall: &'static str },
    /// An HM spelling maps to a Hall symbol without a canonical HM symbol
    MissingHm { hm: &'static str, hall: &'static str },
    /// A canonical number entry does not resolve back to its number
    NumberRoundTrip {
        number: u16,
        hall: &'static str,
        resolved: Option<u16>,
    },
    /// A canonical HM symbol is not a key of the HM table
    UncataloguedHm { hall: &'static str, hm: &'static str },
    /// A canonical HM symbol maps back to a different Hall symbol
    HmRoundTrip {
        hall: &'static str,
        hm: &'static str,
        resolved: &'static str,
    },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::MissingNumber { hm, hall } => {
                write!(f, "{} -> '{}' has no space-group number", hm, hall)
            }
            TableIssue::MissingHm { hm, hall } => {
                write!(f, "{} -> '{}' has no canonical HM symbol", hm, hall)
            }
            TableIssue::NumberRoundTrip {
                number,
                hall,
                resolved,
            } => match resolved {
                Some(other) => write!(f, "{} -> '{}' resolves back to {}", number, hall, other),
                None => write!(f, "{} -> '{}' has no space-group number", number, hall),
            },
            TableIssue::UncataloguedHm { hall, hm } => {
                write!(f, "'{}' -> {} is not a catalogued HM symbol", hall, hm)
            }
            TableIssue::HmRoundTrip { hall, hm, resolved } => write!(
                f,
                "'{}' -> {} resolves back to '{}'",
                hall, hm, resolved
            ),
        }
    }
}

/// Run every cross-table check and log each issue found
pub fn check_tables() -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for &(hm, hall) in HM_TO_HALL {
        if resolver::number_from_hall(hall).is_err() {
            issues.push(TableIssue::MissingNumber { hm, hall });
        }
        if resolver::hm_from_hall(hall).is_err() {
            issues.push(TableIssue::MissingHm { hm, hall });
        }
    }

    for &(number, hall) in NUMBER_TO_HALL {
        let resolved = resolver::number_from_hall(hall).ok();
        if resolved != Some(number) {
            issues.push(TableIssue::NumberRoundTrip {
                number,
                hall,
                resolved,
            });
        }
    }

    for &(hall, hm) in HALL_TO_HM {
        if hall == UNKNOWN_HALL {
            continue;
        }
        match resolver::hall_from_hm(hm) {
            Ok(resolved) if resolved != hall => {
                issues.push(TableIssue::HmRoundTrip { hall, hm, resolved })
            }
            Ok(_) => {}
            Err(_) => issues.push(TableIssue::UncataloguedHm { hall, hm }),
        }
    }

    for issue in &issues {
        warn!("symmetry table issue: {}", issue);
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = TableIssue::MissingNumber {
            hm: "R3mHR",
            hall: "T 3 -2\"",
        };
        assert_eq!(issue.to_string(), "R3mHR -> 'T 3 -2\"' has no space-group number");
    }

    #[test]
    fn test_numbers_round_trip() {
        let issues = check_tables();
        assert!(!issues
            .iter()
            .any(|issue| matches!(issue, TableIssue::NumberRoundTrip { .. })));
    }
}
