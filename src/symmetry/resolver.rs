/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Space-group symbol resolution
//!
//! Lookups are exact: symbols are matched verbatim against the catalogued
//! spellings, with no whitespace or case normalisation. Misses and ambiguous
//! numbers are reported as [`SymmetryError`] values so that callers can tell
//! an unknown spelling from a number that needs an explicit setting.

use super::errors::{check_number, Result, SymmetryError, Table};
use super::tables::{HALL_TO_HM, HALL_TO_NUMBER, HM_TO_HALL, NUMBER_TO_HALL};
use crate::config::{ResolverConfig, SettingPolicy};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Hall symbol used for unresolved structures
pub const UNKNOWN_HALL: &str = "Unknown";

/// Hash indices over the static tables, built on first use
struct Indices {
    hm_to_hall: HashMap<&'static str, &'static str>,
    hall_to_number: HashMap<&'static str, u16>,
    number_to_hall: HashMap<u16, &'static str>,
    hall_to_hm: HashMap<&'static str, &'static str>,
    // Reverse views keep table order
    halls_by_number: HashMap<u16, Vec<&'static str>>,
    hms_by_hall: HashMap<&'static str, Vec<&'static str>>,
}

impl Indices {
    fn build() -> Self {
        let mut halls_by_number: HashMap<u16, Vec<&'static str>> = HashMap::new();
        for &(hall, number) in HALL_TO_NUMBER {
            halls_by_number.entry(number).or_default().push(hall);
        }

        let mut hms_by_hall: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for &(hm, hall) in HM_TO_HALL {
            hms_by_hall.entry(hall).or_default().push(hm);
        }

        Self {
            hm_to_hall: HM_TO_HALL.iter().copied().collect(),
            hall_to_number: HALL_TO_NUMBER.iter().copied().collect(),
            number_to_hall: NUMBER_TO_HALL.iter().copied().collect(),
            hall_to_hm: HALL_TO_HM.iter().copied().collect(),
            halls_by_number,
            hms_by_hall,
        }
    }
}

static INDICES: Lazy<Indices> = Lazy::new(Indices::build);

fn indices() -> &'static Indices {
    &INDICES
}

/// Hall symbol for a Hermann-Mauguin symbol
///
/// Every catalogued spelling is a separate key: `"P21/c"`, `"P121/c1"` and
/// `"P1121/c"` are all accepted, `"P 21/c"` is not.
pub fn hall_from_hm(hm: &str) -> Result<&'static str> {
    indices().hm_to_hall.get(hm).copied().ok_or_else(|| {
        debug!("no Hall symbol catalogued for HM symbol '{}'", hm);
        SymmetryError::not_found(Table::HmToHall, hm)
    })
}

/// Space-group number for a Hall symbol
///
/// `"Unknown"` resolves to 0.
pub fn number_from_hall(hall: &str) -> Result<u16> {
    indices().hall_to_number.get(hall).copied().ok_or_else(|| {
        debug!("no space-group number catalogued for Hall symbol '{}'", hall);
        SymmetryError::not_found(Table::HallToNumber, hall)
    })
}

/// The catalogued copy of a Hall symbol known to the number table
pub fn catalogued_hall(hall: &str) -> Result<&'static str> {
    indices()
        .hall_to_number
        .get_key_value(hall)
        .map(|(&key, _)| key)
        .ok_or_else(|| SymmetryError::not_found(Table::HallToNumber, hall))
}

/// Canonical Hall symbol for a space-group number
///
/// Numbers with more than one conventional setting are reported as
/// [`SymmetryError::Ambiguous`], carrying every Hall symbol of that number.
/// Use [`Resolver`] to pick one of them by policy.
pub fn hall_from_number(number: u16) -> Result<&'static str> {
    let number = check_number(number)?;
    let idx = indices();
    if let Some(&hall) = idx.number_to_hall.get(&number) {
        return Ok(hall);
    }
    Err(SymmetryError::Ambiguous {
        number,
        candidates: idx
            .halls_by_number
            .get(&number)
            .cloned()
            .unwrap_or_default(),
    })
}

/// Canonical Hermann-Mauguin symbol for a Hall symbol
///
/// The result may carry an origin choice (`:1`, `:2`) or axis (`:H`, `:R`)
/// suffix.
pub fn hm_from_hall(hall: &str) -> Result<&'static str> {
    indices().hall_to_hm.get(hall).copied().ok_or_else(|| {
        debug!("no HM symbol catalogued for Hall symbol '{}'", hall);
        SymmetryError::not_found(Table::HallToHm, hall)
    })
}

/// Every Hall symbol of a space-group number, in table order
pub fn hall_symbols_for_number(number: u16) -> Result<&'static [&'static str]> {
    let number = check_number(number)?;
    Ok(indices()
        .halls_by_number
        .get(&number)
        .map(Vec::as_slice)
        .unwrap_or(&[]))
}

/// Every catalogued Hermann-Mauguin spelling that maps to a Hall symbol
///
/// Empty when the Hall symbol is not a target of the HM table.
pub fn hm_variants_for_hall(hall: &str) -> &'static [&'static str] {
    indices()
        .hms_by_hall
        .get(hall)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Suffix after the last `:` of an HM symbol, if any
fn setting_suffix(hm: &str) -> Option<&str> {
    hm.rsplit_once(':').map(|(_, suffix)| suffix)
}

/// Space-group resolver with a setting policy for ambiguous numbers
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Resolver that reports every ambiguous number
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver using the given configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn hall_from_hm(&self, hm: &str) -> Result<&'static str> {
        hall_from_hm(hm)
    }

    pub fn number_from_hall(&self, hall: &str) -> Result<u16> {
        number_from_hall(hall)
    }

    pub fn hm_from_hall(&self, hall: &str) -> Result<&'static str> {
        hm_from_hall(hall)
    }

    /// Hall symbol for a number, applying the setting policy when ambiguous
    pub fn hall_from_number(&self, number: u16) -> Result<&'static str> {
        match hall_from_number(number) {
            Err(SymmetryError::Ambiguous { number, candidates }) => {
                self.choose_setting(number, candidates)
            }
            other => other,
        }
    }

    /// Canonical HM symbol for a number, applying the setting policy
    pub fn hm_from_number(&self, number: u16) -> Result<&'static str> {
        let hall = self.hall_from_number(number)?;
        hm_from_hall(hall).map_err(SymmetryError::into_inconsistent)
    }

    fn choose_setting(&self, number: u16, candidates: Vec<&'static str>) -> Result<&'static str> {
        let first = match candidates.first() {
            Some(&first) => first,
            None => return Err(SymmetryError::Ambiguous { number, candidates }),
        };

        let chosen = match self.config.setting_policy {
            SettingPolicy::Strict => {
                return Err(SymmetryError::Ambiguous { number, candidates });
            }
            SettingPolicy::FirstListed => first,
            SettingPolicy::Preferred { origin, axes } => candidates
                .iter()
                .copied()
                .find(|hall| {
                    hm_from_hall(hall)
                        .ok()
                        .and_then(setting_suffix)
                        .is_some_and(|suffix| suffix == origin.suffix() || suffix == axes.suffix())
                })
                .unwrap_or(first),
        };

        debug!(
            "space group {} resolved to '{}' by {:?} policy",
            number, chosen, self.config.setting_policy
        );
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AxisSetting, OriginChoice};

    #[test]
    fn test_indices_have_no_lost_keys() {
        let idx = indices();
        assert_eq!(idx.hm_to_hall.len(), HM_TO_HALL.len());
        assert_eq!(idx.hall_to_number.len(), HALL_TO_NUMBER.len());
        assert_eq!(idx.number_to_hall.len(), NUMBER_TO_HALL.len());
        assert_eq!(idx.hall_to_hm.len(), HALL_TO_HM.len());
    }

    #[test]
    fn test_setting_suffix() {
        assert_eq!(setting_suffix("Pnnn:2"), Some("2"));
        assert_eq!(setting_suffix("R3:H"), Some("H"));
        assert_eq!(setting_suffix("P121"), None);
    }

    #[test]
    fn test_preferred_policy() {
        let resolver = Resolver::with_config(ResolverConfig::with_policy(SettingPolicy::Preferred {
            origin: OriginChoice::Two,
            axes: AxisSetting::Rhombohedral,
        }));

        assert_eq!(resolver.hm_from_number(48), Ok("Pnnn:2"));
        assert_eq!(resolver.hm_from_number(146), Ok("R3:R"));
        // Monoclinic settings carry no suffix
        assert_eq!(resolver.hall_from_number(14), Ok("-P 2ybc"));
        // Unambiguous numbers bypass the policy
        assert_eq!(resolver.hall_from_number(47), Ok("-P 2 2"));
    }

    #[test]
    fn test_strict_policy_reports_candidates() {
        let resolver = Resolver::new();
        match resolver.hall_from_number(146) {
            Err(SymmetryError::Ambiguous { number, candidates }) => {
                assert_eq!(number, 146);
                assert_eq!(candidates, vec!["R 3", "P 3*"]);
            }
            other => panic!("expected ambiguous result, got {:?}", other),
        }
    }
}
