/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Empirical bonding distances
//!
//! For each element, an ascending list of distance thresholds in Ångström.
//! The first threshold is the bonding cutoff used when drawing bonds; the
//! later ones bound successive neighbour shells.

use super::database;
use super::errors::{AtomError, Result};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Neighbour-shell distance thresholds (Å) per element, H through No
pub static BOND_DISTANCES: &[(&str, &[f64])] = &[
    ("H", &[0.6, 0.75, 0.9, 1.2, 1.5]),
    ("He", &[1.25, 1.75, 2.4, 3.25]),
    ("Li", &[1.5, 2.1, 2.5, 2.8, 3.2, 3.5, 4.2]),
    ("Be", &[1.75, 2.0, 2.375, 3.0, 4.0]),
    ("B", &[1.25, 1.625, 2.5, 3.5]),
    ("C", &[1.0, 1.25, 1.5, 2.0, 3.0]),
    ("N", &[1.0, 1.1, 1.5, 2.0, 3.0]),
    ("O", &[1.0, 1.208, 1.5, 2.0, 3.0]),
    ("F", &[1.2, 1.418, 1.75, 2.25, 3.25]),
    ("Ne", &[1.5, 1.75, 2.25, 2.625, 3.0, 3.5]),
    ("Na", &[2.05, 2.4, 2.8, 3.1, 3.3, 3.8, 4.3]),
    ("Mg", &[2.125, 2.375, 2.875, 3.375, 4.5]),
    ("Al", &[2.0, 2.5, 3.0, 3.75, 4.5]),
    ("Si", &[1.75, 2.0, 2.25, 2.75, 3.75]),
    ("P", &[1.625, 1.875, 2.5, 3.25, 4.0]),
    ("S", &[1.6, 1.9, 2.5, 3.25, 4.0]),
    ("Cl", &[1.65, 2.0, 2.5, 3.25, 4.0]),
    ("Ar", &[2.25, 2.625, 3.0, 3.375, 4.0]),
    ("K", &[1.8, 2.6, 3.4, 3.8, 4.0, 4.4, 4.8]),
    ("Ca", &[2.5, 3.0, 3.5, 4.0, 5.0]),
    ("Sc", &[1.75, 2.15, 2.75, 3.5, 4.5]),
    ("Ti", &[1.6, 1.85, 2.5, 3.25, 4.25]),
    ("V", &[1.45, 1.65, 2.25, 3.0, 4.0]),
    ("Cr", &[1.375, 1.55, 2.0, 2.75, 3.75]),
    ("Mn", &[1.4, 1.6, 2.1, 2.75, 3.75]),
    ("Fe", &[1.45, 1.725, 2.25, 3.0, 4.0]),
    ("Co", &[1.8, 2.0, 2.5, 3.5]),
    ("Ni", &[1.65, 2.0, 2.5, 3.0, 4.0]),
    ("Cu", &[1.8, 2.2, 3.0, 4.0]),
    ("Zn", &[2.0, 2.3, 2.85, 3.5, 4.25]),
    ("Ga", &[1.85, 2.1, 2.45, 3.0, 4.0]),
    ("Ge", &[1.8, 2.0, 2.35, 3.0, 4.0]),
    ("As", &[1.75, 2.1, 2.5, 3.0, 4.0]),
    ("Se", &[1.85, 2.15, 2.5, 3.0, 4.0]),
    ("Br", &[1.9, 2.25, 2.75, 3.25, 4.0]),
    ("Kr", &[2.4, 3.0, 3.675, 4.25, 5.0]),
    ("Rb", &[2.45, 3.0, 4.0, 5.0]),
    ("Sr", &[2.75, 3.5, 4.4, 5.0]),
    ("Y", &[2.125, 2.5, 2.875, 3.25, 4.0, 5.0]),
    ("Zr", &[1.9, 2.25, 3.0, 4.0]),
    ("Nb", &[1.75, 2.05, 2.4, 3.0, 4.0]),
    ("Mo", &[1.675, 1.9, 2.375, 3.0, 4.0]),
    ("Tc", &[1.7, 1.915, 2.375, 3.0, 4.0]),
    ("Ru", &[1.725, 1.925, 2.375, 3.0, 4.0]),
    ("Rh", &[1.8, 2.1, 2.5, 3.0, 4.0]),
    ("Pd", &[2.0, 2.275, 2.75, 3.75]),
    ("Ag", &[2.1, 2.45, 3.0, 4.0]),
    ("Cd", &[2.15, 2.5, 3.1, 4.0, 5.0]),
    ("In", &[2.15, 2.5, 3.0, 3.75, 4.75]),
    ("Sn", &[2.1, 2.4, 3.75, 3.5, 4.5]),
    ("Sb", &[2.1, 2.5, 3.0, 3.5, 4.5]),
    ("Te", &[2.15, 2.55, 3.1, 3.6, 4.5]),
    ("I", &[2.22, 2.65, 3.25, 4.25]),
    ("Xe", &[3.0, 3.5, 4.06, 4.5, 5.25]),
    ("Cs", &[2.7, 3.5, 4.5, 5.5]),
    ("Ba", &[2.65, 3.0, 3.5, 4.4, 5.5]),
    ("La", &[2.2, 2.6, 3.25, 4.0, 5.0]),
    ("Ce", &[2.0, 2.375, 2.875, 3.5, 4.5]),
    ("Pr", &[1.9, 2.25, 2.75, 3.5, 4.5]),
    ("Nd", &[1.8, 2.125, 2.625, 3.375, 4.5]),
    ("Pm", &[1.775, 2.05, 2.5, 3.25, 4.25]),
    ("Sm", &[1.775, 2.05, 2.5, 3.25, 4.25]),
    ("Eu", &[1.775, 2.075, 2.5, 3.25, 4.25]),
    ("Gd", &[1.8, 2.11, 2.625, 3.375, 4.1, 5.0]),
    ("Tb", &[1.825, 2.16, 2.625, 3.375, 4.1, 5.0]),
    ("Dy", &[1.85, 2.24, 2.625, 3.375, 4.1, 5.0]),
    ("Ho", &[1.93, 2.375, 3.0, 4.1, 5.0]),
    ("Er", &[2.025, 2.5, 3.125, 4.1, 5.0]),
    ("Tm", &[2.2, 2.625, 3.25, 4.1, 5.0]),
    ("Yb", &[2.5, 3.0, 3.5, 4.1, 5.0]),
    ("Lu", &[2.2, 2.5, 3.04, 4.0, 5.0]),
    ("Hf", &[1.975, 2.49, 3.25, 4.5]),
    ("Ta", &[1.85, 2.12, 2.625, 3.25, 4.5]),
    ("W", &[1.775, 1.99, 2.5, 3.25, 4.5]),
    ("Re", &[1.775, 2.01, 2.5, 3.25, 4.25]),
    ("Os", &[1.8, 2.04, 2.5, 3.25, 4.5]),
    ("Ir", &[1.85, 2.125, 2.5, 3.25, 4.25]),
    ("Pt", &[2.0, 2.275, 2.75, 3.75]),
    ("Au", &[2.1, 2.45, 3.0, 4.0]),
    ("Hg", &[2.225, 2.5, 3.04, 4.0, 5.0]),
    ("Tl", &[2.21, 2.6, 3.11, 3.75, 4.75]),
    ("Pb", &[2.225, 2.5, 2.88, 3.625, 4.5]),
    ("Bi", &[2.225, 2.61, 3.125, 3.75, 4.75]),
    ("Po", &[2.3, 2.72, 3.25, 3.875, 4.75]),
    ("At", &[2.375, 2.83, 3.5, 4.5]),
    ("Rn", &[2.8, 3.5, 4.17, 4.75, 5.5]),
    ("Fr", &[2.85, 3.5, 4.43, 5.5]),
    ("Ra", &[3.15, 3.5, 4.25, 5.12, 6.0]),
    ("Ac", &[2.48, 3.1, 3.72, 4.25, 5.0]),
    ("Th", &[2.25, 2.65, 3.25, 4.0, 5.0]),
    ("Pa", &[2.04, 2.3, 3.0, 3.75, 4.75]),
    ("U", &[1.89, 2.09, 2.75, 3.5, 4.5]),
    ("Np", &[1.84, 2.05, 2.625, 3.375, 4.5]),
    ("Pu", &[1.81, 2.02, 2.5, 3.25, 4.25]),
    ("Am", &[1.81, 2.03, 2.5, 3.25, 4.25]),
    ("Cm", &[1.83, 2.07, 2.5, 3.25, 4.25]),
    ("Bk", &[1.86, 2.12, 2.5, 3.0, 4.0]),
    ("Cf", &[1.89, 2.19, 2.625, 3.125, 4.0]),
    ("Es", &[1.93, 2.29, 2.625, 3.125, 4.0]),
    ("Fm", &[1.98, 2.375, 2.75, 3.25, 4.25]),
    ("Md", &[2.08, 2.5, 3.0, 3.43, 4.25]),
    ("No", &[2.6, 3.125, 3.75, 4.27, 5.0]),
];

static DISTANCE_INDEX: Lazy<HashMap<&'static str, &'static [f64]>> =
    Lazy::new(|| BOND_DISTANCES.iter().copied().collect());

/// Distance thresholds for an element symbol (case-sensitive)
pub fn bond_cutoffs(symbol: &str) -> Result<&'static [f64]> {
    if let Some(&cutoffs) = DISTANCE_INDEX.get(symbol) {
        return Ok(cutoffs);
    }
    if database::atomic_number(symbol).is_some() {
        Err(AtomError::NoCutoffs(symbol.to_string()))
    } else {
        Err(AtomError::UnknownElement(symbol.to_string()))
    }
}

/// Distance thresholds for an atomic number
pub fn cutoffs_for_atomic_number(atomic_number: i32) -> Result<&'static [f64]> {
    let symbol = database::element_symbol(atomic_number)
        .ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;
    bond_cutoffs(symbol)
}

/// Threshold of one neighbour shell (0 is the bonding cutoff)
pub fn bond_cutoff(symbol: &str, shell: usize) -> Result<f64> {
    let cutoffs = bond_cutoffs(symbol)?;
    cutoffs
        .get(shell)
        .copied()
        .ok_or_else(|| AtomError::ShellOutOfRange {
            element: symbol.to_string(),
            shell,
            available: cutoffs.len(),
        })
}

/// Index of the first shell whose threshold is not exceeded by `distance`
///
/// Returns `Ok(None)` when the distance lies beyond the last shell.
pub fn neighbor_shell(symbol: &str, distance: f64) -> Result<Option<usize>> {
    check_distance(distance)?;
    let cutoffs = bond_cutoffs(symbol)?;
    Ok(cutoffs.iter().position(|&cutoff| distance <= cutoff))
}

/// Whether two atoms at `distance` are bonded
///
/// The pair is bonded when the distance does not exceed the larger of the two
/// bonding cutoffs.
pub fn is_bonded(first: &str, second: &str, distance: f64) -> Result<bool> {
    check_distance(distance)?;
    let cutoff = bond_cutoff(first, 0)?.max(bond_cutoff(second, 0)?);
    let bonded = distance <= cutoff;
    debug!(
        "{}-{} at {:.3} Å: cutoff {:.3} Å, bonded = {}",
        first, second, distance, cutoff, bonded
    );
    Ok(bonded)
}

/// Elements whose thresholds are not in non-decreasing order
///
/// The tabulated Sn entry (`3.75` before `3.5`) is the only one in the
/// shipped data.
pub fn non_monotonic_elements() -> Vec<&'static str> {
    BOND_DISTANCES
        .iter()
        .filter(|(_, cutoffs)| cutoffs.windows(2).any(|pair| pair[1] < pair[0]))
        .map(|(symbol, _)| *symbol)
        .collect()
}

fn check_distance(distance: f64) -> Result<()> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(())
    } else {
        Err(AtomError::InvalidDistance(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hydrogen_cutoffs() {
        let cutoffs = bond_cutoffs("H").unwrap();
        assert_eq!(cutoffs, &[0.6, 0.75, 0.9, 1.2, 1.5]);
        assert_relative_eq!(bond_cutoff("H", 0).unwrap(), 0.6);
        assert_relative_eq!(bond_cutoff("H", 4).unwrap(), 1.5);
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(bond_cutoffs("Xx"), Err(AtomError::UnknownElement("Xx".to_string())));
        assert_eq!(bond_cutoffs("Lr"), Err(AtomError::NoCutoffs("Lr".to_string())));
        assert_eq!(
            bond_cutoff("He", 4),
            Err(AtomError::ShellOutOfRange {
                element: "He".to_string(),
                shell: 4,
                available: 4
            })
        );
    }

    #[test]
    fn test_neighbor_shell() {
        assert_eq!(neighbor_shell("C", 0.9).unwrap(), Some(0));
        assert_eq!(neighbor_shell("C", 1.0).unwrap(), Some(0));
        assert_eq!(neighbor_shell("C", 1.4).unwrap(), Some(2));
        assert_eq!(neighbor_shell("C", 3.5).unwrap(), None);
        assert!(neighbor_shell("C", -1.0).is_err());
        assert!(neighbor_shell("C", f64::NAN).is_err());
    }

    #[test]
    fn test_table_covers_first_102_elements() {
        assert_eq!(BOND_DISTANCES.len(), 102);
        for (z, &(symbol, _)) in BOND_DISTANCES.iter().enumerate() {
            assert_eq!(database::element_symbol(z as i32 + 1), Some(symbol));
        }
    }
}
