/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::atoms::{
    atomic_number, bond_cutoff, bond_cutoffs, cutoffs_for_atomic_number, element_symbol,
    is_bonded, neighbor_shell, non_monotonic_elements, AtomError, BOND_DISTANCES,
};
use approx::assert_relative_eq;
use rstest::rstest;

#[test]
fn test_every_element_has_positive_cutoffs() {
    for &(symbol, cutoffs) in BOND_DISTANCES {
        assert!(!cutoffs.is_empty(), "{} has no cutoffs", symbol);
        assert!(cutoffs.iter().all(|&c| c > 0.0), "{}", symbol);
        assert!(atomic_number(symbol).is_some(), "{} is not an element", symbol);
    }
}

#[test]
fn test_cutoffs_are_increasing() {
    let irregular = non_monotonic_elements();
    assert_eq!(irregular, vec!["Sn"]);

    for &(symbol, cutoffs) in BOND_DISTANCES {
        if irregular.contains(&symbol) {
            continue;
        }
        for pair in cutoffs.windows(2) {
            assert!(pair[0] < pair[1], "{}: {:?}", symbol, cutoffs);
        }
    }
}

#[test]
fn test_hydrogen() {
    let cutoffs = bond_cutoffs("H").unwrap();
    assert_eq!(cutoffs.len(), 5);
    assert_relative_eq!(cutoffs[0], 0.6);
    assert_relative_eq!(cutoffs[4], 1.5);
}

#[rstest]
#[case("Fe", 1.4, Some(0))]
#[case("Fe", 1.45, Some(0))]
#[case("Fe", 2.0, Some(2))]
#[case("Fe", 4.0, Some(4))]
#[case("Fe", 4.01, None)]
#[case("Li", 4.1, Some(6))]
fn test_neighbor_shell(#[case] symbol: &str, #[case] distance: f64, #[case] shell: Option<usize>) {
    assert_eq!(neighbor_shell(symbol, distance), Ok(shell));
}

#[test]
fn test_is_bonded_uses_larger_cutoff() {
    // O-H: O cutoff 1.0 Å, H cutoff 0.6 Å
    assert_eq!(is_bonded("O", "H", 0.97), Ok(true));
    assert_eq!(is_bonded("H", "O", 0.97), Ok(true));
    assert_eq!(is_bonded("H", "H", 0.74), Ok(false));
    assert_eq!(is_bonded("Si", "O", 1.61), Ok(true));
    assert_eq!(is_bonded("Si", "Si", 2.35), Ok(false));
    assert_eq!(is_bonded("Si", "O", -0.5), Err(AtomError::InvalidDistance(-0.5)));
}

#[test]
fn test_lookup_by_atomic_number() {
    assert_eq!(cutoffs_for_atomic_number(26), bond_cutoffs("Fe"));
    assert_eq!(
        cutoffs_for_atomic_number(103),
        Err(AtomError::NoCutoffs("Lr".to_string()))
    );
    assert_eq!(
        cutoffs_for_atomic_number(0),
        Err(AtomError::InvalidAtomicNumber(0))
    );
    assert_eq!(element_symbol(102), Some("No"));
}

#[test]
fn test_symbols_are_case_sensitive() {
    assert!(bond_cutoffs("Co").is_ok());
    assert_eq!(
        bond_cutoffs("CO"),
        Err(AtomError::UnknownElement("CO".to_string()))
    );
    assert_eq!(
        bond_cutoff("O", 5),
        Err(AtomError::ShellOutOfRange {
            element: "O".to_string(),
            shell: 5,
            available: 5
        })
    );
}
