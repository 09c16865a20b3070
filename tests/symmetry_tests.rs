/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::symmetry::tables::{HALL_TO_HM, HALL_TO_NUMBER, HM_TO_HALL, NUMBER_TO_HALL};
use abacuskit_rs::symmetry::{
    hall_from_hm, hall_from_number, hall_symbols_for_number, hm_from_hall, hm_variants_for_hall,
    number_from_hall, SymmetryError, Table,
};
use std::collections::HashSet;

#[test]
fn test_hall_from_hm_returns_catalogued_values() {
    for &(hm, hall) in HM_TO_HALL {
        assert_eq!(hall_from_hm(hm), Ok(hall), "HM symbol {}", hm);
        // Repeated lookups return the same value
        assert_eq!(hall_from_hm(hm), hall_from_hm(hm));
    }
}

#[test]
fn test_hm_spelling_variants() {
    assert_eq!(hall_from_hm("P21/c"), Ok("-P 2ybc"));
    assert_eq!(hall_from_hm("P121/c1"), Ok("-P 2ybc"));
    assert_eq!(hall_from_hm("Pmmm"), Ok("-P 2 2"));
    assert_eq!(hall_from_hm("R3:H"), Ok("R 3"));
    assert_eq!(hall_from_hm("R3:R"), Ok("P 3*"));
}

#[test]
fn test_hm_lookup_is_exact() {
    for key in ["P 21/c", "p21/c", "P21/c ", ""] {
        assert_eq!(
            hall_from_hm(key),
            Err(SymmetryError::NotFound {
                table: Table::HmToHall,
                key: key.to_string()
            })
        );
    }
}

#[test]
fn test_unknown_hall_sentinel() {
    assert_eq!(number_from_hall("Unknown"), Ok(0));
    assert_eq!(hm_from_hall("Unknown"), Ok("Unknown"));

    let err = number_from_hall("not a real symbol").unwrap_err();
    assert!(err.is_not_found());
    assert_ne!(number_from_hall("not a real symbol"), Ok(0));
}

#[test]
fn test_number_to_hall_round_trip() {
    for &(number, hall) in NUMBER_TO_HALL {
        assert_eq!(number_from_hall(hall), Ok(number), "Hall symbol {}", hall);
        assert_eq!(hall_from_number(number), Ok(hall));
    }
}

#[test]
fn test_unambiguous_and_ambiguous_numbers() {
    assert_eq!(hall_from_number(47), Ok("-P 2 2"));
    assert_eq!(hall_from_number(225), Ok("-F 4 2 3"));

    match hall_from_number(48) {
        Err(SymmetryError::Ambiguous { number, candidates }) => {
            assert_eq!(number, 48);
            assert_eq!(candidates, vec!["P 2 2 -1n", "-P 2ab 2bc"]);
        }
        other => panic!("expected space group 48 to be ambiguous, got {:?}", other),
    }

    let err = hall_from_number(14).unwrap_err();
    assert!(err.is_ambiguous());
    assert!(!err.is_not_found());
}

#[test]
fn test_every_number_resolves_or_is_ambiguous() {
    let canonical: HashSet<u16> = NUMBER_TO_HALL.iter().map(|&(n, _)| n).collect();
    let mut ambiguous = 0;
    for number in 1..=230u16 {
        match hall_from_number(number) {
            Ok(_) => assert!(canonical.contains(&number)),
            Err(SymmetryError::Ambiguous { candidates, .. }) => {
                ambiguous += 1;
                assert!(!canonical.contains(&number));
                assert!(candidates.len() > 1, "space group {}", number);
            }
            Err(other) => panic!("space group {}: {}", number, other),
        }
    }
    assert_eq!(ambiguous + canonical.len(), 230);
}

#[test]
fn test_number_out_of_range() {
    assert_eq!(hall_from_number(0), Err(SymmetryError::OutOfRange(0)));
    assert_eq!(hall_from_number(231), Err(SymmetryError::OutOfRange(231)));
    assert_eq!(hall_symbols_for_number(0), Err(SymmetryError::OutOfRange(0)));
}

#[test]
fn test_hall_symbols_for_number() {
    assert_eq!(hall_symbols_for_number(3), Ok(&["P 2y", "P 2", "P 2x"][..]));
    assert_eq!(hall_symbols_for_number(146), Ok(&["R 3", "P 3*"][..]));

    let total: usize = (1..=230u16)
        .map(|n| hall_symbols_for_number(n).unwrap().len())
        .sum();
    // Every Hall symbol except the "Unknown" sentinel
    assert_eq!(total, HALL_TO_NUMBER.len() - 1);
}

#[test]
fn test_hm_variants_for_hall() {
    let variants = hm_variants_for_hall("P 2y");
    assert_eq!(variants, &["P2", "P2:b", "P2b", "P121"]);
    assert!(hm_variants_for_hall("Unknown").is_empty());
}

#[test]
fn test_hall_to_hm_suffixes() {
    assert_eq!(hm_from_hall("-P 2ybc"), Ok("P121/c1"));
    assert_eq!(hm_from_hall("P 2 2 -1n"), Ok("Pnnn:1"));
    assert_eq!(hm_from_hall("-P 2ab 2bc"), Ok("Pnnn:2"));
    assert_eq!(hm_from_hall("-R 3 2\""), Ok("R-3m:H"));
    assert_eq!(hm_from_hall("-P 3* 2"), Ok("R-3m:R"));
    assert!(hm_from_hall("-P 2ybc ").unwrap_err().is_not_found());
}

#[test]
fn test_number_and_hm_tables_share_keys() {
    let numbered: HashSet<&str> = HALL_TO_NUMBER.iter().map(|&(hall, _)| hall).collect();
    let named: HashSet<&str> = HALL_TO_HM.iter().map(|&(hall, _)| hall).collect();
    assert_eq!(numbered, named);
}
