/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::symmetry::{crystal_system_from_number, CrystalSystem, SymmetryError};
use rstest::rstest;

#[rstest]
#[case(1, CrystalSystem::Triclinic)]
#[case(2, CrystalSystem::Triclinic)]
#[case(3, CrystalSystem::Monoclinic)]
#[case(15, CrystalSystem::Monoclinic)]
#[case(16, CrystalSystem::Orthorhombic)]
#[case(74, CrystalSystem::Orthorhombic)]
#[case(75, CrystalSystem::Tetragonal)]
#[case(142, CrystalSystem::Tetragonal)]
#[case(143, CrystalSystem::Trigonal)]
#[case(167, CrystalSystem::Trigonal)]
#[case(168, CrystalSystem::Hexagonal)]
#[case(194, CrystalSystem::Hexagonal)]
#[case(195, CrystalSystem::Cubic)]
#[case(230, CrystalSystem::Cubic)]
fn test_crystal_system_boundaries(#[case] number: u16, #[case] expected: CrystalSystem) {
    assert_eq!(crystal_system_from_number(number), Ok(expected));
}

#[rstest]
#[case(0)]
#[case(231)]
#[case(u16::MAX)]
fn test_out_of_range(#[case] number: u16) {
    assert_eq!(
        crystal_system_from_number(number),
        Err(SymmetryError::OutOfRange(number))
    );
}

#[test]
fn test_systems_partition_space_groups() {
    let mut counts = [0usize; 7];
    for number in 1..=230u16 {
        let system = crystal_system_from_number(number).unwrap();
        let index = CrystalSystem::ALL.iter().position(|&s| s == system).unwrap();
        counts[index] += 1;
    }
    assert_eq!(counts, [2, 13, 59, 68, 25, 27, 36]);
    assert_eq!(counts.iter().sum::<usize>(), 230);
}

#[test]
fn test_names() {
    let names: Vec<&str> = CrystalSystem::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        [
            "triclinic",
            "monoclinic",
            "orthorhombic",
            "tetragonal",
            "trigonal",
            "hexagonal",
            "cubic"
        ]
    );
    assert_eq!(
        serde_json::to_string(&CrystalSystem::Orthorhombic).unwrap(),
        "\"orthorhombic\""
    );
}
