/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::symmetry::{
    classify_hall, classify_hm, Centering, CrystalSystem, Stage, SymmetryError, Table,
};
use rstest::rstest;

#[rstest]
#[case("P1", 1, CrystalSystem::Triclinic)]
#[case("P21/c", 14, CrystalSystem::Monoclinic)]
#[case("Pnnn", 48, CrystalSystem::Orthorhombic)]
#[case("I4/mmm", 139, CrystalSystem::Tetragonal)]
#[case("R-3m", 166, CrystalSystem::Trigonal)]
#[case("P63/mmc", 194, CrystalSystem::Hexagonal)]
#[case("Ia-3d", 230, CrystalSystem::Cubic)]
fn test_classify_hm(#[case] hm: &str, #[case] number: u16, #[case] system: CrystalSystem) {
    let info = classify_hm(hm).unwrap();
    assert_eq!(info.input, hm);
    assert_eq!(info.number, number);
    assert_eq!(info.crystal_system, system);
}

#[test]
fn test_pipeline_carries_canonical_symbol() {
    let info = classify_hm("Fd-3m").unwrap();
    assert_eq!(info.hall, "F 4d 2 3 -1d");
    assert_eq!(info.number, 227);
    assert_eq!(info.canonical_hm, "Fd-3m:1");
    assert_eq!(info.centering, Some(Centering::F));

    let info = classify_hm("R3:R").unwrap();
    assert_eq!(info.hall, "P 3*");
    assert_eq!(info.number, 146);
    assert_eq!(info.centering, Some(Centering::P));
}

#[test]
fn test_unrecognised_spelling_fails_first_stage() {
    let err = classify_hm("Xyz").unwrap_err();
    assert_eq!(err.stage, Stage::HmToHall);
    assert_eq!(
        err.source,
        SymmetryError::NotFound {
            table: Table::HmToHall,
            key: "Xyz".to_string()
        }
    );
    assert!(err.is_input_error());
}

#[rstest]
#[case("R3mHR", "T 3 -2\"")]
#[case("R-3mHR", "-T 3 2\"")]
#[case("B1a1", "B -2yc")]
#[case("B121/c1", "-B 2ybc")]
fn test_table_defects_are_inconsistent(#[case] hm: &str, #[case] hall: &str) {
    let err = classify_hm(hm).unwrap_err();
    assert_eq!(err.stage, Stage::HallToNumber);
    assert_eq!(
        err.source,
        SymmetryError::Inconsistent {
            table: Table::HallToNumber,
            key: hall.to_string()
        }
    );
    assert!(!err.is_input_error());
    assert!(err.to_string().contains("Hall to number stage failed"));
}

#[test]
fn test_classify_hall() {
    let info = classify_hall("-P 2ybc").unwrap();
    assert_eq!(info.number, 14);
    assert_eq!(info.canonical_hm, "P121/c1");

    let err = classify_hall("-B 2ybc").unwrap_err();
    assert_eq!(err.stage, Stage::HallToNumber);
    assert!(err.source.is_not_found());
    assert!(err.is_input_error());
}

#[test]
fn test_info_serializes() {
    let info = classify_hm("Pm-3m").unwrap();
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["number"], 221);
    assert_eq!(value["hall"], "-P 4 2 3");
    assert_eq!(value["crystal_system"], "cubic");
    assert_eq!(value["centering"], "P");
}
