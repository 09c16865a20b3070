/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::utils::{
    angstrom_to_bohr, bohr_to_angstrom, constants, ev_to_hartree, ev_to_rydberg, hartree_to_ev,
    rydberg_to_ev,
};
use approx::assert_relative_eq;

#[test]
fn test_unit_conversions() {
    // Test Bohr ↔ Ångström conversions
    let bohr_value = 2.5;
    let angstrom_value = bohr_to_angstrom(bohr_value);
    let converted_back = angstrom_to_bohr(angstrom_value);

    assert_relative_eq!(converted_back, bohr_value, epsilon = 1e-12);
    assert_relative_eq!(
        angstrom_value,
        bohr_value * constants::BOHR_TO_ANGSTROM,
        epsilon = 1e-12
    );

    // Test eV ↔ Hartree ↔ Rydberg conversions
    let ev_value = 27.211;
    assert_relative_eq!(hartree_to_ev(ev_to_hartree(ev_value)), ev_value, epsilon = 1e-10);
    assert_relative_eq!(rydberg_to_ev(ev_to_rydberg(ev_value)), ev_value, epsilon = 1e-10);
}

#[test]
fn test_constant_values() {
    assert_relative_eq!(constants::BOHR_TO_ANGSTROM, 0.529_169_299_8, epsilon = 1e-9);
    assert_relative_eq!(constants::HARTREE_TO_EV, 27.211_386_245_988, epsilon = 1e-12);
    assert_relative_eq!(
        constants::HARTREE_TO_EV,
        2.0 * constants::RYDBERG_TO_EV,
        epsilon = 1e-12
    );
}
