/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Unit conversion utilities

use super::constants::{BOHR_TO_ANGSTROM, HARTREE_TO_EV, RYDBERG_TO_EV};

/// Convert from Bohr radii to Ångström
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * BOHR_TO_ANGSTROM
}

/// Convert from Ångström to Bohr radii
pub fn angstrom_to_bohr(angstrom: f64) -> f64 {
    angstrom / BOHR_TO_ANGSTROM
}

/// Convert energy from Hartree to eV
pub fn hartree_to_ev(hartree: f64) -> f64 {
    hartree * HARTREE_TO_EV
}

/// Convert energy from eV to Hartree
pub fn ev_to_hartree(ev: f64) -> f64 {
    ev / HARTREE_TO_EV
}

/// Convert energy from Rydberg to eV
pub fn rydberg_to_ev(rydberg: f64) -> f64 {
    rydberg * RYDBERG_TO_EV
}

/// Convert energy from eV to Rydberg
pub fn ev_to_rydberg(ev: f64) -> f64 {
    ev / RYDBERG_TO_EV
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        let angstrom = 1.0;
        let bohr = angstrom_to_bohr(angstrom);
        assert_relative_eq!(bohr_to_angstrom(bohr), angstrom, epsilon = 1e-12);

        let ev = 10.0;
        assert_relative_eq!(hartree_to_ev(ev_to_hartree(ev)), ev, epsilon = 1e-12);
        assert_relative_eq!(rydberg_to_ev(ev_to_rydberg(ev)), ev, epsilon = 1e-12);
    }

    #[test]
    fn test_hartree_is_two_rydberg() {
        assert_relative_eq!(hartree_to_ev(1.0), rydberg_to_ev(2.0), epsilon = 1e-9);
    }
}
