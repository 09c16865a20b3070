/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Physical constants (CODATA 2018)

/// Atomic unit of length (Bohr radius) in metres
pub const BOHR_RADIUS_M: f64 = 5.291_772_109_03e-11;

/// Ångström star in metres
pub const ANGSTROM_STAR_M: f64 = 1.000_014_95e-10;

/// Bohr radius expressed in Ångström star units
///
/// Calculation outputs quote lengths in Å*, so this differs from the
/// SI-Ångström Bohr radius in the sixth significant digit.
pub const BOHR_TO_ANGSTROM: f64 = BOHR_RADIUS_M / ANGSTROM_STAR_M;

/// Hartree energy in eV
pub const HARTREE_TO_EV: f64 = 27.211_386_245_988;

/// Rydberg constant times hc in eV
pub const RYDBERG_TO_EV: f64 = 13.605_693_122_994;
