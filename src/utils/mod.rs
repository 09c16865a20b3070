/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Unit conversions for calculation outputs

pub mod constants;
mod conversions;

pub use conversions::{
    angstrom_to_bohr, bohr_to_angstrom, ev_to_hartree, ev_to_rydberg, hartree_to_ev,
    rydberg_to_ev,
};
