/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Element data
//!
//! Element symbols and the empirical bonding-distance table used to decide
//! which atom pairs are bonded.

pub mod database;
pub mod distance;
pub mod errors;

pub use database::{atomic_number, element_symbol};
pub use distance::{
    bond_cutoff, bond_cutoffs, cutoffs_for_atomic_number, is_bonded, neighbor_shell,
    non_monotonic_elements, BOND_DISTANCES,
};
pub use errors::{AtomError, Result};
