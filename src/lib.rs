/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! # abacuskit-rs
//!
//! Reference tables for post-processing ABACUS electronic-structure
//! calculations.
//!
//! - [`symmetry`]: space-group symbol resolution between Hermann-Mauguin
//!   symbols, Hall symbols and International Tables numbers, plus crystal
//!   systems and lattice centerings.
//! - [`atoms`]: element symbols and empirical bonding distances.
//! - [`orbitals`]: angular-momentum labels and orbital names.
//! - [`utils`]: unit conversions between atomic units and eV/Ångström.
//!
//! All tables are immutable statics and every lookup is safe to call from
//! any number of threads.

pub mod atoms;
pub mod cli;
pub mod config;
pub mod orbitals;
pub mod symmetry;
pub mod utils;

pub use config::{ResolverConfig, SettingPolicy};
pub use symmetry::{CrystalSystem, Resolver, SymmetryError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
