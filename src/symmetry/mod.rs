/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Space-group symbols and crystal systems
//!
//! Resolves between Hermann-Mauguin symbols, Hall symbols and International
//! Tables numbers, and classifies numbers into crystal systems.

pub mod audit;
pub mod crystal_system;
pub mod errors;
pub mod lattice;
pub mod pipeline;
pub mod resolver;
pub mod tables;

pub use audit::{check_tables, TableIssue};
pub use crystal_system::{crystal_system_from_number, CrystalSystem, UnknownCrystalSystem};
pub use errors::{Result, SymmetryError, Table, MAX_SPACE_GROUP, MIN_SPACE_GROUP};
pub use lattice::Centering;
pub use pipeline::{classify_hall, classify_hm, PipelineError, SpaceGroupInfo, Stage};
pub use resolver::{
    catalogued_hall, hall_from_hm, hall_from_number, hall_symbols_for_number, hm_from_hall,
    hm_variants_for_hall, number_from_hall, Resolver, UNKNOWN_HALL,
};
