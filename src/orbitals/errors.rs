/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Error types for the orbitals module

use thiserror::Error;

/// Errors that can occur when converting angular-momentum labels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrbitalError {
    #[error("Invalid angular momentum quantum number l = {0} (expected 0..=4)")]
    InvalidL(u8),

    #[error("Invalid magnetic index m = {m} for l = {l} (expected 0..={})", 2 * .l)]
    InvalidM { l: u8, m: u8 },

    #[error("Unknown angular momentum label: {0}")]
    UnknownLabel(String),
}

/// Result type for orbital operations
pub type Result<T> = std::result::Result<T, OrbitalError>;
