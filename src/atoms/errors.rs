/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(i32),

    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("No bonding distances tabulated for {0}")]
    NoCutoffs(String),

    #[error("{element} has {available} neighbour shells, shell {shell} requested")]
    ShellOutOfRange {
        element: String,
        shell: usize,
        available: usize,
    },

    #[error("Invalid distance: {0}")]
    InvalidDistance(f64),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
