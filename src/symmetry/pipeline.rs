/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Hermann-Mauguin → Hall → number → crystal system
//!
//! Each stage short-circuits on failure and the error records the stage it
//! came from. A miss in the first stage means the caller's spelling is not
//! catalogued; a miss in any later stage means a key produced by one table is
//! absent from the next, which is reported as an inconsistency.

use super::crystal_system::CrystalSystem;
use super::errors::SymmetryError;
use super::lattice::Centering;
use super::resolver;
use log::warn;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Stage of the resolution pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    HmToHall,
    HallToNumber,
    HallToHm,
    NumberToSystem,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::HmToHall => "HM to Hall",
            Stage::HallToNumber => "Hall to number",
            Stage::HallToHm => "Hall to HM",
            Stage::NumberToSystem => "number to crystal system",
        };
        f.write_str(name)
    }
}

/// Failure of one pipeline stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} stage failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: SymmetryError,
}

impl PipelineError {
    fn new(stage: Stage, source: SymmetryError) -> Self {
        if source.is_inconsistent() {
            warn!("symmetry tables are inconsistent at the {} stage: {}", stage, source);
        }
        Self { stage, source }
    }

    /// Lookup misses on later stages are table defects, not bad input
    fn downstream(stage: Stage, source: SymmetryError) -> Self {
        Self::new(stage, source.into_inconsistent())
    }

    /// True when the failure is caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        !self.source.is_inconsistent()
    }
}

/// Everything the tables know about one space-group setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceGroupInfo {
    /// Symbol the lookup started from
    pub input: String,
    pub hall: &'static str,
    pub number: u16,
    /// Canonical HM symbol, with origin/axis suffix where applicable
    pub canonical_hm: &'static str,
    pub crystal_system: CrystalSystem,
    pub centering: Option<Centering>,
}

/// Resolve a Hermann-Mauguin symbol through every table
pub fn classify_hm(hm: &str) -> Result<SpaceGroupInfo, PipelineError> {
    let hall =
        resolver::hall_from_hm(hm).map_err(|err| PipelineError::new(Stage::HmToHall, err))?;
    complete(hm, hall)
}

/// Resolve a Hall symbol to its number, canonical HM symbol and crystal system
///
/// An uncatalogued Hall symbol is a lookup miss here, since the caller
/// supplied it.
pub fn classify_hall(hall: &str) -> Result<SpaceGroupInfo, PipelineError> {
    let catalogued = resolver::catalogued_hall(hall)
        .map_err(|err| PipelineError::new(Stage::HallToNumber, err))?;
    complete(hall, catalogued)
}

fn complete(input: &str, hall: &'static str) -> Result<SpaceGroupInfo, PipelineError> {
    let number = resolver::number_from_hall(hall)
        .map_err(|err| PipelineError::downstream(Stage::HallToNumber, err))?;
    let canonical_hm = resolver::hm_from_hall(hall)
        .map_err(|err| PipelineError::downstream(Stage::HallToHm, err))?;
    let crystal_system = CrystalSystem::from_number(number)
        .map_err(|err| PipelineError::new(Stage::NumberToSystem, err))?;

    Ok(SpaceGroupInfo {
        input: input.to_string(),
        hall,
        number,
        canonical_hm,
        crystal_system,
        centering: Centering::from_symbol(hall),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::errors::Table;

    #[test]
    fn test_classify_hm() {
        let info = classify_hm("P21/c").unwrap();
        assert_eq!(info.input, "P21/c");
        assert_eq!(info.hall, "-P 2ybc");
        assert_eq!(info.number, 14);
        assert_eq!(info.canonical_hm, "P121/c1");
        assert_eq!(info.crystal_system, CrystalSystem::Monoclinic);
        assert_eq!(info.centering, Some(Centering::P));
    }

    #[test]
    fn test_unknown_spelling_is_input_error() {
        let err = classify_hm("P 21/c").unwrap_err();
        assert_eq!(err.stage, Stage::HmToHall);
        assert!(err.source.is_not_found());
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_hall_is_inconsistent() {
        let err = classify_hm("B1a1").unwrap_err();
        assert_eq!(err.stage, Stage::HallToNumber);
        assert_eq!(
            err.source,
            SymmetryError::Inconsistent {
                table: Table::HallToNumber,
                key: "B -2yc".to_string()
            }
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_classify_hall() {
        let info = classify_hall("-P 2ab 2bc").unwrap();
        assert_eq!(info.number, 48);
        assert_eq!(info.canonical_hm, "Pnnn:2");
        assert_eq!(info.crystal_system, CrystalSystem::Orthorhombic);

        let err = classify_hall("-P 2ybc ").unwrap_err();
        assert_eq!(err.stage, Stage::HallToNumber);
        assert!(err.source.is_not_found());

        let err = classify_hall("Unknown").unwrap_err();
        assert_eq!(err.stage, Stage::NumberToSystem);
        assert_eq!(err.source, SymmetryError::OutOfRange(0));
    }
}
