/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the `abacuskit` command-line interface. Commands
//! render their result as text or, with `--json`, as a JSON document.

use crate::atoms;
use crate::config::ResolverConfig;
use crate::symmetry::{self, Resolver, SymmetryError};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Space-group and element reference tables for ABACUS post-processing
#[derive(Parser, Debug)]
#[command(name = "abacuskit", version, about)]
pub struct Cli {
    /// JSON file with resolver settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a Hermann-Mauguin symbol
    Hm { symbol: String },
    /// Classify a Hall symbol
    Hall { symbol: String },
    /// Look up the setting of a space-group number
    Number { number: u16 },
    /// Crystal system of a space-group number
    System { number: u16 },
    /// Bonding distances of an element
    Bond {
        element: String,
        /// Report the neighbour shell of this distance (Å)
        #[arg(short, long)]
        distance: Option<f64>,
    },
    /// Check the symmetry tables for cross-table inconsistencies
    Audit,
}

/// Run a parsed command line and return the rendered output
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => ResolverConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let resolver = Resolver::with_config(config);

    match &cli.command {
        Command::Hm { symbol } => {
            let info = symmetry::classify_hm(symbol)?;
            render(cli.json, &info, || {
                format!(
                    "{} -> Hall '{}', No. {} ({}), {} {}",
                    info.input,
                    info.hall,
                    info.number,
                    info.canonical_hm,
                    info.crystal_system,
                    centering_name(info.centering)
                )
            })
        }
        Command::Hall { symbol } => {
            let info = symmetry::classify_hall(symbol)?;
            render(cli.json, &info, || {
                format!(
                    "'{}' -> No. {} ({}), {}",
                    info.hall, info.number, info.canonical_hm, info.crystal_system
                )
            })
        }
        Command::Number { number } => number_command(&resolver, *number, cli.json),
        Command::System { number } => {
            let system = symmetry::crystal_system_from_number(*number)?;
            let value = json!({ "number": number, "crystal_system": system });
            render(cli.json, &value, || format!("No. {}: {}", number, system))
        }
        Command::Bond { element, distance } => bond_command(element, *distance, cli.json),
        Command::Audit => {
            let issues = symmetry::check_tables();
            render(cli.json, &issues, || {
                let mut out = format!("{} issue(s) found", issues.len());
                for issue in &issues {
                    let _ = write!(out, "\n  {}", issue);
                }
                out
            })
        }
    }
}

fn number_command(resolver: &Resolver, number: u16, as_json: bool) -> anyhow::Result<String> {
    let system = symmetry::crystal_system_from_number(number)?;
    match resolver.hall_from_number(number) {
        Ok(hall) => {
            let hm = symmetry::hm_from_hall(hall).map_err(SymmetryError::into_inconsistent)?;
            let value = json!({
                "number": number,
                "hall": hall,
                "hm": hm,
                "crystal_system": system,
            });
            render(as_json, &value, || {
                format!("No. {}: Hall '{}', {} ({})", number, hall, hm, system)
            })
        }
        Err(SymmetryError::Ambiguous { candidates, .. }) => {
            let settings: Vec<_> = candidates
                .iter()
                .map(|&hall| (hall, symmetry::hm_from_hall(hall).unwrap_or("?")))
                .collect();
            let value = json!({
                "number": number,
                "crystal_system": system,
                "ambiguous": true,
                "settings": settings
                    .iter()
                    .map(|(hall, hm)| json!({ "hall": hall, "hm": hm }))
                    .collect::<Vec<_>>(),
            });
            render(as_json, &value, || {
                let mut out = format!(
                    "No. {} ({}) has {} settings:",
                    number,
                    system,
                    settings.len()
                );
                for (hall, hm) in &settings {
                    let _ = write!(out, "\n  {:<16} {}", hm, hall);
                }
                out
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn bond_command(element: &str, distance: Option<f64>, as_json: bool) -> anyhow::Result<String> {
    let cutoffs = atoms::bond_cutoffs(element)?;
    match distance {
        Some(distance) => {
            let shell = atoms::neighbor_shell(element, distance)?;
            let value = json!({ "element": element, "distance": distance, "shell": shell });
            render(as_json, &value, || match shell {
                Some(shell) => format!(
                    "{} at {} Å: shell {} (cutoff {} Å)",
                    element, distance, shell, cutoffs[shell]
                ),
                None => format!("{} at {} Å: beyond the last shell", element, distance),
            })
        }
        None => {
            let value = json!({ "element": element, "cutoffs": cutoffs });
            render(as_json, &value, || {
                let list: Vec<String> = cutoffs.iter().map(|c| c.to_string()).collect();
                format!("{}: {} Å", element, list.join(", "))
            })
        }
    }
}

fn centering_name(centering: Option<symmetry::Centering>) -> &'static str {
    centering.map_or("(unconventional centering)", |c| c.description())
}

fn render<T, F>(as_json: bool, value: &T, text: F) -> anyhow::Result<String>
where
    T: serde::Serialize,
    F: FnOnce() -> String,
{
    if as_json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("abacuskit").chain(args.iter().copied()))?;
        run(&cli)
    }

    #[test]
    fn test_hm_command() {
        let out = run_args(&["hm", "Fm-3m"]).unwrap();
        assert_eq!(out, "Fm-3m -> Hall '-F 4 2 3', No. 225 (Fm-3m), cubic face centering");
    }

    #[test]
    fn test_number_command_lists_settings() {
        let out = run_args(&["number", "146"]).unwrap();
        assert!(out.starts_with("No. 146 (trigonal) has 2 settings:"));
        assert!(out.contains("R3:H"));
        assert!(out.contains("R3:R"));
    }

    #[test]
    fn test_json_output() {
        let out = run_args(&["--json", "system", "230"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["crystal_system"], "cubic");
    }

    #[test]
    fn test_errors_propagate() {
        assert!(run_args(&["system", "231"]).is_err());
        assert!(run_args(&["hm", "Q1"]).is_err());
        assert!(run_args(&["bond", "Xx"]).is_err());
    }
}
