/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Main executable for abacuskit-rs

use abacuskit_rs::cli::{self, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Cli::parse();
    let output = cli::run(&args)?;
    println!("{}", output);

    Ok(())
}
