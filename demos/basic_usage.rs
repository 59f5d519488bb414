// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for envsafe.
//!
//! This example demonstrates:
//! - Loading a `.env` file merged with `.env.defaults`
//! - Checking required keys against `.env.example` (safe mode)
//! - Updating existing keys in place
//!
//! The files are written to a temporary directory and loaded into an
//! in-memory environment, so the process environment is left alone.
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use envsafe::prelude::{DotenvConfig, DotenvLoader, Environment, LoadOptions};
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== envsafe: Basic Usage ===\n");

    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join(".env"), "# app settings\nGREETING=hello world\n")?;
    fs::write(dir.path().join(".env.defaults"), "DEFAULT1=Some Default\n")?;
    fs::write(dir.path().join(".env.example"), "GREETING=\nDATABASE_URL=\n")?;

    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .with_defaults(dir.path().join(".env.defaults"))
        .with_example(dir.path().join(".env.example"))
        .with_export(true);

    let mut loader = DotenvLoader::builder().with_memory_environment().build();

    // Example 1: load and merge
    println!("--- Example 1: Load ---");
    let config = loader.load(&options)?;
    for (key, value) in config.iter() {
        println!("  {key}={value}");
    }

    // Example 2: safe mode reports every missing key at once
    println!("\n--- Example 2: Safe Mode ---");
    match loader.load(&options.clone().with_safe(true)) {
        Ok(_) => println!("  all required keys present"),
        Err(e) => {
            println!("  {e}");
            if let Some(missing) = e.missing_keys() {
                println!("  missing: {}", missing.join(", "));
            }
        }
    }

    fs::write(
        dir.path().join(".env"),
        "GREETING=hello world\nDATABASE_URL=\n",
    )?;
    // An empty value only counts when allowed
    if let Err(e) = loader.load(&options.clone().with_safe(true)) {
        println!("  {e}");
    }
    let config = loader.load(&options.clone().with_safe(true).with_allow_empty_values(true))?;
    println!("  with allow_empty_values: {} keys loaded", config.len());

    // Example 3: update existing keys, unknown keys are skipped
    println!("\n--- Example 3: Update ---");
    let patch: DotenvConfig = [
        ("GREETING", "world hello"),
        ("DEFAULT1", "Some New Default"),
        ("NOT_DEFINED", "ignored"),
    ]
    .into_iter()
    .collect();
    let config = loader.update(&patch, &options)?;
    for (key, value) in patch.iter() {
        let status = if config.get(key) == Some(value) { "updated" } else { "skipped" };
        println!("  {status} {key}");
    }
    println!("\n.env now reads:\n{}", fs::read_to_string(dir.path().join(".env"))?);

    // Exported values never overwrite what the environment already had
    println!("--- Environment ---");
    let env = loader.environment();
    println!("  GREETING={:?}", env.get("GREETING"));
    println!("  DEFAULT1={:?}", env.get("DEFAULT1"));

    println!("\n=== Example Complete ===");
    Ok(())
}
