// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Result};
use intervals::config::ExerciseFile;
use intervals::{construct_from_args, identify_from_args, Interval};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("INTERVALS - Diatonic interval calculator");
    println!();
    println!("Usage: intervals <COMMAND>");
    println!();
    println!("Commands:");
    println!("  construct <INTERVAL> <START> [asc|dsc]  Find the note an interval away");
    println!("  identify <START> <END> [asc|dsc]        Name the interval between two notes");
    println!("  list                                    List known intervals");
    println!("  check <SHEET>                           Run a YAML exercise sheet");
    println!("  --help                                  Show this help message");
    println!();
    println!("Notes are a letter A-G with an optional b, bb, # or ## (e.g. Ab, F##).");
    println!("Direction defaults to asc.");
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("intervals=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn list_intervals() {
    println!("{:<6} {:<16} {:>6} {:>10}", "Name", "Interval", "Degree", "Semitones");
    for interval in Interval::ALL {
        println!(
            "{:<6} {:<16} {:>6} {:>10}",
            interval.name(),
            interval.long_name(),
            interval.degree(),
            interval.semitones()
        );
    }
}

fn check_sheet(path: &str) -> Result<()> {
    let sheet = ExerciseFile::load(path)?;
    let report = sheet.run();
    println!("{}", report);

    if report.is_success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} exercises did not pass",
            report.outcomes.len() - report.passed(),
            report.outcomes.len()
        ))
    }
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("INTERVALS - Diatonic interval calculator");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let rest: Vec<Option<&str>> = args[2..].iter().map(|s| Some(s.as_str())).collect();

    match args[1].as_str() {
        "construct" => {
            let note = construct_from_args(Some(rest.as_slice()))?;
            println!("{}", note);
        }
        "identify" => {
            let interval = identify_from_args(Some(rest.as_slice()))?;
            println!("{}", interval);
        }
        "list" => {
            list_intervals();
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Error: check requires an exercise sheet path");
                std::process::exit(1);
            };
            check_sheet(path)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
