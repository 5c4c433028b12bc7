//! CLI for the Benchlab benchmark harness.
//!
//! This crate provides the `benchlab` binary: `run` executes the standard
//! suite (or one named case) and prints the text report, `compare` aligns
//! two persisted result sets, and `status` shows the roster.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use benchlab_core::{compare, detect_runner, render_comparison};
use benchlab_harness::report::generate_report;
use benchlab_harness::{io, Strictness, Suite};

/// Benchlab CLI.
#[derive(Parser, Debug)]
#[command(name = "benchlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark suite and print the text report.
    ///
    /// Cases execute strictly sequentially in declared order. A failed
    /// case is reported and the run continues; the exit status is
    /// non-zero when any case failed.
    Run {
        /// Run a single named case instead of the full suite.
        #[arg(short, long)]
        case: Option<String>,

        /// Fail cases that exceed their advisory duration budget.
        #[arg(long)]
        strict: bool,

        /// Write the result set to this path as JSON.
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Verbose output.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare two persisted result sets position by position.
    Compare {
        /// Baseline result set (side A).
        baseline: PathBuf,

        /// Candidate result set (side B).
        candidate: PathBuf,
    },

    /// Show harness status and the case roster.
    Status {
        /// Show detailed status information.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Run the CLI with the given arguments.
pub fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            case,
            strict,
            json,
            verbose,
        } => run_suite(case.as_deref(), strict, json.as_deref(), verbose),
        Commands::Compare {
            baseline,
            candidate,
        } => run_compare(&baseline, &candidate),
        Commands::Status { detailed } => {
            show_status(detailed);
            Ok(())
        }
    }
}

fn run_suite(
    case: Option<&str>,
    strict: bool,
    json: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut suite = Suite::standard();
    if let Some(name) = case {
        suite = suite
            .only(name)
            .with_context(|| format!("available cases: {}", roster().join(", ")))?;
    }
    if strict {
        suite = suite.with_strictness(Strictness::Strict);
    }

    let outcome = suite.run();
    print!("{}", generate_report(outcome.records()));

    if verbose {
        for record in outcome.records().iter() {
            if let Some(ops) = record.op_count {
                println!("  {} completed {ops} operations", record.name);
            }
        }
    }
    for failure in outcome.failures() {
        eprintln!("FAILED {}: {}", failure.name, failure.error);
    }
    println!("{} passed, {} failed", outcome.passed(), outcome.failed());

    if let Some(path) = json {
        io::write_result_set(path, outcome.records())
            .with_context(|| format!("writing result set to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }

    if !outcome.is_pass() {
        anyhow::bail!("{} case(s) failed", outcome.failed());
    }
    Ok(())
}

fn run_compare(baseline: &Path, candidate: &Path) -> anyhow::Result<()> {
    let a = io::read_result_set(baseline)
        .with_context(|| format!("reading baseline {}", baseline.display()))?;
    let b = io::read_result_set(candidate)
        .with_context(|| format!("reading candidate {}", candidate.display()))?;

    let rows = compare(&a, &b);
    if rows.is_empty() {
        println!("baseline result set is empty; nothing to compare");
        return Ok(());
    }
    print!("{}", render_comparison(&rows));
    Ok(())
}

fn show_status(detailed: bool) {
    println!("Benchlab Benchmark Harness");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("CI runner: {}", detect_runner());

    if detailed {
        println!("\nCase roster (execution order):");
        for name in roster() {
            println!("  - {name}");
        }
    }
}

fn roster() -> Vec<&'static str> {
    Suite::standard().case_names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_accepts_case_filter() {
        let cli = Cli::parse_from(["benchlab", "run", "--case", "prime", "--strict"]);
        match cli.command {
            Commands::Run { case, strict, .. } => {
                assert_eq!(case.as_deref(), Some("prime"));
                assert!(strict);
            }
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn test_compare_takes_two_paths() {
        let cli = Cli::parse_from(["benchlab", "compare", "a.json", "b.json"]);
        match cli.command {
            Commands::Compare {
                baseline,
                candidate,
            } => {
                assert_eq!(baseline, PathBuf::from("a.json"));
                assert_eq!(candidate, PathBuf::from("b.json"));
            }
            other => panic!("expected compare command, got {other:?}"),
        }
    }
}
