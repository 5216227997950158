//! CLI mode dispatch
//!
//! Dispatches to the mode handlers:
//! - patch: splice a donor body over a marker-delimited range
//! - replace: replace an exact text block (quick fix)
//! - inspect: read-only tabular diagnostics
//!
//! All run errors map to EXIT_FAILURE; a missing mode is a usage
//! error. patch and replace print a one-line explanation on failure,
//! inspect prints the full error chain.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::{Args, Mode, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use crate::patch_tools::{replace_block, ReplaceArgs, ReplaceOutcome};
use crate::splice_tools::{splice_file, SpliceArgs};
use crate::table_tools::{print_rows, table_inspect, TableInspectArgs};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run CLI mode and return exit code
///
/// This is the main entry point for CLI mode dispatch.
/// Called from main() after argument parsing.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let json_output = args.json_output;

    let mode = match args.mode {
        Some(mode) => mode,
        None => {
            eprintln!("Error: expected a mode (patch, replace, inspect)");
            eprintln!("Run with --help for usage");
            return EXIT_USAGE;
        }
    };

    // inspect is a diagnostic surface: show the full error chain there,
    // a one-line explanation everywhere else
    let full_trace = matches!(mode, Mode::Inspect { .. });

    match run_mode(mode, json_output) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            if full_trace {
                eprintln!("Error: {:?}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            EXIT_FAILURE
        }
    }
}

/// Run specific CLI mode
fn run_mode(mode: Mode, json_output: bool) -> Result<()> {
    match mode {
        Mode::Patch {
            target,
            donor,
            start_marker,
            end_marker,
            indent,
        } => run_patch_mode(target, donor, start_marker, end_marker, indent, json_output),
        Mode::Replace { target, old, new } => run_replace_mode(target, old, new, json_output),
        Mode::Inspect {
            table,
            column,
            needle,
        } => run_inspect_mode(table, column, needle, json_output),
    }
}

/// Patch mode: load donor and target, locate, reindent, splice, write
fn run_patch_mode(
    target: String,
    donor: String,
    start_marker: String,
    end_marker: String,
    indent: usize,
    json_output: bool,
) -> Result<()> {
    let args = SpliceArgs {
        target: PathBuf::from(target),
        donor: PathBuf::from(donor),
        start_marker,
        end_marker,
        indent_unit: " ".repeat(indent),
    };

    let report = splice_file(&args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Found method from line {} to {}",
            report.start_line + 1,
            report.end_line
        );
        println!(
            "Patched {} successfully ({} lines removed, {} inserted)",
            report.target.display(),
            report.lines_removed,
            report.lines_inserted
        );
    }
    Ok(())
}

/// Replace mode: exact snippet replacement
fn run_replace_mode(target: String, old: String, new: String, json_output: bool) -> Result<()> {
    let args = ReplaceArgs {
        target: PathBuf::from(target),
        old: PathBuf::from(old),
        new: PathBuf::from(new),
    };

    let report = replace_block(&args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match report.outcome {
            ReplaceOutcome::Applied => {
                println!("Applied replacement to {}", report.target.display());
            }
            ReplaceOutcome::AlreadyApplied => {
                println!(
                    "Replacement already present in {} - nothing to do",
                    report.target.display()
                );
            }
        }
    }
    Ok(())
}

/// Inspect mode: columns, row count, optional substring filter
fn run_inspect_mode(
    table: String,
    column: Option<String>,
    needle: Option<String>,
    json_output: bool,
) -> Result<()> {
    let args = TableInspectArgs {
        table: PathBuf::from(table),
        column,
        needle,
    };

    let report = table_inspect(&args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Columns: {:?}", report.columns);
    println!("Total rows: {}", report.total_rows);
    if let Some(matches) = &report.matches {
        println!();
        println!("Found {} matching rows:", matches.height());
        print_rows(matches)?;
    }
    Ok(())
}
