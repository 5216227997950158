//! Graft CLI — marker-delimited method splicer
//!
//! Modes:
//! - patch: splice a donor body over a marker-delimited range
//! - replace: replace an exact text block (quick fix)
//! - inspect: read-only tabular diagnostics

use graft::cli::{parse_args, run_cli_mode, EXIT_USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    // Handle --version flag
    if parsed.show_version {
        println!("graft v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // Handle --help flag
    if parsed.show_help {
        print_help();
        return;
    }

    let exit_code = run_cli_mode(parsed);
    std::process::exit(exit_code);
}

/// Print help message
fn print_help() {
    println!("graft v{} - marker-delimited method splicer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    graft [options] <mode>");
    println!();
    println!("MODES:");
    println!("    patch     Splice a donor body over a marker-delimited range");
    println!("    replace   Replace an exact text block (quick fix)");
    println!("    inspect   Inspect a tabular data file");
    println!();
    println!("OPTIONS:");
    println!("    --target <file>     Target script (patch, replace)");
    println!("    --donor <file>      Donor body / replacement snippet (patch, replace)");
    println!("    --old <file>        Snippet to be replaced (replace)");
    println!("    --start <prefix>    Start marker: first line whose trimmed text begins with it");
    println!("    --end <prefix>      End marker: next definition's header prefix");
    println!("    --indent <n>        Spaces per indent unit (default: 4)");
    println!("    --table <file>      Tabular data file (inspect)");
    println!("    --column <name>     Column to filter on (inspect)");
    println!("    --contains <text>   Case-insensitive needle (inspect)");
    println!("    --json              Output JSON (for scripting)");
    println!("    --version           Show version information");
    println!("    --help              Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    graft --target step4.py --donor fixed_body.py \\");
    println!("          --start 'def map_line_item(' --end 'def _get_fuzzy_part_candidates(' patch");
    println!("    graft --table customers.csv --column 'Company Name' --contains 'red ball' inspect");
}
