//! CLI argument parsing
//!
//! Parses command-line arguments:
//! - Modes: patch, replace, inspect
//! - Options: --target, --donor, --old, --start, --end, --indent,
//!   --table, --column, --contains, --json, --version, --help

use crate::cli::{Error, Result};

/// Default indent width (spaces) added to donor lines
pub const DEFAULT_INDENT: usize = 4;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// CLI mode (or None when only flags like --version were given)
    pub mode: Option<Mode>,

    /// Target script path (patch, replace)
    pub target: Option<String>,

    /// Donor body / replacement snippet path (patch, replace)
    pub donor: Option<String>,

    /// Old snippet path (replace)
    pub old: Option<String>,

    /// Start marker prefix (patch)
    pub start_marker: Option<String>,

    /// End marker prefix (patch)
    pub end_marker: Option<String>,

    /// Indent width in spaces (patch)
    pub indent: Option<String>,

    /// Tabular data file path (inspect)
    pub table: Option<String>,

    /// Column to filter on (inspect)
    pub column: Option<String>,

    /// Case-insensitive needle (inspect)
    pub contains: Option<String>,

    /// JSON output flag
    pub json_output: bool,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Patch mode: splice a donor body over a marker-delimited range
    Patch {
        target: String,
        donor: String,
        start_marker: String,
        end_marker: String,
        indent: usize,
    },

    /// Replace mode: replace an exact text block (quick fix)
    Replace {
        target: String,
        old: String,
        new: String,
    },

    /// Inspect mode: read-only tabular diagnostics
    Inspect {
        table: String,
        column: Option<String>,
        needle: Option<String>,
    },
}

/// Parse CLI arguments from std::env::args()
///
/// Grammar:
/// ```text
/// graft [options] <mode>
///
/// MODES:
///   patch     → Patch mode (requires --target, --donor, --start, --end)
///   replace   → Replace mode (requires --target, --old, --donor)
///   inspect   → Inspect mode (requires --table)
///
/// OPTIONS:
///   --target <file>     Target script
///   --donor <file>      Donor body / replacement snippet
///   --old <file>        Old snippet (replace mode)
///   --start <prefix>    Start marker prefix
///   --end <prefix>      End marker prefix
///   --indent <n>        Spaces per indent unit (default 4)
///   --table <file>      Tabular data file
///   --column <name>     Column to filter on
///   --contains <text>   Case-insensitive needle
///   --json              Output JSON
///   --version           Show version
///   --help              Show help
/// ```
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args {
        mode: None,
        target: None,
        donor: None,
        old: None,
        start_marker: None,
        end_marker: None,
        indent: None,
        table: None,
        column: None,
        contains: None,
        json_output: false,
        show_version: false,
        show_help: false,
    };

    let mut positional = Vec::new();

    // First pass: collect flags and positional args
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                args_out.show_version = true;
            }
            "--help" | "-h" => {
                args_out.show_help = true;
            }
            "--json" => {
                args_out.json_output = true;
            }
            "--target" => {
                args_out.target = Some(require_value(&mut iter, "--target")?);
            }
            "--donor" => {
                args_out.donor = Some(require_value(&mut iter, "--donor")?);
            }
            "--old" => {
                args_out.old = Some(require_value(&mut iter, "--old")?);
            }
            "--start" => {
                args_out.start_marker = Some(require_value(&mut iter, "--start")?);
            }
            "--end" => {
                args_out.end_marker = Some(require_value(&mut iter, "--end")?);
            }
            "--indent" => {
                args_out.indent = Some(require_value(&mut iter, "--indent")?);
            }
            "--table" => {
                args_out.table = Some(require_value(&mut iter, "--table")?);
            }
            "--column" => {
                args_out.column = Some(require_value(&mut iter, "--column")?);
            }
            "--contains" => {
                args_out.contains = Some(require_value(&mut iter, "--contains")?);
            }
            arg if arg.starts_with("--") => {
                return Err(Error::InvalidArgs(format!("Unknown option: {}", arg)));
            }
            other => {
                positional.push(other.to_string());
            }
        }
    }

    // Second pass: parse mode from positional args
    if !positional.is_empty() {
        args_out.mode = Some(parse_mode(&mut positional.into_iter(), &mut args_out)?);
    }

    Ok(args_out)
}

/// Pull the value following an option flag
fn require_value<I: Iterator<Item = String>>(iter: &mut I, flag: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| Error::MissingArgument(format!("{} requires a value", flag)))
}

/// Pull a required option collected during the first pass
fn require_option(opt: &mut Option<String>, flag: &str, mode: &str) -> Result<String> {
    opt.take()
        .ok_or_else(|| Error::MissingArgument(format!("{} mode requires {}", mode, flag)))
}

/// Parse mode from positional arguments
fn parse_mode<I: Iterator<Item = String>>(iter: &mut I, args: &mut Args) -> Result<Mode> {
    let first = iter
        .next()
        .ok_or_else(|| Error::InvalidArgs("Expected mode argument".to_string()))?;

    // Remaining positional args are ignored (options come before mode)
    let _: Vec<_> = iter.collect();

    match first.as_str() {
        "patch" => {
            let indent = match args.indent.take() {
                Some(raw) => raw.parse::<usize>().map_err(|_| {
                    Error::InvalidArgs(format!("--indent expects a number, got '{}'", raw))
                })?,
                None => DEFAULT_INDENT,
            };
            Ok(Mode::Patch {
                target: require_option(&mut args.target, "--target", "patch")?,
                donor: require_option(&mut args.donor, "--donor", "patch")?,
                start_marker: require_option(&mut args.start_marker, "--start", "patch")?,
                end_marker: require_option(&mut args.end_marker, "--end", "patch")?,
                indent,
            })
        }
        "replace" => Ok(Mode::Replace {
            target: require_option(&mut args.target, "--target", "replace")?,
            old: require_option(&mut args.old, "--old", "replace")?,
            new: require_option(&mut args.donor, "--donor", "replace")?,
        }),
        "inspect" => Ok(Mode::Inspect {
            table: require_option(&mut args.table, "--table", "inspect")?,
            column: args.column.take(),
            needle: args.contains.take(),
        }),
        other => Err(Error::UnknownMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        std::iter::once("graft")
            .chain(parts.iter().copied())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_parse_empty_args() {
        let parsed = parse_args(argv(&[])).unwrap();
        assert!(parsed.mode.is_none());
        assert!(!parsed.show_version);
        assert!(!parsed.show_help);
    }

    #[test]
    fn test_parse_version_flag() {
        let parsed = parse_args(argv(&["--version"])).unwrap();
        assert!(parsed.show_version);
    }

    #[test]
    fn test_parse_help_flag() {
        let parsed = parse_args(argv(&["--help"])).unwrap();
        assert!(parsed.show_help);
    }

    #[test]
    fn test_parse_patch_mode() {
        let parsed = parse_args(argv(&[
            "--target",
            "step4_mapping.py",
            "--donor",
            "step4_mapping_fixed.py",
            "--start",
            "def map_line_item(",
            "--end",
            "def _get_fuzzy_part_candidates(",
            "patch",
        ]))
        .unwrap();
        assert_eq!(
            parsed.mode,
            Some(Mode::Patch {
                target: "step4_mapping.py".to_string(),
                donor: "step4_mapping_fixed.py".to_string(),
                start_marker: "def map_line_item(".to_string(),
                end_marker: "def _get_fuzzy_part_candidates(".to_string(),
                indent: DEFAULT_INDENT,
            })
        );
    }

    #[test]
    fn test_parse_patch_mode_custom_indent() {
        let parsed = parse_args(argv(&[
            "--target", "t.py", "--donor", "d.py", "--start", "def a(", "--end", "def b(",
            "--indent", "2", "patch",
        ]))
        .unwrap();
        match parsed.mode {
            Some(Mode::Patch { indent, .. }) => assert_eq!(indent, 2),
            other => panic!("Unexpected mode: {:?}", other),
        }
    }

    #[test]
    fn test_parse_patch_mode_bad_indent() {
        let result = parse_args(argv(&[
            "--target", "t.py", "--donor", "d.py", "--start", "def a(", "--end", "def b(",
            "--indent", "four", "patch",
        ]));
        assert!(matches!(result, Err(Error::InvalidArgs(_))));
    }

    #[test]
    fn test_parse_patch_mode_missing_target() {
        let result = parse_args(argv(&[
            "--donor", "d.py", "--start", "def a(", "--end", "def b(", "patch",
        ]));
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }

    #[test]
    fn test_parse_replace_mode() {
        let parsed = parse_args(argv(&[
            "--target", "t.py", "--old", "old.txt", "--donor", "new.txt", "replace",
        ]))
        .unwrap();
        assert_eq!(
            parsed.mode,
            Some(Mode::Replace {
                target: "t.py".to_string(),
                old: "old.txt".to_string(),
                new: "new.txt".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_inspect_mode() {
        let parsed = parse_args(argv(&[
            "--table",
            "customer_list.csv",
            "--column",
            "Company Name",
            "--contains",
            "red ball oxygen",
            "inspect",
        ]))
        .unwrap();
        assert_eq!(
            parsed.mode,
            Some(Mode::Inspect {
                table: "customer_list.csv".to_string(),
                column: Some("Company Name".to_string()),
                needle: Some("red ball oxygen".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_inspect_mode_table_only() {
        let parsed = parse_args(argv(&["--table", "t.csv", "inspect"])).unwrap();
        assert_eq!(
            parsed.mode,
            Some(Mode::Inspect {
                table: "t.csv".to_string(),
                column: None,
                needle: None,
            })
        );
    }

    #[test]
    fn test_parse_json_flag() {
        let parsed = parse_args(argv(&["--json", "--table", "t.csv", "inspect"])).unwrap();
        assert!(parsed.json_output);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let result = parse_args(argv(&["unknown_mode"]));
        assert!(matches!(result, Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_parse_unknown_option() {
        let result = parse_args(argv(&["--bogus", "patch"]));
        assert!(matches!(result, Err(Error::InvalidArgs(_))));
    }

    #[test]
    fn test_parse_option_without_value() {
        let result = parse_args(argv(&["--target"]));
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }
}
