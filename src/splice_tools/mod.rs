//! Splice tools — Marker-delimited method body replacement
//!
//! Replaces the body of one definition inside a script file with a
//! donor body read from a second file. No syntax tree is parsed and
//! no validation of the replacement is attempted; boundaries are
//! plain literal markers matched against trimmed lines.
//!
//! ## Architecture
//!
//! - `locate.rs` — boundary detection (`locate_range`, `Range`)
//! - `reindent.rs` — donor re-indentation (`reindent`)
//! - `mod.rs` — pure `splice` plus the `splice_file` orchestrator

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

mod locate;
mod reindent;

pub use locate::{locate_range, Range};
pub use reindent::reindent;

/// Error type for splice operations
#[derive(Debug, thiserror::Error)]
pub enum SpliceError {
    #[error("Start marker never matched: '{0}'")]
    StartNotFound(String),

    #[error("End marker never matched after the start line: '{0}'")]
    EndNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Splice arguments
#[derive(Debug, Clone)]
pub struct SpliceArgs {
    /// Path to the target script, overwritten in place
    pub target: PathBuf,
    /// Path to the donor body file
    pub donor: PathBuf,
    /// Literal prefix identifying the target definition's header line
    pub start_marker: String,
    /// Literal prefix identifying the next definition's header line
    pub end_marker: String,
    /// Indent prefix added to every non-blank donor line
    pub indent_unit: String,
}

/// Splice result, suitable for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct SpliceReport {
    /// Target path that was rewritten
    pub target: PathBuf,
    /// First line of the replaced range (0-indexed)
    pub start_line: usize,
    /// First line after the replaced range (0-indexed)
    pub end_line: usize,
    /// Number of target lines removed
    pub lines_removed: usize,
    /// Number of donor lines written in their place
    pub lines_inserted: usize,
    /// Success flag
    pub success: bool,
}

/// Splice a replacement into a line sequence
///
/// Pure three-segment concatenation:
/// `lines[..range.start] + replacement + lines[range.end..]`.
pub fn splice(lines: &[String], range: &Range, replacement: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() - range.len() + replacement.len());
    out.extend_from_slice(&lines[..range.start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&lines[range.end..]);
    out
}

/// Splice a donor body over a marker-delimited range in a file
///
/// Orchestrates load → locate_range → reindent → splice → write.
/// This is the only operation in the module with side effects: two
/// file reads and, on success, one file write. The target is written
/// only after the full new content exists in memory; on any failure
/// before that point the file on disk is untouched.
pub fn splice_file(args: &SpliceArgs) -> Result<SpliceReport> {
    let donor_content = fs::read_to_string(&args.donor)
        .with_context(|| format!("Failed to read donor file: {}", args.donor.display()))?;

    let target_content = fs::read_to_string(&args.target)
        .with_context(|| format!("Failed to read target file: {}", args.target.display()))?;

    let donor_lines: Vec<String> = donor_content.lines().map(|s| s.to_string()).collect();
    let target_lines: Vec<String> = target_content.lines().map(|s| s.to_string()).collect();

    let range = locate_range(&target_lines, &args.start_marker, &args.end_marker)?;
    info!(
        "Located range: lines {}..{} in {}",
        range.start + 1,
        range.end + 1,
        args.target.display()
    );

    let replacement = reindent(&donor_lines, &args.indent_unit);
    debug!(
        "Reindented {} donor lines with unit {:?}",
        replacement.len(),
        args.indent_unit
    );

    let new_lines = splice(&target_lines, &range, &replacement);
    let new_content = new_lines.join("\n") + "\n";

    // Atomic write pattern: temp file + rename
    let temp_path = args.target.with_extension("tmp");
    {
        let mut temp_file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp_file.write_all(new_content.as_bytes())?;
        temp_file.sync_all()?;
    }
    fs::rename(&temp_path, &args.target).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            args.target.display()
        )
    })?;

    info!(
        "Spliced {} lines over {} in {}",
        replacement.len(),
        range.len(),
        args.target.display()
    );

    Ok(SpliceReport {
        target: args.target.clone(),
        start_line: range.start,
        end_line: range.end,
        lines_removed: range.len(),
        lines_inserted: replacement.len(),
        success: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn args(dir: &TempDir, target: &str, donor: &str) -> SpliceArgs {
        let target_path = dir.path().join("target.py");
        let donor_path = dir.path().join("donor.py");
        fs::write(&target_path, target).unwrap();
        fs::write(&donor_path, donor).unwrap();
        SpliceArgs {
            target: target_path,
            donor: donor_path,
            start_marker: "def a(".to_string(),
            end_marker: "def b(".to_string(),
            indent_unit: "    ".to_string(),
        }
    }

    #[test]
    fn test_splice_concatenates_segments() {
        let lines = doc(&["a", "b", "c", "d"]);
        let range = Range { start: 1, end: 3 };
        let out = splice(&lines, &range, &doc(&["X", "Y", "Z"]));
        assert_eq!(out, doc(&["a", "X", "Y", "Z", "d"]));
    }

    #[test]
    fn test_splice_with_empty_replacement() {
        let lines = doc(&["a", "b", "c"]);
        let range = Range { start: 0, end: 2 };
        let out = splice(&lines, &range, &[]);
        assert_eq!(out, doc(&["c"]));
    }

    #[test]
    fn test_splice_file_end_to_end() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "def a():\n    pass\ndef b():\n    pass\n", "return 1\n");

        let report = splice_file(&args).unwrap();
        assert!(report.success);
        assert_eq!(report.start_line, 0);
        assert_eq!(report.end_line, 2);
        assert_eq!(report.lines_removed, 2);
        assert_eq!(report.lines_inserted, 1);

        let content = fs::read_to_string(&args.target).unwrap();
        assert_eq!(content, "def a():\n    return 1\ndef b():\n    pass\n");
    }

    #[test]
    fn test_splice_file_start_not_found_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let original = "def a():\n    pass\ndef b():\n    pass\n";
        let mut args = args(&dir, original, "return 1\n");
        args.start_marker = "def z(".to_string();

        let err = splice_file(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SpliceError>(),
            Some(SpliceError::StartNotFound(_))
        ));

        let content = fs::read_to_string(&args.target).unwrap();
        assert_eq!(content, original);
    }

    #[test]
    fn test_splice_file_end_not_found_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let original = "def a():\n    pass\n";
        let args = args(&dir, original, "return 1\n");

        let err = splice_file(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SpliceError>(),
            Some(SpliceError::EndNotFound(_))
        ));

        let content = fs::read_to_string(&args.target).unwrap();
        assert_eq!(content, original);
    }

    #[test]
    fn test_splice_file_donor_containing_start_marker_spliced_once() {
        // A donor body that itself matches the start marker must not
        // trigger a second splice; one application happens per run
        let dir = TempDir::new().unwrap();
        let args = args(
            &dir,
            "def a():\n    pass\ndef b():\n    pass\n",
            "def a(inner):\n    return inner\n",
        );

        let report = splice_file(&args).unwrap();
        assert_eq!(report.lines_inserted, 2);

        let content = fs::read_to_string(&args.target).unwrap();
        assert_eq!(
            content,
            "def a():\n    def a(inner):\n        return inner\ndef b():\n    pass\n"
        );
    }

    #[test]
    fn test_splice_file_missing_donor() {
        let dir = TempDir::new().unwrap();
        let target_path = dir.path().join("target.py");
        fs::write(&target_path, "def a():\ndef b():\n").unwrap();
        let args = SpliceArgs {
            target: target_path,
            donor: dir.path().join("missing.py"),
            start_marker: "def a(".to_string(),
            end_marker: "def b(".to_string(),
            indent_unit: "    ".to_string(),
        };

        assert!(splice_file(&args).is_err());
    }

    #[test]
    fn test_splice_file_blank_donor_line_stays_bare() {
        let dir = TempDir::new().unwrap();
        let args = args(
            &dir,
            "def a():\n    pass\ndef b():\n    pass\n",
            "\nx = 1\n",
        );

        splice_file(&args).unwrap();
        let content = fs::read_to_string(&args.target).unwrap();
        assert_eq!(content, "def a():\n\n    x = 1\ndef b():\n    pass\n");
    }
}
