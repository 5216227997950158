//! Patch tools — Exact text block replacement (quick fix)
//!
//! Replaces the first occurrence of one exact multi-line snippet with
//! another. Unlike the splicer this works on raw text rather than
//! lines, so the old snippet must match byte for byte including its
//! indentation. A run against an already-patched file reports
//! `AlreadyApplied` and performs no write.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Error type for block replacement
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("Snippet not found in target (and replacement not already present)")]
    SnippetNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Replace arguments
#[derive(Debug, Clone)]
pub struct ReplaceArgs {
    /// Path to the target script, overwritten in place
    pub target: PathBuf,
    /// Path to the file holding the exact snippet to be replaced
    pub old: PathBuf,
    /// Path to the file holding the replacement snippet
    pub new: PathBuf,
}

/// What a replace run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReplaceOutcome {
    /// Old snippet found and replaced, target rewritten
    Applied,
    /// Replacement already present, target untouched
    AlreadyApplied,
}

/// Replace result, suitable for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceReport {
    /// Target path
    pub target: PathBuf,
    /// Outcome of the run
    pub outcome: ReplaceOutcome,
}

/// Replace the first occurrence of an exact snippet in a file
///
/// Reads the old and new snippets from their own files, then the
/// target. If the old snippet occurs, the first occurrence is
/// replaced and the target rewritten. If it does not occur but the
/// new snippet is already present, the run succeeds without writing.
/// Anything else is an error and the target is left untouched.
pub fn replace_block(args: &ReplaceArgs) -> Result<ReplaceReport> {
    let old = fs::read_to_string(&args.old)
        .with_context(|| format!("Failed to read old snippet: {}", args.old.display()))?;
    let new = fs::read_to_string(&args.new)
        .with_context(|| format!("Failed to read new snippet: {}", args.new.display()))?;
    let content = fs::read_to_string(&args.target)
        .with_context(|| format!("Failed to read target file: {}", args.target.display()))?;

    if !content.contains(&old) {
        if content.contains(&new) {
            info!("Replacement already present in {}", args.target.display());
            return Ok(ReplaceReport {
                target: args.target.clone(),
                outcome: ReplaceOutcome::AlreadyApplied,
            });
        }
        return Err(ReplaceError::SnippetNotFound.into());
    }

    let new_content = content.replacen(&old, &new, 1);

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

    info!("Replaced snippet in {}", args.target.display());
    Ok(ReplaceReport {
        target: args.target.clone(),
        outcome: ReplaceOutcome::Applied,
    })
}
