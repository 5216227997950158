//! reindent: Add one indent unit to every non-blank donor line
//!
//! Pure, line-local transformation. Relative indentation inside the
//! donor body is preserved because exactly one unit is added
//! uniformly. A donor body that already carries a leading indent gets
//! that indent doubled; this is an accepted limitation, not corrected
//! here. Consequently `reindent` is NOT idempotent.

/// Re-indent a donor body by one indent unit
///
/// Non-blank lines are prefixed with exactly one `indent_unit` and
/// kept verbatim otherwise. Blank or whitespace-only lines become
/// bare empty lines so the output never carries trailing indentation.
pub fn reindent(donor_lines: &[String], indent_unit: &str) -> Vec<String> {
    donor_lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{indent_unit}{line}")
            }
        })
        .collect()
}
