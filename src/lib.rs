//! Graft: marker-delimited method splicer for script maintenance
//!
//! This library provides deterministic, boring text surgery on script
//! files: locate a method body between two literal markers, re-indent
//! a donor body, and splice it over the located range. A read-only
//! table inspector rounds out the diagnostic surface.

pub mod cli;
pub mod patch_tools;
pub mod splice_tools;
pub mod table_tools;

// Re-export splice tools for convenience
pub use splice_tools::{
    locate_range, reindent, splice, splice_file, Range, SpliceArgs, SpliceError, SpliceReport,
};

// Re-export patch tools
pub use patch_tools::{replace_block, ReplaceArgs, ReplaceOutcome, ReplaceReport};

// Re-export table tools
pub use table_tools::{table_inspect, TableInspectArgs, TableReport};
