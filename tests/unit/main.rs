//! Integration tests for msacmp.
//!
//! Tests are organized by surface:
//! - `args` - CLI parsing
//! - `pipeline` - end-to-end runs through real FASTA files

mod args;
