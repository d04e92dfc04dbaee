//! FASTA alignment loading and validation.
//!
//! This module handles:
//! - Reading a whole multiple alignment from a FASTA file
//! - Per-alignment length consistency checks
//! - Cross-alignment name-set checks
//! - The canonical sequence iteration order shared by both alignments

use crate::error::ReconcileError;
use anyhow::Result;
use bio::io::fasta;
use rustc_hash::FxHashMap;
use std::path::Path;

/// One multiple alignment, fully materialized: sequence names in file
/// order plus the gapped sequence text for each name.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub names: Vec<String>,
    pub seqs: FxHashMap<String, Vec<u8>>,
    pub columns: usize,
}

/// Read a multiple alignment from a FASTA file.
///
/// All sequences must share one column count; records are keyed by the
/// first whitespace-separated token of the header line.
pub fn read_alignment(path: &Path) -> Result<Alignment> {
    let fail = |reason: String| ReconcileError::Format {
        path: path.display().to_string(),
        reason,
    };

    let reader = fasta::Reader::from_file(path)?;
    let mut names: Vec<String> = Vec::new();
    let mut seqs: FxHashMap<String, Vec<u8>> = FxHashMap::default();
    let mut columns = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| fail(e.to_string()))?;
        let name = record
            .id()
            .split_whitespace()
            .next()
            .ok_or_else(|| fail("record with an empty header".to_string()))?
            .to_string();
        let seq = record.seq().to_vec();
        if names.is_empty() {
            columns = seq.len();
        } else if seq.len() != columns {
            return Err(ReconcileError::LengthInconsistency {
                name,
                len: seq.len(),
                expected: columns,
            }
            .into());
        }
        if seqs.insert(name.clone(), seq).is_some() {
            return Err(fail(format!("duplicate sequence name '{}'", name)).into());
        }
        names.push(name);
    }

    if names.is_empty() {
        return Err(fail("no sequences found".to_string()).into());
    }
    Ok(Alignment {
        names,
        seqs,
        columns,
    })
}

/// Canonical iteration order shared by both alignments: the first
/// alignment's names sorted reverse-lexicographically.
pub fn canonical_order(first: &Alignment) -> Vec<String> {
    let mut names = first.names.clone();
    names.sort_unstable_by(|a, b| b.cmp(a));
    names
}

/// Verify the two alignments name exactly the same sequences.
pub fn check_same_names(first: &Alignment, second: &Alignment) -> Result<(), ReconcileError> {
    for name in &first.names {
        if !second.seqs.contains_key(name) {
            return Err(ReconcileError::NameMismatch { name: name.clone() });
        }
    }
    for name in &second.names {
        if !first.seqs.contains_key(name) {
            return Err(ReconcileError::NameMismatch { name: name.clone() });
        }
    }
    Ok(())
}
