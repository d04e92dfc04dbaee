//! Residue-coordinate streams derived from a gapped alignment.
//!
//! Each sequence is rewritten as one integer per column: the 0-based
//! index of the last residue seen at or before that column, or -1
//! before the first residue. The arrays are non-decreasing, which is
//! what lets the matcher binary-search gap-run boundaries.

use crate::error::ReconcileError;
use crate::input::Alignment;
use anyhow::Result;

pub const GAP: u8 = b'-';

/// Per-sequence residue coordinates for one alignment, rows in the
/// canonical sequence order shared by both alignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedAlignment {
    pub columns: usize,
    /// `coords[seq][col]` = number of residues of `seq` emitted in
    /// columns <= `col`, minus one.
    pub coords: Vec<Vec<i32>>,
}

impl MappedAlignment {
    pub fn seq_count(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coord(&self, seq: usize, col: usize) -> i32 {
        self.coords[seq][col]
    }

    /// A column is a gap continuation when its coordinate repeats the
    /// previous column's, or is still -1 at the start.
    #[inline]
    pub fn is_gap(&self, seq: usize, col: usize) -> bool {
        let row = &self.coords[seq];
        row[col] == -1 || (col > 0 && row[col] == row[col - 1])
    }
}

/// Convert an alignment into coordinate rows, one per name in `order`.
///
/// A name missing from the alignment means the caller paired alignments
/// over different sequence sets; that is refused here rather than left
/// to produce garbage matches downstream.
pub fn map_alignment(aln: &Alignment, order: &[String]) -> Result<MappedAlignment> {
    let mut coords = Vec::with_capacity(order.len());
    for name in order {
        let seq = aln
            .seqs
            .get(name)
            .ok_or_else(|| ReconcileError::NameMismatch { name: name.clone() })?;
        let mut row = Vec::with_capacity(seq.len());
        let mut last = -1i32;
        for &symbol in seq {
            if symbol != GAP {
                last += 1;
            }
            row.push(last);
        }
        coords.push(row);
    }
    Ok(MappedAlignment {
        columns: aln.columns,
        coords,
    })
}
