//! Column-to-column reconciliation of two coordinate-mapped alignments.
//!
//! The walk keeps, per task, a *frame* in each alignment: the contiguous
//! range of columns not yet resolved. Because coordinate rows are
//! non-decreasing, two columns can only correspond when the sequence
//! under scrutiny has equal coordinates in both, so whole gap runs can
//! be pruned or escalated to the next sequence without comparing every
//! column pair. Escalated sub-frames become new tasks on an explicit
//! worklist instead of recursive calls, and results are written into
//! preallocated per-column slots, so no ordering between tasks matters.

use crate::coords::MappedAlignment;
use std::ops::Range;

/// Per-column match results: entry `i` holds the index of the matching
/// column in the other alignment, or `None` where no counterpart exists.
pub type Certainty = Vec<Option<u32>>;

struct Task {
    seq: usize,
    first: Range<usize>,
    second: Range<usize>,
}

/// Build the two per-column match arrays for a pair of alignments.
///
/// Both inputs must hold the same sequences in the same row order.
/// Columns never written to stay `None`, which is exactly the unmatched
/// state, so rejected and skipped columns need no explicit marking.
pub fn match_columns(
    first: &MappedAlignment,
    second: &MappedAlignment,
) -> (Certainty, Certainty) {
    assert_eq!(
        first.seq_count(),
        second.seq_count(),
        "alignments must hold the same sequences"
    );
    let mut matcher = Matcher {
        first,
        second,
        first_certainty: vec![None; first.columns],
        second_certainty: vec![None; second.columns],
    };
    let mut work = vec![Task {
        seq: 0,
        first: 0..first.columns,
        second: 0..second.columns,
    }];
    while let Some(task) = work.pop() {
        matcher.resolve(task, &mut work);
    }
    (matcher.first_certainty, matcher.second_certainty)
}

/// First column index whose coordinate exceeds `value`, found by binary
/// search over a non-decreasing coordinate row. For a gap run carried at
/// coordinate `value` this is the column just past the end of the run.
pub fn gap_run_end(coords: &[i32], value: i32) -> usize {
    coords.partition_point(|&c| c <= value)
}

struct Matcher<'a> {
    first: &'a MappedAlignment,
    second: &'a MappedAlignment,
    first_certainty: Certainty,
    second_certainty: Certainty,
}

impl Matcher<'_> {
    fn resolve(&mut self, task: Task, work: &mut Vec<Task>) {
        let seq = task.seq;
        let mut f = task.first;
        let mut s = task.second;

        loop {
            // Columns of a frame facing an exhausted counterpart have no
            // counterpart themselves; they stay unmatched.
            if f.is_empty() || s.is_empty() {
                return;
            }

            // Escalation past the last sequence means the frames cover
            // columns that are gap-only for every sequence. Settle them
            // head to head; leftover columns stay unmatched.
            if seq >= self.first.seq_count() {
                while !f.is_empty() && !s.is_empty() {
                    self.compare_column(f.start, s.start);
                    f.start += 1;
                    s.start += 1;
                }
                return;
            }

            let fc = &self.first.coords[seq];
            let sc = &self.second.coords[seq];

            // Frames covering disjoint residue ranges of this sequence
            // cannot contain corresponding columns.
            if fc[f.start] > sc[s.end - 1] || fc[f.end - 1] < sc[s.start] {
                return;
            }

            // Trim the frame that starts behind until the heads carry
            // the same coordinate; trimmed columns stay unmatched.
            if fc[f.start] > sc[s.start] {
                let target = fc[f.start];
                while sc[s.start] != target {
                    s.start += 1;
                    assert!(s.start < s.end, "head alignment ran past the frame");
                }
            } else if fc[f.start] < sc[s.start] {
                let target = sc[s.start];
                while fc[f.start] != target {
                    f.start += 1;
                    assert!(f.start < f.end, "head alignment ran past the frame");
                }
            }

            // Coordinate a gap run at either head is carrying, or -1
            // when the head precedes the sequence's first residue.
            let base = if fc[f.start] == -1 || sc[s.start] == -1 {
                -1
            } else if f.start > 0 && fc[f.start] == fc[f.start - 1] {
                fc[f.start]
            } else if s.start > 0 && sc[s.start] == sc[s.start - 1] {
                sc[s.start]
            } else {
                -1
            };

            // A frame whose tail never advances past `base` is gapped
            // for this sequence throughout; only a deeper sequence can
            // tell its columns apart.
            let f_all_gap = fc[f.end - 1] == base;
            let s_all_gap = sc[s.end - 1] == base;
            if f_all_gap && s_all_gap {
                work.push(Task {
                    seq: seq + 1,
                    first: f,
                    second: s,
                });
                return;
            }
            if f_all_gap {
                let boundary = gap_run_end(sc, base);
                debug_assert!(s.start < boundary && boundary < s.end);
                work.push(Task {
                    seq: seq + 1,
                    first: f,
                    second: s.start..boundary,
                });
                return;
            }
            if s_all_gap {
                let boundary = gap_run_end(fc, base);
                debug_assert!(f.start < boundary && boundary < f.end);
                work.push(Task {
                    seq: seq + 1,
                    first: f.start..boundary,
                    second: s,
                });
                return;
            }

            // Both heads sit inside a gap run at `base`: escalate the
            // shared prefix, then continue past it.
            if fc[f.start] == base {
                let f_split = gap_run_end(fc, base);
                let s_split = gap_run_end(sc, base);
                work.push(Task {
                    seq: seq + 1,
                    first: f.start..f_split,
                    second: s.start..s_split,
                });
                f.start = f_split;
                s.start = s_split;
                continue;
            }

            // Heads aligned and unambiguous: settle one column pair and
            // keep walking the tails with the same sequence.
            self.compare_column(f.start, s.start);
            f.start += 1;
            s.start += 1;
        }
    }

    /// Accept a column pair only if every sequence agrees on both the
    /// coordinate value and the gap-continuation flag. This is the one
    /// place equality is enforced across all sequences, so mismatches
    /// can still surface here after single-sequence narrowing.
    fn compare_column(&mut self, first_col: usize, second_col: usize) {
        for seq in 0..self.first.seq_count() {
            if self.first.coord(seq, first_col) != self.second.coord(seq, second_col)
                || self.first.is_gap(seq, first_col) != self.second.is_gap(seq, second_col)
            {
                return;
            }
        }
        self.first_certainty[first_col] = Some(second_col as u32);
        self.second_certainty[second_col] = Some(first_col as u32);
    }
}
