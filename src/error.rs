use thiserror::Error;

/// Precondition failures detected while loading and validating input,
/// or while pairing the final block lists. Any of these aborts the run
/// before the output file is written.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("malformed FASTA in {path}: {reason}")]
    Format { path: String, reason: String },

    #[error("sequence '{name}' is {len} columns long, expected {expected}")]
    LengthInconsistency {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("sequence '{name}' is present in only one alignment")]
    NameMismatch { name: String },

    #[error("cannot pair alignment blocks: {reason}")]
    ClusterPairing { reason: String },
}
