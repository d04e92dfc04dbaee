//! Run-length compression of per-column match flags into blocks.

use crate::error::ReconcileError;
use crate::matcher::Certainty;

/// Maximal run of consecutive columns sharing matched/unmatched status,
/// in 1-based inclusive column coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub start: usize,
    pub end: usize,
    pub matched: bool,
}

/// A positionally corresponding block in each alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterPair {
    pub first: Cluster,
    pub second: Cluster,
}

/// Left-to-right scan opening a new cluster at every status change.
pub fn compress(certainty: &Certainty) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for (col, flag) in certainty.iter().enumerate() {
        let matched = flag.is_some();
        match clusters.last_mut() {
            Some(last) if last.matched == matched => last.end += 1,
            _ => clusters.push(Cluster {
                start: col + 1,
                end: col + 1,
                matched,
            }),
        }
    }
    clusters
}

/// Inverse of `compress` at the status level: rebuild the per-column
/// matched flags (the matched partner indices are not part of a
/// cluster, so only the status can be recovered).
pub fn expand(clusters: &[Cluster]) -> Vec<bool> {
    let mut flags = Vec::new();
    for cluster in clusters {
        flags.resize(cluster.end, cluster.matched);
    }
    flags
}

/// Pair the two alignments' cluster lists positionally.
///
/// Matched/unmatched transitions are expected to occur in lock-step
/// between the two lists; that is verified here rather than assumed,
/// since pairing lists of different shapes would silently misreport
/// block coordinates.
pub fn pair_clusters(
    first: &[Cluster],
    second: &[Cluster],
) -> Result<Vec<ClusterPair>, ReconcileError> {
    if first.len() != second.len() {
        return Err(ReconcileError::ClusterPairing {
            reason: format!(
                "the alignments produced {} and {} blocks",
                first.len(),
                second.len()
            ),
        });
    }
    first
        .iter()
        .zip(second)
        .enumerate()
        .map(|(i, (&f, &s))| {
            if f.matched != s.matched {
                Err(ReconcileError::ClusterPairing {
                    reason: format!("block {} is matched in one alignment only", i + 1),
                })
            } else {
                Ok(ClusterPair {
                    first: f,
                    second: s,
                })
            }
        })
        .collect()
}
