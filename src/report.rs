//! Discordant-block reporting: the TSV table, the optional block
//! visualisation, and the matched-column percentage summary.

use crate::cluster::ClusterPair;
use crate::matcher::Certainty;
use anyhow::Result;
use std::io::Write;

/// Write the discordant-block table: a `F1-L1\tF2-L2` header, then one
/// line of 1-based inclusive ranges per unmatched block pair.
pub fn write_tsv<W: Write>(writer: &mut W, pairs: &[ClusterPair]) -> Result<()> {
    writeln!(writer, "F1-L1\tF2-L2")?;
    for pair in pairs.iter().filter(|p| !p.first.matched) {
        writeln!(
            writer,
            "{}-{}\t{}-{}",
            pair.first.start, pair.first.end, pair.second.start, pair.second.end
        )?;
    }
    Ok(())
}

/// Render blocks as two rows of `start-end` cells, `per_line` cells per
/// group. A matched pair occupies one cell on both rows, padded to a
/// common width; an unmatched pair occupies two cells, each range
/// shadowed by a dash placeholder of its own width on the other row.
pub fn write_visualisation<W: Write>(
    writer: &mut W,
    pairs: &[ClusterPair],
    per_line: usize,
) -> Result<()> {
    let per_line = per_line.max(1);
    let mut first_cells: Vec<String> = Vec::new();
    let mut second_cells: Vec<String> = Vec::new();

    for pair in pairs {
        let f_out = format!("{}-{}", pair.first.start, pair.first.end);
        let s_out = format!("{}-{}", pair.second.start, pair.second.end);
        if pair.first.matched {
            let width = f_out.len().max(s_out.len());
            first_cells.push(format!("{:<width$}", f_out));
            second_cells.push(format!("{:<width$}", s_out));
        } else {
            second_cells.push("-".repeat(f_out.len()));
            first_cells.push(f_out);
            first_cells.push("-".repeat(s_out.len()));
            second_cells.push(s_out);
        }
    }

    for (f_chunk, s_chunk) in first_cells
        .chunks(per_line)
        .zip(second_cells.chunks(per_line))
    {
        writeln!(writer, "{}", f_chunk.join("\t"))?;
        writeln!(writer, "{}", s_chunk.join("\t"))?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Percentage of columns in each alignment that take part in a matched
/// column pair.
pub fn percent_matched(first: &Certainty, second: &Certainty) -> (f64, f64) {
    let pct = |certainty: &Certainty| {
        if certainty.is_empty() {
            0.0
        } else {
            100.0 * certainty.iter().filter(|m| m.is_some()).count() as f64
                / certainty.len() as f64
        }
    };
    (pct(first), pct(second))
}
