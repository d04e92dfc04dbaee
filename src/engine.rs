//! Pipeline driver: load and validate the two alignments, derive
//! coordinate streams, match columns, compress into blocks, report.

use crate::args::CompareArgs;
use crate::cluster::{compress, pair_clusters};
use crate::coords::map_alignment;
use crate::input::{canonical_order, check_same_names, read_alignment};
use crate::matcher::match_columns;
use crate::report::{percent_matched, write_tsv, write_visualisation};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn run(args: CompareArgs) -> Result<()> {
    if args.verbose {
        eprintln!("[INFO] Reading alignments...");
    }
    let first = read_alignment(&args.ma1)
        .with_context(|| format!("failed to read first alignment {}", args.ma1.display()))?;
    let second = read_alignment(&args.ma2)
        .with_context(|| format!("failed to read second alignment {}", args.ma2.display()))?;
    check_same_names(&first, &second)?;

    let order = canonical_order(&first);
    let first_map = map_alignment(&first, &order)?;
    let second_map = map_alignment(&second, &order)?;
    if args.verbose {
        eprintln!(
            "[INFO] Matching {} x {} columns over {} sequences",
            first_map.columns,
            second_map.columns,
            order.len()
        );
    }

    let (first_certainty, second_certainty) = match_columns(&first_map, &second_map);
    let pairs = pair_clusters(&compress(&first_certainty), &compress(&second_certainty))?;

    if let Some(per_line) = args.visualise {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_visualisation(&mut out, &pairs, per_line)?;
    }
    if args.percent {
        let (first_pct, second_pct) = percent_matched(&first_certainty, &second_certainty);
        println!("Matched columns in first alignment: {:.2}%", first_pct);
        println!("Matched columns in second alignment: {:.2}%", second_pct);
    }

    // The output file is only created once the whole reconciliation has
    // succeeded, so a failed run leaves no partial table behind.
    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    write_tsv(&mut writer, &pairs)?;
    writer.flush()?;
    if args.verbose {
        eprintln!(
            "[INFO] Wrote {} discordant block pairs to {}",
            pairs.iter().filter(|p| !p.first.matched).count(),
            args.out.display()
        );
    }
    Ok(())
}
