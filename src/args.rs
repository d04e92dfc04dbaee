use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "msacmp")]
#[command(version = "0.1.0")]
#[command(about = "Compare two multiple alignments of the same sequences and report discordant blocks", long_about = None)]
pub struct CompareArgs {
    /// First multiple alignment in FASTA format
    pub ma1: PathBuf,
    /// Second multiple alignment in FASTA format
    pub ma2: PathBuf,
    /// Output TSV of discordant block coordinate pairs
    pub out: PathBuf,
    /// Print a human-readable block visualisation to stdout, N blocks per line
    #[arg(short, long, value_name = "N", num_args = 0..=1, default_missing_value = "5")]
    pub visualise: Option<usize>,
    /// Print the percentage of matched columns in each alignment
    #[arg(short, long, default_value_t = false)]
    pub percent: bool,
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
