//! Unit tests for the CLI surface.

use clap::Parser;
use msacmp::args::CompareArgs;
use std::path::PathBuf;

fn parse_args(args: &[&str]) -> CompareArgs {
    let mut all_args = vec!["msacmp"];
    all_args.extend_from_slice(args);
    CompareArgs::try_parse_from(all_args).unwrap()
}

#[test]
fn test_default_values() {
    let args = parse_args(&["first.fasta", "second.fasta", "out.tsv"]);
    assert_eq!(args.ma1, PathBuf::from("first.fasta"));
    assert_eq!(args.ma2, PathBuf::from("second.fasta"));
    assert_eq!(args.out, PathBuf::from("out.tsv"));
    assert_eq!(args.visualise, None);
    assert_eq!(args.percent, false);
    assert_eq!(args.verbose, false);
}

#[test]
fn test_visualise_without_value_defaults_to_five() {
    let args = parse_args(&["a.fasta", "b.fasta", "out.tsv", "-v"]);
    assert_eq!(args.visualise, Some(5));
}

#[test]
fn test_visualise_with_custom_block_count() {
    let args = parse_args(&["a.fasta", "b.fasta", "out.tsv", "--visualise", "3"]);
    assert_eq!(args.visualise, Some(3));
}

#[test]
fn test_percent_flag() {
    let args = parse_args(&["a.fasta", "b.fasta", "out.tsv", "-p"]);
    assert!(args.percent);
}

#[test]
fn test_missing_positionals_are_rejected() {
    let result = CompareArgs::try_parse_from(["msacmp", "a.fasta", "b.fasta"]);
    assert!(result.is_err());
}
