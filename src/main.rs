use anyhow::Result;
use clap::Parser;
use msacmp::args::CompareArgs;
use msacmp::engine;

fn main() -> Result<()> {
    let args = CompareArgs::parse();
    engine::run(args)
}
