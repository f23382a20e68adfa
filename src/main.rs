//! CLI entry point for the deformed hexagon tiling generator

use clap::Parser;
use vasarely::io::cli::{Cli, Generator};

fn main() -> vasarely::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    Generator::new(cli).run()?;
    Ok(())
}
