#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod ops;
pub mod rewrite;

pub use error::*;
pub use ops::{SyncOutcome, sync_version};

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    command::sync::execute(cli.args)
}
