use crate::command::sync::SyncArgs;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sync-version",
    version,
    about = "Copy the version from package.json into Cargo.toml"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SyncArgs,
}
