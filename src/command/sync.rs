use crate::error::Result;
use crate::fs::Transaction;
use crate::ops::sync_version;
use crate::rewrite::Strategy;
use clap::Args;
use std::path::PathBuf;

// Every flag has a default, so a bare invocation syncs `package.json` into
// `Cargo.toml` in the current directory.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// JSON manifest to read the version from
    #[arg(long, value_name = "PATH", default_value = "package.json")]
    pub source: PathBuf,

    /// Manifest whose version declaration is overwritten
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    pub target: PathBuf,

    /// How the version declaration is located and replaced
    #[arg(long, value_enum, default_value_t = Strategy::Line)]
    pub strategy: Strategy,

    /// Show what would change without writing the target
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn execute(args: SyncArgs) -> Result<()> {
    log::debug!(
        "Syncing {} -> {} using {:?} strategy",
        args.source.display(),
        args.target.display(),
        args.strategy
    );

    let rewriter = args.strategy.rewriter()?;
    let mut txn = Transaction::new(args.dry_run);

    let outcome = sync_version(&args.source, &args.target, rewriter.as_ref(), &mut txn)?;

    txn.commit()?;

    if args.dry_run {
        txn.print_summary();
        return Ok(());
    }

    println!(
        "Synced version {} to {}",
        outcome.version,
        outcome.target_name()
    );

    Ok(())
}
