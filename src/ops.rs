//! The sync operation: source version in, target manifest rewritten.
//!
//! Steps run strictly in order, each finishing before the next starts:
//!
//! 1. Read the source manifest and extract `version`
//! 2. Read the target manifest as text
//! 3. Rewrite the version declaration
//! 4. Stage the write in the transaction
//!
//! Any error aborts before the transaction is committed, so the target is
//! never half-updated.

use crate::error::Result;
use crate::fs::transaction::Transaction;
use crate::manifest::{read_version, update_target_version};
use crate::rewrite::VersionRewriter;
use std::path::{Path, PathBuf};

/// What a sync run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub version: String,
    pub target: PathBuf,
    /// `false` when the target had no version declaration.
    pub matched: bool,
}

impl SyncOutcome {
    /// Final path component of the target, for messages.
    pub fn target_name(&self) -> String {
        self.target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.display().to_string())
    }
}

/// Copies `version` from `source` into `target`, staging the write in `txn`.
///
/// The source is read before the target is touched; a bad source means the
/// target is never read.
pub fn sync_version(
    source: &Path,
    target: &Path,
    rewriter: &dyn VersionRewriter,
    txn: &mut Transaction,
) -> Result<SyncOutcome> {
    log::debug!("Reading source manifest: {}", source.display());
    let version = read_version(source)?;

    log::debug!("Updating target manifest: {}", target.display());
    let matched = update_target_version(target, &version, rewriter, txn)?;

    Ok(SyncOutcome {
        version,
        target: target.to_path_buf(),
        matched,
    })
}
