//! Target manifest (`Cargo.toml`) updates.

use crate::error::{Result, SyncError};
use crate::fs::transaction::Transaction;
use crate::rewrite::VersionRewriter;
use std::fs;
use std::path::Path;

/// Rewrites the version declaration of a target manifest.
///
/// Reads the file once as text, applies `rewriter` and stages the result in
/// `txn`. The write is always staged, even when nothing matched, so the file
/// is rewritten with identical content in that case.
///
/// Returns `true` if a version declaration was found.
///
/// # Errors
///
/// - `Read`: file missing or unreadable
/// - `Toml`: invalid TOML (TOML strategy only)
///
/// # Examples
///
/// ```no_run
/// # use sync_version::manifest::update_target_version;
/// # use sync_version::fs::Transaction;
/// # use sync_version::rewrite::LineRewriter;
/// # use std::path::Path;
/// # fn example() -> sync_version::error::Result<()> {
/// let mut txn = Transaction::new(false);
/// update_target_version(
///     Path::new("Cargo.toml"),
///     "0.4.1",
///     &LineRewriter::new()?,
///     &mut txn,
/// )?;
/// txn.commit()?;
/// # Ok(())
/// # }
/// ```
pub fn update_target_version(
    path: &Path,
    version: &str,
    rewriter: &dyn VersionRewriter,
    txn: &mut Transaction,
) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rewriter.rewrite(&original, version)?;

    if !rewrite.matched {
        log::warn!(
            "No version declaration found in {}, leaving it unchanged",
            path.display()
        );
    }

    txn.update_file(path.to_path_buf(), original, rewrite.content);
    Ok(rewrite.matched)
}
