//! Staged manifest write, applied atomically.
//!
//! The new content is staged with [`Transaction::update_file`] and applied by
//! [`Transaction::commit`]. The commit writes a temporary file next to the
//! target and renames it over the target, so a failed write never leaves a
//! truncated file behind: the target holds either its old or its new content.
//!
//! ## Example
//!
//! ```no_run
//! # use sync_version::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> sync_version::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(
//!     PathBuf::from("Cargo.toml"),
//!     "version = \"0.1.0\"\n".into(),
//!     "version = \"0.2.0\"\n".into(),
//! );
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SyncError};

use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A staged file write.
#[derive(Debug, Clone)]
pub struct Operation {
    pub path: PathBuf,
    /// Content the caller read; only used for the preview.
    pub original: String,
    pub new: String,
}

/// Lines that differ between the original and the staged content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: PathBuf,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Transaction holding the single file write of one run.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, `commit()` succeeds without touching the disk.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    staged: Option<Operation>,
    dry_run: bool,
    committed: bool,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            staged: None,
            dry_run,
            committed: false,
        }
    }

    /// Stages a full-content write of `path`, replacing any earlier one.
    ///
    /// Takes the original content from the caller so the file is not read a
    /// second time.
    pub fn update_file(&mut self, path: PathBuf, original: String, new: String) {
        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }

        if let Some(previous) = &self.staged {
            log::debug!("Replacing staged write for: {}", previous.path.display());
        }

        self.staged = Some(Operation {
            path,
            original,
            new,
        });
    }

    /// Applies the staged write.
    ///
    /// # Errors
    ///
    /// - `Write`: the target is read-only or the write failed; the target
    ///   keeps its previous content
    /// - `Other`: the transaction was already committed
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(SyncError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if let Some(op) = self.staged.as_ref().filter(|_| !self.dry_run) {
            write_atomic(&op.path, &op.new).map_err(|source| {
                log::error!("Failed to write {}: {}", op.path.display(), source);
                SyncError::Write {
                    path: op.path.clone(),
                    source,
                }
            })?;
            log::debug!("Updated: {}", op.path.display());
        }

        self.committed = true;
        Ok(())
    }

    pub fn len(&self) -> usize {
        usize::from(self.staged.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_none()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Returns the block of lines the staged write changes.
    ///
    /// Lines shared at the start and at the end are cut off, so a version
    /// that spans several lines still lines up with what it replaces.
    pub fn preview(&self) -> Option<Change> {
        let op = self.staged.as_ref()?;

        let before: Vec<&str> = op.original.lines().collect();
        let after: Vec<&str> = op.new.lines().collect();

        let prefix = before
            .iter()
            .zip(&after)
            .take_while(|(a, b)| a == b)
            .count();
        if prefix == before.len() && prefix == after.len() {
            return None;
        }

        let suffix = before[prefix..]
            .iter()
            .rev()
            .zip(after[prefix..].iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        let owned = |lines: &[&str]| -> Vec<String> {
            lines.iter().map(|line| line.to_string()).collect()
        };

        Some(Change {
            path: op.path.clone(),
            before: owned(&before[prefix..before.len() - suffix]),
            after: owned(&after[prefix..after.len() - suffix]),
        })
    }

    /// Prints the staged change to stdout.
    pub fn print_summary(&self) {
        let Some(change) = self.preview() else {
            println!("{}", "No changes needed".yellow());
            return;
        };

        if self.dry_run {
            println!("{}", "DRY RUN - No changes will be made".yellow().bold());
        }

        println!("\n{}", change.path.display().to_string().bold());
        for line in &change.before {
            println!("   {} {}", "-".red(), line.red());
        }
        for line in &change.after {
            println!("   {} {}", "+".green(), line.green());
        }

        println!();
        if self.dry_run {
            println!("Run without {} to apply.", "--dry-run".cyan());
        }
    }
}

/// Replaces `path` with `content` through a temporary file in the same
/// directory. The target's permissions carry over to the new file.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
