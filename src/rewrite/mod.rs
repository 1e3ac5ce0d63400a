//! Version declaration rewriting.
//!
//! A [`VersionRewriter`] takes the full text of a target manifest and returns
//! it with the version declaration replaced. Two strategies exist:
//!
//! - **`line`**: a line-anchored regex substitution that treats the manifest as
//!   plain text (the default)
//! - **`toml`**: a format-preserving edit through `toml_edit`
//!
//! Both leave every byte outside the version value untouched.

pub mod line;
pub mod toml;

pub use line::LineRewriter;
pub use toml::TomlRewriter;

use crate::error::Result;
use clap::ValueEnum;

/// Output of a single rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The full manifest text after substitution.
    pub content: String,
    /// Whether a version declaration was found.
    ///
    /// When `false`, `content` equals the input.
    pub matched: bool,
}

impl Rewrite {
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            matched: false,
        }
    }
}

/// Replaces the version declaration in manifest text.
pub trait VersionRewriter {
    fn rewrite(&self, content: &str, version: &str) -> Result<Rewrite>;
}

/// Rewrite strategy selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Replace the first line starting with `version = "..."`
    #[default]
    Line,
    /// Edit `package.version` in the parsed TOML document
    Toml,
}

impl Strategy {
    pub fn rewriter(self) -> Result<Box<dyn VersionRewriter>> {
        Ok(match self {
            Strategy::Line => Box::new(LineRewriter::new()?),
            Strategy::Toml => Box::new(TomlRewriter),
        })
    }
}
