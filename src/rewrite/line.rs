//! Line-anchored regex substitution.
//!
//! Matches `version = "..."` only where `version` starts a line, and only the
//! first such line:
//!
//! ```toml
//! [package]
//! version = "0.3.0"        # replaced
//!
//! [dependencies]
//! serde = { version = "1" } # not anchored, untouched
//! version = "9.9.9"        # second match, untouched
//! ```

use super::{Rewrite, VersionRewriter};
use crate::error::Result;
use regex::{NoExpand, Regex};

// CRLF mode lets a lone `\r` start a line too.
const VERSION_LINE: &str = r#"(?mR)^version\s*=\s*"[^"]*""#;

pub struct LineRewriter {
    pattern: Regex,
}

impl LineRewriter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(VERSION_LINE)?,
        })
    }
}

impl VersionRewriter for LineRewriter {
    fn rewrite(&self, content: &str, version: &str) -> Result<Rewrite> {
        let Some(found) = self.pattern.find(content) else {
            return Ok(Rewrite::unchanged(content));
        };

        log::debug!(
            "Matched version declaration at byte {}: {}",
            found.start(),
            found.as_str()
        );

        // NoExpand keeps `$` in the version literal.
        let replacement = format!(r#"version = "{}""#, version);
        let content = self
            .pattern
            .replacen(content, 1, NoExpand(&replacement))
            .into_owned();

        Ok(Rewrite {
            content,
            matched: true,
        })
    }
}
