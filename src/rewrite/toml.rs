//! Format-preserving TOML edit of the version field.
//!
//! Looks for a string version in this order:
//!
//! 1. `package.version`
//! 2. `workspace.package.version`
//!
//! `version.workspace = true` is not a string and is skipped. Comments,
//! ordering and whitespace around the value are kept.

use super::{Rewrite, VersionRewriter};
use crate::error::Result;
use toml_edit::{DocumentMut, Item, Value};

const VERSION_PATHS: &[&[&str]] = &[&["package", "version"], &["workspace", "package", "version"]];

pub struct TomlRewriter;

impl VersionRewriter for TomlRewriter {
    fn rewrite(&self, content: &str, version: &str) -> Result<Rewrite> {
        let mut doc: DocumentMut = content.parse()?;

        for path in VERSION_PATHS {
            let Some(item) = lookup(&mut doc, path) else {
                continue;
            };

            if set_string(item, version) {
                log::debug!("Set {} in TOML document", path.join("."));
                return Ok(Rewrite {
                    content: doc.to_string(),
                    matched: true,
                });
            }
        }

        Ok(Rewrite::unchanged(content))
    }
}

fn lookup<'a>(doc: &'a mut DocumentMut, path: &[&str]) -> Option<&'a mut Item> {
    let mut item = doc.as_item_mut();
    for key in path {
        item = item.as_table_like_mut()?.get_mut(key)?;
    }
    Some(item)
}

/// Overwrites a string value, keeping its decor. Returns `false` for anything
/// that is not a string.
fn set_string(item: &mut Item, version: &str) -> bool {
    let Some(value) = item.as_value_mut() else {
        return false;
    };
    if !value.is_str() {
        return false;
    }

    let decor = value.decor().clone();
    *value = Value::from(version);
    *value.decor_mut() = decor;
    true
}
