//! Manifest access.
//!
//! - **`source`**: reads the version out of `package.json`
//! - **`target`**: rewrites the version declaration in `Cargo.toml`
//!
//! Paths are always passed in; the conventional file names only appear at the
//! command-line layer.

pub mod source;
pub mod target;

pub use source::read_version;
pub use target::update_target_version;
