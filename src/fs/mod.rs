//! Atomic manifest writes with transaction support.

pub mod transaction;

pub use transaction::{Change, Operation, Transaction};
