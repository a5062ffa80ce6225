//! Whole-file read and rewrite primitives.
//!
//! - `atomic_write` stages content in a sibling temporary file and renames it
//!   over the target.
//! - `overwrite` truncates and writes in place.
//! - `read` loads a whole file.

mod error;
mod rw;

pub use error::{Error, Result};
pub use rw::{WriteOptions, atomic_write, overwrite, read};
