//! Plain-text checksum ledger.
//!
//! A ledger is a sequence of `<hex-digest>  <filename>` lines. Recording a run
//! reads the whole file (a missing or unreadable ledger counts as empty),
//! appends one line per digest in canonical algorithm order, and writes the
//! whole content back. Nothing is deduplicated.

pub use entry::{LedgerEntry, SEPARATOR};
pub use error::{Error, Result};
pub use ledger::{Ledger, LedgerOptions, WriteMode, append};

mod entry;
mod error;
mod ledger;
