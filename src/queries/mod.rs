//! The three read operations behind the dashboard actions
//!
//! Each operation validates its own inputs synchronously, issues its
//! independent reads concurrently, and returns a labeled line sequence
//! for the output surface. Failures never produce a partial result.

mod probe;
mod snapshot;
mod wallet;

pub use probe::address_probe;
pub use snapshot::snapshot;
pub use wallet::wallet_summary;
