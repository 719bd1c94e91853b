//! Error taxonomy for the query operations
//!
//! Transport and node errors are passed through unmodified; there is no
//! retry or recovery. Every failure is converted to its textual
//! representation and rendered as the output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed address string supplied to the address probe
    #[error("Invalid address")]
    InvalidAddress,

    /// Wallet authorization returned an empty account list
    #[error("No address returned")]
    NoAccount,

    /// Transport, node, or wallet error, surfaced as-is
    #[error(transparent)]
    Rpc(#[from] anyhow::Error),
}
