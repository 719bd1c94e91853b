//! Address probe: balance and nonce for a free-text address

use std::str::FromStr;

use alloy_primitives::utils::format_ether;
use alloy_primitives::Address;

use crate::core::{Network, QueryError};
use crate::infrastructure::ethereum::ChainReader;

/// Validate the input, then read balance and transaction count
/// concurrently. A malformed address fails before any read is issued.
pub async fn address_probe(
    network: &Network,
    reader: &dyn ChainReader,
    input: &str,
) -> Result<Vec<String>, QueryError> {
    let address = Address::from_str(input.trim()).map_err(|_| QueryError::InvalidAddress)?;

    let (balance, nonce) = tokio::try_join!(
        reader.balance(address),
        reader.transaction_count(address)
    )?;

    Ok(vec![
        "Address probe".to_string(),
        format!("Network: {}", network.label),
        format!("Address: {address}"),
        format!("ETH balance: {} ETH", format_ether(balance)),
        format!("Transaction count: {nonce}"),
        network.address_link(&address.to_string()),
    ])
}
