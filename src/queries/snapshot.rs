//! Chain snapshot: head block, gas price, latest header

use crate::core::{Network, QueryError};
use crate::infrastructure::ethereum::ChainReader;

/// Read block number, gas price, and the latest block header
/// concurrently; there is no ordering dependency between them.
pub async fn snapshot(
    network: &Network,
    reader: &dyn ChainReader,
) -> Result<Vec<String>, QueryError> {
    let (block_number, gas_price, block) = tokio::try_join!(
        reader.block_number(),
        reader.gas_price(),
        reader.latest_block()
    )?;

    Ok(vec![
        "Snapshot".to_string(),
        format!("Network: {}", network.label),
        format!("Block height: {block_number}"),
        format!("Timestamp: {}", block.timestamp),
        format!("Gas price (wei): {gas_price}"),
        format!("Gas used: {}", block.gas_used),
        format!("Gas limit: {}", block.gas_limit),
        network.block_link(block_number),
    ])
}
