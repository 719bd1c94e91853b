//! Wallet summary: authorize the wallet, then report the session

use alloy_primitives::utils::format_ether;

use crate::core::{Network, QueryError};
use crate::infrastructure::ethereum::ChainReader;
use crate::infrastructure::wallet::{self, WalletProvider, WalletSession};

/// Connect the wallet (first authorized account), read the chain id from
/// the wallet and the balance from the node, and report both. The session
/// is returned alongside the lines so the app can hold on to it.
pub async fn wallet_summary(
    network: &Network,
    wallet: &dyn WalletProvider,
    reader: &dyn ChainReader,
) -> Result<(WalletSession, Vec<String>), QueryError> {
    let session = wallet::connect(wallet).await?;
    let chain_id = parse_chain_id(&session.chain_id_hex)?;
    let balance = reader.balance(session.address).await?;

    let address = session.address.to_string();
    let lines = vec![
        "Wallet connected".to_string(),
        format!("Network: {}", network.label),
        format!("chainId: {chain_id}"),
        format!("Address: {address}"),
        format!("ETH balance: {} ETH", format_ether(balance)),
        format!("Explorer: {}", network.address_link(&address)),
    ];

    Ok((session, lines))
}

/// Parse the wallet's hex chain id into its decimal form
fn parse_chain_id(hex: &str) -> Result<u64, QueryError> {
    let digits = hex.trim().strip_prefix("0x").unwrap_or(hex.trim());
    u64::from_str_radix(digits, 16)
        .map_err(|_| anyhow::anyhow!("Wallet returned malformed chain id: {hex}").into())
}
