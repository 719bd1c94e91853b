//! Read-only chain access over an Alloy HTTP provider
//!
//! The latest-block header is fetched as raw JSON to support all EVM
//! chains including L2s like Optimism/Base that carry non-standard
//! transaction types.

use alloy::network::Ethereum;
use alloy::providers::{
    fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
    Identity, Provider, ProviderBuilder, RootProvider,
};
use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};

use crate::core::Network;

/// Header fields of the latest block the dashboard reports
#[derive(Debug, Clone, Copy)]
pub struct BlockHeader {
    pub number: u64,
    pub timestamp: u64,
    pub gas_used: u64,
    pub gas_limit: u64,
}

/// Read operations the query layer needs from a node
///
/// Single-shot best-effort reads: any transport or node error propagates
/// unchanged to the caller. No retry, no backoff, no timeout.
#[async_trait::async_trait]
pub trait ChainReader: Send + Sync {
    /// Native-currency balance of an address, in wei
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Transaction count (nonce) of an address
    async fn transaction_count(&self, address: Address) -> Result<u64>;

    /// Current head block number
    async fn block_number(&self) -> Result<u64>;

    /// Current gas price, in wei
    async fn gas_price(&self) -> Result<u128>;

    /// Header fields of the latest block
    async fn latest_block(&self) -> Result<BlockHeader>;

    /// RPC endpoint this reader is bound to
    fn endpoint(&self) -> &str;
}

type HttpFillProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
    Ethereum,
>;

/// Stateless HTTP reader bound to one endpoint
pub struct AlloyChainReader {
    provider: HttpFillProvider,
    endpoint: String,
}

/// Build a reader for the given target's RPC endpoint. Cheap enough to
/// construct per action; no pooling, no connection reuse guarantee.
pub fn make_reader(network: &Network) -> Result<Box<dyn ChainReader>> {
    let rpc_url = network.rpc.parse().context("Invalid RPC URL")?;
    let provider = ProviderBuilder::new().connect_http(rpc_url);
    Ok(Box::new(AlloyChainReader {
        provider,
        endpoint: network.rpc.clone(),
    }))
}

#[async_trait::async_trait]
impl ChainReader for AlloyChainReader {
    async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn transaction_count(&self, address: Address) -> Result<u64> {
        Ok(self.provider.get_transaction_count(address).await?)
    }

    async fn block_number(&self) -> Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn gas_price(&self) -> Result<u128> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn latest_block(&self) -> Result<BlockHeader> {
        let json: serde_json::Value = self
            .provider
            .raw_request("eth_getBlockByNumber".into(), ("latest", false))
            .await?;

        if json.is_null() {
            anyhow::bail!("Node returned no latest block");
        }

        parse_block_header(&json)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse the header fields we report out of a raw JSON block
fn parse_block_header(json: &serde_json::Value) -> Result<BlockHeader> {
    Ok(BlockHeader {
        number: parse_hex_u64(field(json, "number"))?,
        timestamp: parse_hex_u64(field(json, "timestamp"))?,
        gas_used: parse_hex_u64(field(json, "gasUsed"))?,
        gas_limit: parse_hex_u64(field(json, "gasLimit"))?,
    })
}

fn field<'a>(json: &'a serde_json::Value, name: &str) -> &'a str {
    json.get(name).and_then(|v| v.as_str()).unwrap_or("0x0")
}

/// Parse hex string to u64
fn parse_hex_u64(s: &str) -> Result<u64> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(s, 16).context("Failed to parse hex u64")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Registry;

    #[test]
    fn make_reader_binds_to_the_target_endpoint() {
        let registry = Registry::builtin();
        for network in registry.networks() {
            let reader = make_reader(network).unwrap();
            assert_eq!(reader.endpoint(), network.rpc);
        }
    }

    #[test]
    fn make_reader_rejects_malformed_endpoint() {
        let mut network = Registry::builtin().active().clone();
        network.rpc = "not a url".to_string();
        assert!(make_reader(&network).is_err());
    }

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("0x0").unwrap(), 0);
        assert_eq!(parse_hex_u64("0x2aea540").unwrap(), 45_000_000);
        assert_eq!(parse_hex_u64("1f").unwrap(), 31);
        assert!(parse_hex_u64("0xzz").is_err());
    }

    #[test]
    fn test_parse_block_header() {
        let json = serde_json::json!({
            "number": "0xbc614e",
            "timestamp": "0x6553f100",
            "gasUsed": "0x1408f8c",
            "gasLimit": "0x2aea540",
            "miner": "0x4200000000000000000000000000000000000011",
        });
        let header = parse_block_header(&json).unwrap();
        assert_eq!(header.number, 12_345_678);
        assert_eq!(header.gas_used, 21_008_268);
        assert_eq!(header.gas_limit, 45_000_000);
    }

    #[test]
    fn test_missing_field_defaults_to_zero() {
        let json = serde_json::json!({ "number": "0x1" });
        let header = parse_block_header(&json).unwrap();
        assert_eq!(header.number, 1);
        assert_eq!(header.timestamp, 0);
    }
}
