//! Drive the three query operations against in-crate mocks
//!
//! The mock reader counts every read it serves, which pins down the
//! "validate before any network call" and "no balance read after a
//! failed wallet authorization" properties.

use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::utils::format_ether;
use alloy_primitives::{Address, U256};
use anyhow::Result;

use scry::core::{QueryError, Registry};
use scry::infrastructure::ethereum::{BlockHeader, ChainReader};
use scry::infrastructure::wallet::WalletProvider;
use scry::queries;

const PROBE_ADDR: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
const ONE_AND_A_HALF_ETH: u128 = 1_500_000_000_000_000_000;

struct MockReader {
    balance: U256,
    nonce: u64,
    block_number: u64,
    gas_price: u128,
    header: BlockHeader,
    calls: AtomicUsize,
}

impl MockReader {
    fn new() -> Self {
        Self {
            balance: U256::from(ONE_AND_A_HALF_ETH),
            nonce: 7,
            block_number: 12_345_678,
            gas_price: 1_000_042,
            header: BlockHeader {
                number: 12_345_678,
                timestamp: 1_700_000_000,
                gas_used: 21_008_268,
                gas_limit: 45_000_000,
            },
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ChainReader for MockReader {
    async fn balance(&self, _address: Address) -> Result<U256> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.balance)
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.nonce)
    }

    async fn block_number(&self) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.block_number)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.gas_price)
    }

    async fn latest_block(&self) -> Result<BlockHeader> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.header)
    }

    fn endpoint(&self) -> &str {
        "mock://chain"
    }
}

struct MockWallet {
    accounts: Vec<String>,
    chain_id_hex: String,
}

#[async_trait::async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        Ok(self.accounts.clone())
    }

    async fn chain_id_hex(&self) -> Result<String> {
        Ok(self.chain_id_hex.clone())
    }
}

#[tokio::test]
async fn probe_rejects_malformed_address_without_reads() {
    let registry = Registry::builtin();
    let reader = MockReader::new();

    let err = queries::address_probe(registry.active(), &reader, "0x123")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidAddress));
    assert_eq!(reader.call_count(), 0);
}

#[tokio::test]
async fn probe_rejects_empty_input_without_reads() {
    let registry = Registry::builtin();
    let reader = MockReader::new();

    let err = queries::address_probe(registry.active(), &reader, "   ")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidAddress));
    assert_eq!(reader.call_count(), 0);
}

#[tokio::test]
async fn probe_reports_balance_nonce_and_explorer_link() {
    let registry = Registry::builtin();
    let network = registry.active();
    let reader = MockReader::new();

    let lines = queries::address_probe(network, &reader, PROBE_ADDR)
        .await
        .unwrap();

    // Exactly the two reads: balance and nonce
    assert_eq!(reader.call_count(), 2);

    let address: Address = PROBE_ADDR.parse().unwrap();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Address probe");
    assert_eq!(lines[1], format!("Network: {}", network.label));
    assert_eq!(lines[2], format!("Address: {address}"));
    assert_eq!(
        lines[3],
        format!(
            "ETH balance: {} ETH",
            format_ether(U256::from(ONE_AND_A_HALF_ETH))
        )
    );
    assert_eq!(lines[4], "Transaction count: 7");
    assert_eq!(lines[5], format!("{}/address/{address}", network.explorer));
}

#[tokio::test]
async fn snapshot_reports_literal_gas_fields_and_block_link() {
    let registry = Registry::builtin();
    let network = registry.active();
    let reader = MockReader::new();

    let lines = queries::snapshot(network, &reader).await.unwrap();

    assert_eq!(reader.call_count(), 3);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Snapshot");
    assert_eq!(lines[1], format!("Network: {}", network.label));
    assert_eq!(lines[2], "Block height: 12345678");
    assert_eq!(lines[3], "Timestamp: 1700000000");
    assert_eq!(lines[4], "Gas price (wei): 1000042");
    // Gas used/limit are the literal node integers
    assert_eq!(lines[5], "Gas used: 21008268");
    assert_eq!(lines[6], "Gas limit: 45000000");
    assert_eq!(lines[7], format!("{}/block/12345678", network.explorer));
}

#[tokio::test]
async fn wallet_summary_fails_without_accounts_and_skips_balance() {
    let registry = Registry::builtin();
    let reader = MockReader::new();
    let wallet = MockWallet {
        accounts: Vec::new(),
        chain_id_hex: "0x14a34".to_string(),
    };

    let err = queries::wallet_summary(registry.active(), &wallet, &reader)
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::NoAccount));
    assert_eq!(reader.call_count(), 0);
}

#[tokio::test]
async fn wallet_summary_reports_first_account_and_decimal_chain_id() {
    let registry = Registry::builtin();
    let network = registry.active();
    let reader = MockReader::new();
    let wallet = MockWallet {
        accounts: vec![
            PROBE_ADDR.to_string(),
            "0x0000000000000000000000000000000000000001".to_string(),
        ],
        chain_id_hex: "0x14a34".to_string(),
    };

    let (session, lines) = queries::wallet_summary(network, &wallet, &reader)
        .await
        .unwrap();

    // Only the balance read hits the chain
    assert_eq!(reader.call_count(), 1);

    let address: Address = PROBE_ADDR.parse().unwrap();
    assert_eq!(session.address, address);
    assert_eq!(session.chain_id_hex, "0x14a34");

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Wallet connected");
    assert_eq!(lines[1], format!("Network: {}", network.label));
    assert_eq!(lines[2], "chainId: 84532");
    assert_eq!(lines[3], format!("Address: {address}"));
    assert_eq!(
        lines[5],
        format!("Explorer: {}/address/{address}", network.explorer)
    );
}

#[tokio::test]
async fn operations_follow_the_network_they_are_given() {
    // The same reader/wallet pair reported under either target carries
    // that target's label and explorer base - no cross-target leakage.
    let mut registry = Registry::builtin();
    registry.toggle();
    let mainnet = registry.active();
    assert_eq!(mainnet.chain_id, 8453);

    let reader = MockReader::new();
    let lines = queries::snapshot(mainnet, &reader).await.unwrap();

    assert_eq!(lines[1], "Network: Base Mainnet");
    assert!(lines[7].starts_with("https://basescan.org/block/"));
}
