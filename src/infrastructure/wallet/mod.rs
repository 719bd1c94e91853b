//! Wallet daemon access: account authorization and chain id
//!
//! The wallet is an external collaborator reached over JSON-RPC using the
//! same two methods a browser wallet exposes: `eth_requestAccounts` and
//! `eth_chainId`. The session holds the first authorized account; there is
//! no multi-account handling and no explicit disconnect. A new `connect`
//! supersedes the previous session.

use std::str::FromStr;

use alloy::providers::{Provider, RootProvider};
use alloy_primitives::Address;
use anyhow::{Context, Result};

use crate::core::QueryError;

/// Account authorization as the wallet exposes it
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Trigger the wallet's account-authorization flow
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Chain id as the wallet reports it (hex string, e.g. "0x14a34")
    async fn chain_id_hex(&self) -> Result<String>;
}

/// Live connection handle: the authorized account plus the chain id the
/// wallet reported at connect time
#[derive(Debug, Clone)]
pub struct WalletSession {
    pub address: Address,
    pub chain_id_hex: String,
}

/// Wallet daemon reached over HTTP JSON-RPC (Frame-style local wallet)
pub struct RpcWallet {
    provider: RootProvider,
    endpoint: String,
}

impl RpcWallet {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = endpoint.parse().context("Invalid wallet URL")?;
        Ok(Self {
            provider: RootProvider::new_http(url),
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        Ok(self
            .provider
            .raw_request("eth_requestAccounts".into(), ())
            .await?)
    }

    async fn chain_id_hex(&self) -> Result<String> {
        Ok(self.provider.raw_request("eth_chainId".into(), ()).await?)
    }
}

/// Authorize and take the first account the wallet returns
pub async fn connect(wallet: &dyn WalletProvider) -> Result<WalletSession, QueryError> {
    let accounts = wallet.request_accounts().await?;
    let Some(first) = accounts.first() else {
        return Err(QueryError::NoAccount);
    };
    let address = Address::from_str(first)
        .map_err(|err| anyhow::anyhow!("Wallet returned malformed address: {err}"))?;
    let chain_id_hex = wallet.chain_id_hex().await?;

    Ok(WalletSession {
        address,
        chain_id_hex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_binds_to_the_given_endpoint() {
        let wallet = RpcWallet::new("http://127.0.0.1:1248").unwrap();
        assert_eq!(wallet.endpoint(), "http://127.0.0.1:1248");
    }

    #[test]
    fn rejects_malformed_endpoint() {
        assert!(RpcWallet::new("not a url").is_err());
    }
}
