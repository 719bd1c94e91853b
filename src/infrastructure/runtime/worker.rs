//! Async worker - runs in the Tokio runtime and performs query operations
//!
//! Each command is spawned as an independent task with no cancellation:
//! overlapping actions race and the last event applied wins on the output
//! surface. A fresh reader is built per action.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;

use crate::core::{Network, QueryError};
use crate::infrastructure::ethereum::make_reader;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};
use crate::infrastructure::wallet::RpcWallet;
use crate::queries;

/// Run the async worker loop
pub async fn run_async_worker(
    wallet_endpoint: String,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    loop {
        while let Ok(cmd) = cmd_rx.try_recv() {
            match cmd {
                RuntimeCommand::Shutdown => return Ok(()),

                RuntimeCommand::ConnectWallet { network } => {
                    let evt_tx = evt_tx.clone();
                    let wallet_endpoint = wallet_endpoint.clone();
                    tokio::spawn(async move {
                        connect_wallet(network, wallet_endpoint, evt_tx).await;
                    });
                }

                RuntimeCommand::Snapshot { network } => {
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        report(snapshot(network).await, &evt_tx);
                    });
                }

                RuntimeCommand::Probe { network, address } => {
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        report(probe(network, address).await, &evt_tx);
                    });
                }
            }
        }

        // Small yield to prevent busy loop
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

async fn snapshot(network: Network) -> Result<Vec<String>, QueryError> {
    let reader = make_reader(&network)?;
    queries::snapshot(&network, reader.as_ref()).await
}

async fn probe(network: Network, address: String) -> Result<Vec<String>, QueryError> {
    let reader = make_reader(&network)?;
    queries::address_probe(&network, reader.as_ref(), &address).await
}

async fn connect_wallet(network: Network, wallet_endpoint: String, evt_tx: Sender<RuntimeEvent>) {
    let result = async {
        let wallet = RpcWallet::new(&wallet_endpoint)?;
        let reader = make_reader(&network)?;
        queries::wallet_summary(&network, &wallet, reader.as_ref()).await
    }
    .await;

    match result {
        Ok((session, lines)) => {
            let _ = evt_tx.send(RuntimeEvent::WalletConnected {
                address: session.address.to_string(),
                chain_id_hex: session.chain_id_hex,
            });
            let _ = evt_tx.send(RuntimeEvent::Report { lines });
        }
        Err(err) => {
            let _ = evt_tx.send(RuntimeEvent::Error {
                message: err.to_string(),
            });
        }
    }
}

fn report(result: Result<Vec<String>, QueryError>, evt_tx: &Sender<RuntimeEvent>) {
    match result {
        Ok(lines) => {
            let _ = evt_tx.send(RuntimeEvent::Report { lines });
        }
        Err(err) => {
            let _ = evt_tx.send(RuntimeEvent::Error {
                message: err.to_string(),
            });
        }
    }
}
