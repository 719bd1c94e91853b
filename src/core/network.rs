//! Supported network targets and the active selector
//!
//! The registry is a fixed ordered pair (test network first) owned by the
//! app and passed into operations by value, never read through a global.

/// A chain target the inspector can point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub rpc: String,
    pub explorer: String,
    pub label: String,
}

impl Network {
    pub fn address_link(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer, address)
    }

    pub fn block_link(&self, number: u64) -> String {
        format!("{}/block/{}", self.explorer, number)
    }
}

/// Fixed ordered list of targets plus the active selection
#[derive(Debug, Clone)]
pub struct Registry {
    networks: Vec<Network>,
    active: usize,
}

impl Registry {
    /// The two built-in targets, test network first. Startup default is
    /// the first entry.
    pub fn builtin() -> Self {
        Self {
            networks: vec![
                Network {
                    chain_id: 84532,
                    rpc: "https://sepolia.base.org".to_string(),
                    explorer: "https://sepolia.basescan.org".to_string(),
                    label: "Base Sepolia".to_string(),
                },
                Network {
                    chain_id: 8453,
                    rpc: "https://mainnet.base.org".to_string(),
                    explorer: "https://basescan.org".to_string(),
                    label: "Base Mainnet".to_string(),
                },
            ],
            active: 0,
        }
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn active(&self) -> &Network {
        &self.networks[self.active]
    }

    /// Select an entry by position. Out-of-range indices are ignored; the
    /// only callers pick from the registry itself.
    pub fn set_active(&mut self, index: usize) {
        if index < self.networks.len() {
            self.active = index;
        }
    }

    /// Advance to the next entry. With two entries this flips between
    /// them, so invoking it twice round-trips.
    pub fn toggle(&mut self) -> &Network {
        self.active = (self.active + 1) % self.networks.len();
        self.active()
    }

    /// Replace the RPC endpoint of a built-in target, matched by chain id.
    /// Unknown chain ids are ignored; order and count never change.
    pub fn override_rpc(&mut self, chain_id: u64, rpc: String) {
        if let Some(network) = self
            .networks
            .iter_mut()
            .find(|network| network.chain_id == chain_id)
        {
            network.rpc = rpc;
        }
    }
}
