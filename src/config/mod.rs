use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// RPC endpoint override for a built-in target, matched by chain id.
/// The registry itself is fixed; only the endpoint URL can be swapped
/// (e.g. for a rate-limited public node).
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointOverride {
    pub chain_id: u64,
    pub rpc: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Vec<EndpointOverride>,

    /// Wallet daemon endpoint; the --wallet flag wins over this
    pub wallet: Option<String>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SCRY_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("scry").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("scry").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "scry", "scry")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
