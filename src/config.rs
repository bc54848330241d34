use serde::{Deserialize, Serialize};

/// Contract descriptor: everything the read/write layers need to know about
/// the deployed sale contract. Built once and passed into services at
/// construction, never read from ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    pub required_chain_id: u64,
    pub sale_start_grace_secs: i64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            required_chain_id: 31337,
            sale_start_grace_secs: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub rpc_url: String,
    pub poll_interval_ms: u32,
    pub contract: ContractConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            poll_interval_ms: 5_000,
            contract: ContractConfig::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    /// (loaded from .env by build.rs), falling back to localhost defaults.
    pub fn from_env() -> Self {
        Self {
            rpc_url: option_env!("RPC_URL")
                .unwrap_or("http://localhost:8545").to_string(),
            poll_interval_ms: option_env!("POLL_INTERVAL_MS")
                .unwrap_or("5000").parse().unwrap_or(5_000),
            contract: ContractConfig {
                address: option_env!("CONTRACT_ADDRESS")
                    .unwrap_or("0x5FbDB2315678afecb367f032d93F642f64180aa3").to_string(),
                required_chain_id: option_env!("REQUIRED_CHAIN_ID")
                    .unwrap_or("31337").parse().unwrap_or(31337),
                sale_start_grace_secs: option_env!("SALE_START_GRACE_SECS")
                    .unwrap_or("20").parse().unwrap_or(20),
            },
        }
    }
}
