// ============================================================================
// CONTRACT CLIENT - typed read surface of the sale contract
// ============================================================================
// One method per contract view function; calldata built in services::abi,
// transport in services::rpc_client. Constructed from an explicit AppConfig,
// never from ambient globals.
// ============================================================================

use primitive_types::U256;

use super::abi;
use super::rpc_client::RpcClient;
use crate::config::AppConfig;
use crate::models::Address;

#[derive(Clone, PartialEq)]
pub struct ContractClient {
    rpc: RpcClient,
    contract_address: String,
}

impl ContractClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rpc: RpcClient::new(config.rpc_url.clone()),
            contract_address: config.contract.address.clone(),
        }
    }

    async fn read(&self, data: String) -> Result<String, String> {
        self.rpc.eth_call(&self.contract_address, &data).await
    }

    /// Number of tokens minted so far.
    pub async fn total_supply(&self) -> Result<U256, String> {
        abi::decode_uint(&self.read(abi::call_data("totalSupply()", &[])).await?)
    }

    /// Tokens held by the given account.
    pub async fn balance_of(&self, account: &Address) -> Result<U256, String> {
        let data = abi::call_data("balanceOf(address)", &[abi::encode_address_arg(account)]);
        abi::decode_uint(&self.read(data).await?)
    }

    /// Tokens still available for sale.
    pub async fn mintable_count(&self) -> Result<U256, String> {
        abi::decode_uint(&self.read(abi::call_data("mintableCount()", &[])).await?)
    }

    /// Total issuance cap.
    pub async fn max_mint_count(&self) -> Result<U256, String> {
        abi::decode_uint(&self.read(abi::call_data("maxMintCount()", &[])).await?)
    }

    /// Whitelist membership of the given account.
    pub async fn is_in_whitelist(&self, account: &Address) -> Result<bool, String> {
        let data = abi::call_data("isInWhitelist(address)", &[abi::encode_address_arg(account)]);
        abi::decode_bool(&self.read(data).await?)
    }

    /// Price of one token in wei.
    pub async fn sell_price(&self) -> Result<U256, String> {
        abi::decode_uint(&self.read(abi::call_data("sellPrice()", &[])).await?)
    }

    /// Contract owner.
    pub async fn owner(&self) -> Result<Address, String> {
        abi::decode_address(&self.read(abi::call_data("owner()", &[])).await?)
    }

    /// Unix-seconds timestamp at which the sale opens.
    pub async fn sale_start_time(&self) -> Result<i64, String> {
        let raw = abi::decode_uint(&self.read(abi::call_data("saleStartTime()", &[])).await?)?;
        let secs = u64::try_from(raw)
            .map_err(|_| format!("saleStartTime does not fit a timestamp: {}", raw))?;
        i64::try_from(secs).map_err(|_| format!("saleStartTime out of range: {}", secs))
    }
}

// Write calldata builders; the signing transport is the wallet provider.

pub fn mint_call_data() -> String {
    abi::call_data("mint()", &[])
}

pub fn add_to_whitelist_call_data(account: &Address) -> String {
    abi::call_data("addToWhitelist(address)", &[abi::encode_address_arg(account)])
}

pub fn set_sale_start_time_call_data(start_unix: i64) -> String {
    abi::call_data(
        "setSaleStartTime(uint256)",
        &[abi::encode_uint_arg(U256::from(start_unix.max(0) as u64))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_call_data_is_selector_only() {
        assert_eq!(mint_call_data(), "0x1249c58b");
    }

    #[test]
    fn whitelist_call_data_carries_the_address_word() {
        let addr = Address::parse("0x70997970c51812dc3a010c7d01b50e0d17dc79c8").unwrap();
        let data = add_to_whitelist_call_data(&addr);
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.ends_with("70997970c51812dc3a010c7d01b50e0d17dc79c8"));
    }

    #[test]
    fn sale_start_call_data_encodes_the_timestamp() {
        let data = set_sale_start_time_call_data(0x65_00_00_00);
        assert!(data.ends_with("65000000"));
        assert_eq!(data.len(), 2 + 8 + 64);
    }
}
