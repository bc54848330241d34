use primitive_types::U256;

use super::wallet::Address;

/// Client-side view of the sale contract, one field per watched read.
///
/// Every field is an Option: None means "not loaded yet", which is a
/// different state from zero or false. Fields refresh independently and
/// carry no cross-field consistency: each one reflects some on-chain state
/// no older than its own last successful read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractSnapshot {
    pub total_supply: Option<U256>,
    pub account_balance: Option<U256>,
    pub mintable_count: Option<U256>,
    pub max_mint_count: Option<U256>,
    pub is_whitelisted: Option<bool>,
    pub sell_price_wei: Option<U256>,
    pub owner_address: Option<Address>,
    pub sale_start_unix: Option<i64>,
}

/// Value attached to a mint transaction, captured from the live price at
/// the moment of dispatch. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MintIntent {
    pub price_wei: U256,
}
