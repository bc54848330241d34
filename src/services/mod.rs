pub mod abi;
pub mod contract_client;
pub mod rpc_client;
pub mod wallet_provider;

pub use contract_client::ContractClient;
pub use rpc_client::RpcClient;
