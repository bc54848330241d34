pub mod use_contract_reads;
pub mod use_contract_writes;
pub mod use_network_guard;
pub mod use_sale_countdown;
pub mod use_wallet;

pub use use_contract_reads::{use_contract_snapshot, use_watched_read};
pub use use_contract_writes::{use_admin_actions, use_mint, UseAdminHandle, UseMintHandle};
pub use use_network_guard::{use_network_guard, NetworkStatus, UseNetworkGuardHandle};
pub use use_sale_countdown::use_sale_countdown;
pub use use_wallet::{use_wallet, UseWalletHandle};
