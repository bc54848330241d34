pub mod countdown;
pub mod eligibility;
pub mod snapshot;
pub mod wallet;

pub use countdown::{format_countdown, remaining_seconds};
pub use eligibility::{is_mintable, is_owner, mint_gate, MintGate};
pub use snapshot::{ContractSnapshot, MintIntent};
pub use wallet::{Address, Connector, WalletSession};
