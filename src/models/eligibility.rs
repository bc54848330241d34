use super::snapshot::ContractSnapshot;
use super::wallet::WalletSession;

/// True iff the connected address is the contract owner. Fails closed when
/// either side has not loaded yet.
pub fn is_owner(session: &WalletSession, snapshot: &ContractSnapshot) -> bool {
    match (&session.address, &snapshot.owner_address) {
        (Some(connected), Some(owner)) => connected == owner,
        _ => false,
    }
}

/// Composite mint eligibility: owner override OR confirmed whitelist
/// membership. An unknown whitelist state (still loading) is not eligible.
pub fn is_mintable(session: &WalletSession, snapshot: &ContractSnapshot) -> bool {
    is_owner(session, snapshot) || snapshot.is_whitelisted == Some(true)
}

/// Why the mint control is (or is not) actionable right now. One disabled
/// state for the view instead of scattered boolean checks; checks are
/// ordered so the most blocking condition wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintGate {
    Ready,
    NotConnected,
    WrongNetwork,
    Pending,
    PriceUnknown,
    NotEligible,
}

pub fn mint_gate(
    session: &WalletSession,
    snapshot: &ContractSnapshot,
    network_ok: bool,
    mint_pending: bool,
) -> MintGate {
    if !session.is_connected() {
        MintGate::NotConnected
    } else if !network_ok {
        MintGate::WrongNetwork
    } else if mint_pending {
        MintGate::Pending
    } else if snapshot.sell_price_wei.is_none() {
        MintGate::PriceUnknown
    } else if !is_mintable(session, snapshot) {
        MintGate::NotEligible
    } else {
        MintGate::Ready
    }
}

impl MintGate {
    pub fn is_ready(&self) -> bool {
        matches!(self, MintGate::Ready)
    }

    /// Explanation shown next to a disabled mint control.
    pub fn blocked_message(&self) -> Option<&'static str> {
        match self {
            MintGate::Ready | MintGate::NotConnected => None,
            MintGate::WrongNetwork => Some("Switch to the required network to mint"),
            MintGate::Pending => Some("Transaction pending…"),
            MintGate::PriceUnknown => Some("Loading sale price…"),
            MintGate::NotEligible => Some("Not on the whitelist, minting unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wallet::Address;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    fn session(address: Option<&str>) -> WalletSession {
        WalletSession {
            address: address.map(addr),
            chain_id: Some(31337),
        }
    }

    const OWNER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    const OTHER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

    fn snapshot(owner: Option<&str>, whitelisted: Option<bool>) -> ContractSnapshot {
        ContractSnapshot {
            owner_address: owner.map(addr),
            is_whitelisted: whitelisted,
            ..Default::default()
        }
    }

    #[test]
    fn owner_can_always_mint() {
        assert!(is_mintable(&session(Some(OWNER)), &snapshot(Some(OWNER), Some(false))));
        assert!(is_mintable(&session(Some(OWNER)), &snapshot(Some(OWNER), None)));
    }

    #[test]
    fn owner_check_ignores_case() {
        let mixed = "0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert!(is_owner(&session(Some(mixed)), &snapshot(Some(OWNER), None)));
    }

    #[test]
    fn whitelisted_non_owner_can_mint() {
        assert!(is_mintable(&session(Some(OTHER)), &snapshot(Some(OWNER), Some(true))));
    }

    #[test]
    fn neither_owner_nor_whitelisted_cannot_mint() {
        assert!(!is_mintable(&session(Some(OTHER)), &snapshot(Some(OWNER), Some(false))));
    }

    #[test]
    fn absent_addresses_fail_closed() {
        // no connected address
        assert!(!is_mintable(&session(None), &snapshot(Some(OWNER), Some(false))));
        // owner not loaded yet
        assert!(!is_mintable(&session(Some(OWNER)), &snapshot(None, Some(false))));
        // whitelist state unknown is not "false-as-loaded" but also not eligible
        assert!(!is_mintable(&session(Some(OTHER)), &snapshot(Some(OWNER), None)));
    }

    #[test]
    fn gate_ready_for_whitelisted_account() {
        let mut snap = snapshot(Some(OWNER), Some(true));
        snap.sell_price_wei = Some(1u64.into());
        assert_eq!(mint_gate(&session(Some(OTHER)), &snap, true, false), MintGate::Ready);
    }

    #[test]
    fn gate_precedence_network_beats_eligibility() {
        let snap = snapshot(Some(OWNER), Some(false));
        assert_eq!(
            mint_gate(&session(Some(OTHER)), &snap, false, false),
            MintGate::WrongNetwork
        );
    }

    #[test]
    fn gate_precedence_pending_beats_price_and_eligibility() {
        let snap = snapshot(Some(OWNER), Some(false));
        assert_eq!(
            mint_gate(&session(Some(OTHER)), &snap, true, true),
            MintGate::Pending
        );
    }

    #[test]
    fn gate_requires_loaded_price() {
        let snap = snapshot(Some(OWNER), Some(true));
        assert_eq!(
            mint_gate(&session(Some(OTHER)), &snap, true, false),
            MintGate::PriceUnknown
        );
    }

    #[test]
    fn gate_not_eligible_has_message() {
        let mut snap = snapshot(Some(OWNER), Some(false));
        snap.sell_price_wei = Some(1u64.into());
        let gate = mint_gate(&session(Some(OTHER)), &snap, true, false);
        assert_eq!(gate, MintGate::NotEligible);
        assert!(gate.blocked_message().is_some());
    }
}
