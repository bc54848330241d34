use yew::prelude::*;

use crate::services::wallet_provider;

/// Where the wallet stands relative to the required chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NetworkStatus {
    /// No chain reported (not connected yet).
    Unknown,
    /// Active chain matches the required one.
    Matched,
    /// Switch request sent to the wallet, waiting for the chain change.
    Switching,
    /// The wallet declined the switch; waiting for the user to act.
    Declined,
}

#[derive(Clone, PartialEq)]
pub struct UseNetworkGuardHandle {
    pub status: NetworkStatus,
    /// Re-requests the switch after a decline, without waiting for the
    /// chain to change on its own.
    pub retry: Callback<()>,
}

fn request_switch(status: UseStateHandle<NetworkStatus>, required: u64) {
    status.set(NetworkStatus::Switching);
    wasm_bindgen_futures::spawn_local(async move {
        match wallet_provider::switch_chain(required).await {
            // The chainChanged event updates the session and resolves the
            // guard to Matched.
            Ok(()) => log::info!("✅ Network switch accepted"),
            Err(e) => {
                log::warn!("🚫 Network switch declined: {}", e);
                status.set(NetworkStatus::Declined);
            }
        }
    });
}

/// Keeps the wallet on the required chain.
///
/// The switch request fires exactly once per observed mismatch: the effect
/// is keyed on the active chain id, not on renders. A declined switch
/// latches until the chain id changes again or the user retries, so the
/// guard never spins against a wallet that said no.
#[hook]
pub fn use_network_guard(
    required_chain_id: u64,
    active_chain_id: Option<u64>,
) -> UseNetworkGuardHandle {
    let status = use_state_eq(|| NetworkStatus::Unknown);

    {
        let status = status.clone();
        use_effect_with((required_chain_id, active_chain_id), move |(required, active)| {
            match *active {
                None => status.set(NetworkStatus::Unknown),
                Some(id) if id == *required => status.set(NetworkStatus::Matched),
                Some(id) => {
                    log::info!("🔀 Wrong network ({}), requesting switch to {}", id, required);
                    request_switch(status.clone(), *required);
                }
            }
            || ()
        });
    }

    let retry = {
        let status = status.clone();
        Callback::from(move |_| {
            log::info!("🔁 Retrying network switch to {}", required_chain_id);
            request_switch(status.clone(), required_chain_id);
        })
    };

    UseNetworkGuardHandle {
        status: *status,
        retry,
    }
}
