use std::rc::Rc;

use primitive_types::U256;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::models::{Address, MintIntent, WalletSession};
use crate::services::contract_client;
use crate::services::wallet_provider::{self, TransactionRequest};
use crate::utils::wei_to_hex;

/// Mint dispatch surface: one pending latch, one transient error slot.
#[derive(Clone, PartialEq)]
pub struct UseMintHandle {
    pub mint: Callback<()>,
    pub is_pending: bool,
    pub error: Option<String>,
}

#[hook]
pub fn use_mint(
    config: Rc<AppConfig>,
    session: WalletSession,
    sell_price_wei: Option<U256>,
    allowed: bool,
) -> UseMintHandle {
    let pending = use_state_eq(|| false);
    let error = use_state_eq(|| None::<String>);
    // Synchronous re-entry guard: the rendered pending flag lags a tick
    // behind, this one does not.
    let in_flight = use_mut_ref(|| false);

    let mint = {
        let pending = pending.clone();
        let error = error.clone();
        let in_flight = in_flight.clone();
        let config = config.clone();
        let session = session.clone();

        Callback::from(move |_| {
            if *in_flight.borrow() {
                log::warn!("⏳ Mint already pending, refusing duplicate submission");
                return;
            }
            let Some(from) = session.address.clone() else {
                log::warn!("🚫 Mint refused: no connected account");
                return;
            };
            if !allowed {
                log::warn!("🚫 Mint refused: address is not eligible");
                return;
            }
            let Some(price) = sell_price_wei else {
                log::warn!("🚫 Mint refused: sale price not loaded yet");
                return;
            };

            // Price captured at dispatch time, attached as an exact wei
            // quantity with no unit round-trip.
            let intent = MintIntent { price_wei: price };
            let tx = TransactionRequest {
                from: from.to_string(),
                to: config.contract.address.clone(),
                value: Some(wei_to_hex(intent.price_wei)),
                data: contract_client::mint_call_data(),
            };

            *in_flight.borrow_mut() = true;
            pending.set(true);
            error.set(None);

            let pending = pending.clone();
            let error = error.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_provider::send_transaction(&tx).await {
                    Ok(hash) => log::info!("✅ Mint transaction submitted: {}", hash),
                    Err(e) => {
                        log::error!("❌ Mint rejected: {}", e);
                        error.set(Some(e));
                    }
                }
                *in_flight.borrow_mut() = false;
                pending.set(false);
            });
        })
    };

    UseMintHandle {
        mint,
        is_pending: *pending,
        error: (*error).clone(),
    }
}

/// Owner actions: whitelist management and sale-start reset.
#[derive(Clone, PartialEq)]
pub struct UseAdminHandle {
    pub add_to_whitelist: Callback<String>,
    pub reset_sale_start: Callback<()>,
    pub whitelist_pending: bool,
    pub reset_pending: bool,
    pub error: Option<String>,
}

#[hook]
pub fn use_admin_actions(config: Rc<AppConfig>, session: WalletSession) -> UseAdminHandle {
    let whitelist_pending = use_state_eq(|| false);
    let reset_pending = use_state_eq(|| false);
    let error = use_state_eq(|| None::<String>);
    let whitelist_in_flight = use_mut_ref(|| false);
    let reset_in_flight = use_mut_ref(|| false);

    let add_to_whitelist = {
        let pending = whitelist_pending.clone();
        let error = error.clone();
        let in_flight = whitelist_in_flight.clone();
        let config = config.clone();
        let session = session.clone();

        Callback::from(move |raw_address: String| {
            if *in_flight.borrow() {
                log::warn!("⏳ Whitelist update already pending, refusing");
                return;
            }
            let Some(from) = session.address.clone() else {
                return;
            };
            let account = match Address::parse(&raw_address) {
                Ok(account) => account,
                Err(e) => {
                    log::warn!("🚫 Rejected whitelist input: {}", e);
                    error.set(Some(e));
                    return;
                }
            };

            log::info!("📝 Adding to whitelist: {}", account);
            let tx = TransactionRequest {
                from: from.to_string(),
                to: config.contract.address.clone(),
                value: None,
                data: contract_client::add_to_whitelist_call_data(&account),
            };

            *in_flight.borrow_mut() = true;
            pending.set(true);
            error.set(None);

            let pending = pending.clone();
            let error = error.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_provider::send_transaction(&tx).await {
                    Ok(hash) => log::info!("✅ Whitelist transaction submitted: {}", hash),
                    Err(e) => {
                        log::error!("❌ Whitelist update rejected: {}", e);
                        error.set(Some(e));
                    }
                }
                *in_flight.borrow_mut() = false;
                pending.set(false);
            });
        })
    };

    let reset_sale_start = {
        let pending = reset_pending.clone();
        let error = error.clone();
        let in_flight = reset_in_flight.clone();
        let config = config.clone();
        let session = session.clone();

        Callback::from(move |_| {
            if *in_flight.borrow() {
                log::warn!("⏳ Sale-start reset already pending, refusing");
                return;
            }
            let Some(from) = session.address.clone() else {
                return;
            };

            // Grace window applied at the moment the button is pressed,
            // not at page load.
            let start = chrono::Utc::now().timestamp() + config.contract.sale_start_grace_secs;
            log::info!("⏰ Resetting sale start to {}", start);

            let tx = TransactionRequest {
                from: from.to_string(),
                to: config.contract.address.clone(),
                value: None,
                data: contract_client::set_sale_start_time_call_data(start),
            };

            *in_flight.borrow_mut() = true;
            pending.set(true);
            error.set(None);

            let pending = pending.clone();
            let error = error.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wallet_provider::send_transaction(&tx).await {
                    Ok(hash) => log::info!("✅ Sale-start transaction submitted: {}", hash),
                    Err(e) => {
                        log::error!("❌ Sale-start reset rejected: {}", e);
                        error.set(Some(e));
                    }
                }
                *in_flight.borrow_mut() = false;
                pending.set(false);
            });
        })
    };

    UseAdminHandle {
        add_to_whitelist,
        reset_sale_start,
        whitelist_pending: *whitelist_pending,
        reset_pending: *reset_pending,
        error: (*error).clone(),
    }
}
