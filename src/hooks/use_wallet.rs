use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::models::{Address, Connector, WalletSession};
use crate::services::wallet_provider;

/// Wallet session state plus the connect/disconnect surface for the view.
#[derive(Clone, PartialEq)]
pub struct UseWalletHandle {
    pub session: WalletSession,
    pub connectors: Vec<Connector>,
    pub pending_connector: Option<String>,
    pub error: Option<String>,
    pub connect: Callback<String>,
    pub disconnect: Callback<()>,
}

#[hook]
pub fn use_wallet() -> UseWalletHandle {
    let address = use_state_eq(|| None::<Address>);
    let chain_id = use_state_eq(|| None::<u64>);
    let pending_connector = use_state_eq(|| None::<String>);
    let error = use_state_eq(|| None::<String>);

    let connectors = wallet_provider::detect_connectors();

    // Provider session events. This effect runs once per app mount, so each
    // listener is registered exactly once.
    {
        let address = address.clone();
        let chain_id = chain_id.clone();
        use_effect_with((), move |_| {
            {
                let address = address.clone();
                wallet_provider::on_provider_event("accountsChanged", move |accounts: JsValue| {
                    let next = js_sys::Array::from(&accounts)
                        .get(0)
                        .as_string()
                        .and_then(|s| Address::parse(&s).ok());
                    match &next {
                        Some(account) => log::info!("🔁 Account changed: {}", account),
                        None => log::info!("👋 Wallet disconnected by provider"),
                    }
                    address.set(next);
                });
            }
            {
                let chain_id = chain_id.clone();
                wallet_provider::on_provider_event("chainChanged", move |chain: JsValue| {
                    let Some(hex) = chain.as_string() else {
                        return;
                    };
                    match wallet_provider::parse_chain_id_hex(&hex) {
                        Ok(id) => {
                            log::info!("⛓️ Chain changed: {}", id);
                            chain_id.set(Some(id));
                        }
                        Err(e) => log::warn!("⚠️ Ignoring chainChanged event: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let connect = {
        let address = address.clone();
        let chain_id = chain_id.clone();
        let pending_connector = pending_connector.clone();
        let error = error.clone();

        Callback::from(move |connector_id: String| {
            let address = address.clone();
            let chain_id = chain_id.clone();
            let pending_connector = pending_connector.clone();
            let error = error.clone();

            pending_connector.set(Some(connector_id.clone()));
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match wallet_provider::request_accounts().await {
                    Ok(accounts) if !accounts.is_empty() => {
                        let account = accounts[0].clone();
                        log::info!("🔗 Wallet connected: {}", account);
                        address.set(Some(account));

                        match wallet_provider::active_chain_id().await {
                            Ok(id) => chain_id.set(Some(id)),
                            Err(e) => log::warn!("⚠️ Could not read active chain: {}", e),
                        }
                    }
                    Ok(_) => {
                        log::error!("❌ Wallet returned no accounts");
                        error.set(Some("Wallet returned no accounts".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Wallet connection failed: {}", e);
                        error.set(Some(e));
                    }
                }
                pending_connector.set(None);
            });
        })
    };

    let disconnect = {
        let address = address.clone();
        let chain_id = chain_id.clone();
        let pending_connector = pending_connector.clone();
        let error = error.clone();

        Callback::from(move |_| {
            log::info!("👋 Disconnect");
            address.set(None);
            chain_id.set(None);
            pending_connector.set(None);
            error.set(None);
        })
    };

    UseWalletHandle {
        session: WalletSession {
            address: (*address).clone(),
            chain_id: *chain_id,
        },
        connectors,
        pending_connector: (*pending_connector).clone(),
        error: (*error).clone(),
        connect,
        disconnect,
    }
}
