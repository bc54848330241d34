// ============================================================================
// WALLET PROVIDER - injected window.ethereum seam
// ============================================================================
// Every browser wallet is reached through the standard window.ethereum
// interface: request() for calls, on() for session events. This file owns
// all of the JS interop; nothing above it touches JsValue.
// ============================================================================

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::{Address, Connector};
use crate::utils::INJECTED_CONNECTOR_ID;

/// Transaction fields as the provider expects them: 0x-hex strings.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub data: String,
}

fn provider() -> Option<Object> {
    let window = web_sys::window()?;
    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return None;
    }
    ethereum.dyn_into::<Object>().ok()
}

/// Connection methods for the disconnected screen. The injected connector is
/// always listed; ready only when a provider is actually present.
pub fn detect_connectors() -> Vec<Connector> {
    let name = provider().map(|p| {
        let is_metamask = Reflect::get(&p, &JsValue::from_str("isMetaMask"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if is_metamask { "MetaMask" } else { "Injected Wallet" }
    });

    vec![Connector {
        id: INJECTED_CONNECTOR_ID.to_string(),
        name: name.unwrap_or("Injected Wallet").to_string(),
        ready: name.is_some(),
    }]
}

fn js_error_message(error: JsValue) -> String {
    Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

async fn request(method: &str, params: JsValue) -> Result<JsValue, String> {
    let provider = provider().ok_or_else(|| "No injected wallet provider found".to_string())?;

    let request_fn = Reflect::get(&provider, &JsValue::from_str("request"))
        .map_err(js_error_message)?
        .dyn_into::<Function>()
        .map_err(|_| "provider.request is not a function".to_string())?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(js_error_message)?;
    if !params.is_undefined() {
        Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(js_error_message)?;
    }

    let promise = request_fn
        .call1(&provider, &args)
        .map_err(js_error_message)?
        .dyn_into::<Promise>()
        .map_err(|_| "provider.request did not return a promise".to_string())?;

    JsFuture::from(promise).await.map_err(js_error_message)
}

/// Prompts the wallet for account access and returns the granted accounts.
pub async fn request_accounts() -> Result<Vec<Address>, String> {
    let result = request("eth_requestAccounts", JsValue::UNDEFINED).await?;
    Array::from(&result)
        .iter()
        .filter_map(|v| v.as_string())
        .map(|s| Address::parse(&s))
        .collect()
}

/// Chain the wallet is currently on.
pub async fn active_chain_id() -> Result<u64, String> {
    let result = request("eth_chainId", JsValue::UNDEFINED).await?;
    let hex = result
        .as_string()
        .ok_or_else(|| "eth_chainId returned a non-string result".to_string())?;
    parse_chain_id_hex(&hex)
}

/// Asks the wallet to switch to the given chain. Rejection comes back as Err.
pub async fn switch_chain(chain_id: u64) -> Result<(), String> {
    #[derive(Serialize)]
    struct SwitchChainParam {
        #[serde(rename = "chainId")]
        chain_id: String,
    }

    let params = serde_wasm_bindgen::to_value(&[SwitchChainParam {
        chain_id: chain_id_hex(chain_id),
    }])
    .map_err(|e| format!("Serialization error: {}", e))?;

    request("wallet_switchEthereumChain", params).await.map(|_| ())
}

/// Submits a transaction through the wallet; resolves to the tx hash once
/// the user signs.
pub async fn send_transaction(tx: &TransactionRequest) -> Result<String, String> {
    let params = serde_wasm_bindgen::to_value(&[tx])
        .map_err(|e| format!("Serialization error: {}", e))?;
    let result = request("eth_sendTransaction", params).await?;
    result
        .as_string()
        .ok_or_else(|| "Wallet returned no transaction hash".to_string())
}

/// Subscribes to a provider session event (accountsChanged / chainChanged).
/// The closure is kept alive for the app lifetime; callers register once on
/// mount, so there is no accumulation.
pub fn on_provider_event<F>(event: &str, callback: F)
where
    F: FnMut(JsValue) + 'static,
{
    let Some(provider) = provider() else {
        return;
    };
    let Ok(on_value) = Reflect::get(&provider, &JsValue::from_str("on")) else {
        return;
    };
    let Ok(on_fn) = on_value.dyn_into::<Function>() else {
        log::warn!("⚠️ Provider has no event emitter, session changes will not be tracked");
        return;
    };

    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(JsValue)>);
    let _ = on_fn.call2(&provider, &JsValue::from_str(event), closure.as_ref());
    closure.forget();
}

pub fn chain_id_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}

pub fn parse_chain_id_hex(input: &str) -> Result<u64, String> {
    u64::from_str_radix(input.trim_start_matches("0x"), 16)
        .map_err(|e| format!("Invalid chain id {:?}: {}", input, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_round_trip() {
        assert_eq!(chain_id_hex(31337), "0x7a69");
        assert_eq!(parse_chain_id_hex("0x7a69").unwrap(), 31337);
        assert_eq!(parse_chain_id_hex("0x1").unwrap(), 1);
    }

    #[test]
    fn rejects_garbage_chain_ids() {
        assert!(parse_chain_id_hex("0x").is_err());
        assert!(parse_chain_id_hex("mainnet").is_err());
    }
}
