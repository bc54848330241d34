use yew::prelude::*;

use crate::models::{format_countdown, ContractSnapshot, MintGate};
use crate::utils::format_wei;

#[derive(Properties, PartialEq)]
pub struct MintPanelProps {
    pub snapshot: ContractSnapshot,
    pub remaining: Option<i64>,
    pub gate: MintGate,
    pub on_mint: Callback<()>,
    pub mint_error: Option<String>,
}

/// Snapshot display plus the eligibility-gated mint control. Formatting
/// only; every decision arrives pre-made through the gate.
#[function_component(MintPanel)]
pub fn mint_panel(props: &MintPanelProps) -> Html {
    let snapshot = &props.snapshot;

    let whitelist_text = match snapshot.is_whitelisted {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "checking…",
    };
    let price_text = snapshot
        .sell_price_wei
        .map(|p| format!("{} ETH", format_wei(p)))
        .unwrap_or_else(|| "loading…".to_string());

    let on_mint = {
        let on_mint = props.on_mint.clone();
        Callback::from(move |_: MouseEvent| on_mint.emit(()))
    };

    html! {
        <div class="mint-panel">
            <h2>{"NFT Content"}</h2>
            {
                if let Some(total) = snapshot.total_supply {
                    html! { <div>{ format!("Minted: {}", total) }</div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(balance) = snapshot.account_balance {
                    html! { <div>{ format!("Owned: {}", balance) }</div> }
                } else {
                    html! {}
                }
            }
            <div>{ format!("Whitelisted: {}", whitelist_text) }</div>

            <h2>{"Sale Content"}</h2>
            <div>{ format!("Price: {}", price_text) }</div>
            {
                if let Some(max) = snapshot.max_mint_count {
                    html! { <div>{ format!("Max issuance: {}", max) }</div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(mintable) = snapshot.mintable_count {
                    html! { <div>{ format!("Still mintable: {}", mintable) }</div> }
                } else {
                    html! {}
                }
            }
            <div>{ format!("Sale countdown: {}", format_countdown(props.remaining)) }</div>

            {
                if props.gate == MintGate::Pending {
                    html! { <div class="mint-pending">{"⏳ Minting…"}</div> }
                } else {
                    html! {
                        <button
                            class="btn-mint"
                            onclick={on_mint}
                            disabled={!props.gate.is_ready()}
                        >
                            {"Mint"}
                        </button>
                    }
                }
            }
            {
                if let Some(message) = props.gate.blocked_message() {
                    html! { <div class="mint-message">{message}</div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = &props.mint_error {
                    html! { <div class="mint-error">{ format!("Transaction failed: {}", error) }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
