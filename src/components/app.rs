use yew::prelude::*;

use super::{AdminPanel, ConnectScreen, MintPanel, NetworkBanner};
use crate::config::AppConfig;
use crate::hooks::{
    use_admin_actions, use_contract_snapshot, use_mint, use_network_guard, use_sale_countdown,
    use_wallet,
};
use crate::models::{is_mintable, is_owner, mint_gate};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());

    let wallet = use_wallet();
    let session = wallet.session.clone();

    let snapshot = use_contract_snapshot(config.clone(), session.address.clone());
    let remaining = use_sale_countdown(snapshot.sale_start_unix);
    let network = use_network_guard(config.contract.required_chain_id, session.chain_id);
    let network_ok = session.chain_id == Some(config.contract.required_chain_id);

    let mint = use_mint(
        config.clone(),
        session.clone(),
        snapshot.sell_price_wei,
        is_mintable(&session, &snapshot) && network_ok,
    );
    let admin = use_admin_actions(config.clone(), session.clone());

    // Disconnected mode: connection methods only.
    let Some(account) = session.address.clone() else {
        return html! {
            <ConnectScreen
                connectors={wallet.connectors.clone()}
                pending_connector={wallet.pending_connector.clone()}
                error={wallet.error.clone()}
                on_connect={wallet.connect.clone()}
            />
        };
    };

    let gate = mint_gate(&session, &snapshot, network_ok, mint.is_pending);
    let owner = is_owner(&session, &snapshot);

    let on_disconnect = {
        let disconnect = wallet.disconnect.clone();
        Callback::from(move |_: MouseEvent| disconnect.emit(()))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"NFT Mint Console"}</h1>
                <div class="header-actions">
                    <span class="account" title={account.to_string()}>{ account.short() }</span>
                    <button class="btn-disconnect" onclick={on_disconnect}>{"Disconnect"}</button>
                </div>
            </header>

            <NetworkBanner
                status={network.status}
                required_chain_id={config.contract.required_chain_id}
                on_retry={network.retry.clone()}
            />

            <MintPanel
                snapshot={snapshot.clone()}
                remaining={remaining}
                gate={gate}
                on_mint={mint.mint.clone()}
                mint_error={mint.error.clone()}
            />

            {
                if owner {
                    html! {
                        <AdminPanel
                            on_add_to_whitelist={admin.add_to_whitelist.clone()}
                            on_reset_sale_start={admin.reset_sale_start.clone()}
                            whitelist_pending={admin.whitelist_pending}
                            reset_pending={admin.reset_pending}
                            error={admin.error.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
