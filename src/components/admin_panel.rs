use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub on_add_to_whitelist: Callback<String>,
    pub on_reset_sale_start: Callback<()>,
    pub whitelist_pending: bool,
    pub reset_pending: bool,
    pub error: Option<String>,
}

/// Owner-only actions. Rendered iff the connected address is the contract
/// owner; the contract enforces ownership on-chain regardless.
#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let address_ref = use_node_ref();

    let on_add = {
        let address_ref = address_ref.clone();
        let on_add_to_whitelist = props.on_add_to_whitelist.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(input) = address_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            if value.trim().is_empty() {
                return;
            }
            on_add_to_whitelist.emit(value);
        })
    };

    let on_reset = {
        let on_reset_sale_start = props.on_reset_sale_start.clone();
        Callback::from(move |_: MouseEvent| on_reset_sale_start.emit(()))
    };

    html! {
        <div class="admin-panel">
            <h2>{"Only for contract owner"}</h2>
            <div>
                <button
                    class="btn-admin"
                    onclick={on_reset}
                    disabled={props.reset_pending}
                >
                    { if props.reset_pending { "⏳ Resetting…" } else { "Reset sale start time" } }
                </button>
            </div>
            <div class="whitelist-form">
                <input
                    class="whitelist-input"
                    type="text"
                    placeholder="Input a wallet address"
                    ref={address_ref}
                />
                <button
                    class="btn-admin"
                    onclick={on_add}
                    disabled={props.whitelist_pending}
                >
                    { if props.whitelist_pending { "⏳ Adding…" } else { "Add to whitelist" } }
                </button>
            </div>
            {
                if let Some(error) = &props.error {
                    html! { <div class="admin-error">{error.clone()}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
