use yew::prelude::*;

use crate::hooks::NetworkStatus;

#[derive(Properties, PartialEq)]
pub struct NetworkBannerProps {
    pub status: NetworkStatus,
    pub required_chain_id: u64,
    pub on_retry: Callback<()>,
}

/// Blocking banner while the wallet is off the required chain.
#[function_component(NetworkBanner)]
pub fn network_banner(props: &NetworkBannerProps) -> Html {
    match props.status {
        NetworkStatus::Unknown | NetworkStatus::Matched => html! {},
        NetworkStatus::Switching => html! {
            <div class="network-banner switching">
                <span class="banner-icon">{"🔀"}</span>
                <span class="banner-text">{"Switching network…"}</span>
            </div>
        },
        NetworkStatus::Declined => {
            let on_retry = {
                let on_retry = props.on_retry.clone();
                Callback::from(move |_: MouseEvent| on_retry.emit(()))
            };
            html! {
                <div class="network-banner declined">
                    <span class="banner-icon">{"🚫"}</span>
                    <span class="banner-text">
                        { format!(
                            "Network switch declined. Switch to chain {} to continue",
                            props.required_chain_id
                        ) }
                    </span>
                    <button class="btn-retry" onclick={on_retry}>{"Retry"}</button>
                </div>
            }
        }
    }
}
