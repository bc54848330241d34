use yew::prelude::*;

use crate::models::Connector;

#[derive(Properties, PartialEq)]
pub struct ConnectScreenProps {
    pub connectors: Vec<Connector>,
    pub pending_connector: Option<String>,
    pub error: Option<String>,
    pub on_connect: Callback<String>,
}

#[function_component(ConnectScreen)]
pub fn connect_screen(props: &ConnectScreenProps) -> Html {
    html! {
        <div class="connect-screen">
            <div class="connect-container">
                <h1>{"NFT Mint Console"}</h1>
                <p>{"Connect a wallet to inspect the sale"}</p>

                {
                    props.connectors.iter().map(|connector| {
                        let is_connecting =
                            props.pending_connector.as_deref() == Some(connector.id.as_str());
                        let onclick = {
                            let on_connect = props.on_connect.clone();
                            let id = connector.id.clone();
                            Callback::from(move |_: MouseEvent| on_connect.emit(id.clone()))
                        };

                        html! {
                            <button
                                class="btn-connect"
                                key={connector.id.clone()}
                                disabled={!connector.ready || is_connecting}
                                {onclick}
                            >
                                { format!("Connect {}", connector.name) }
                                { if !connector.ready { " (unavailable)" } else { "" } }
                                { if is_connecting { " (connecting…)" } else { "" } }
                            </button>
                        }
                    }).collect::<Html>()
                }

                {
                    if let Some(error) = &props.error {
                        html! { <div class="connect-error">{error.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
