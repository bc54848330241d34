use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::models::{Address, ContractSnapshot};
use crate::services::ContractClient;

/// Watches one contract read: fetch immediately, then on every poll tick.
///
/// The value stays None until the first successful read; a failed read logs
/// and keeps the last good value until the next tick. When `deps` change the
/// poller is torn down, the value resets to loading, and in-flight responses
/// from the previous key are discarded: a new account must never see the
/// old account's value as authoritative. `poll_ms` of 0 means read once.
#[hook]
pub fn use_watched_read<T, D, F, Fut>(
    deps: D,
    active: bool,
    poll_ms: u32,
    fetch: F,
) -> UseStateHandle<Option<T>>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let value = use_state_eq(|| None::<T>);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let value = value.clone();
        let interval = interval.clone();
        use_effect_with((deps, active), move |(_, active)| {
            // Key changed: cancel the previous poller before anything else.
            *interval.borrow_mut() = None;
            value.set(None);

            let alive = Rc::new(Cell::new(true));

            if *active {
                let in_flight = Rc::new(Cell::new(false));
                let fetch = Rc::new(fetch);
                let run: Rc<dyn Fn()> = {
                    let value = value.clone();
                    let alive = alive.clone();
                    Rc::new(move || {
                        if in_flight.get() {
                            // previous read of this field still in flight
                            return;
                        }
                        in_flight.set(true);

                        let value = value.clone();
                        let alive = alive.clone();
                        let in_flight = in_flight.clone();
                        let fetch = fetch.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = fetch().await;
                            in_flight.set(false);
                            if !alive.get() {
                                return;
                            }
                            match result {
                                Ok(v) => value.set(Some(v)),
                                Err(e) => log::warn!("⚠️ Read failed, keeping last value: {}", e),
                            }
                        });
                    })
                };

                run();
                if poll_ms > 0 {
                    let run = run.clone();
                    *interval.borrow_mut() = Some(Interval::new(poll_ms, move || run()));
                }
            }

            let interval = interval.clone();
            move || {
                alive.set(false);
                *interval.borrow_mut() = None;
            }
        });
    }

    value
}

/// Composes the full contract snapshot out of independent watched reads.
/// Account-scoped reads (balance, whitelist) are keyed on the connected
/// address and stop entirely while disconnected.
#[hook]
pub fn use_contract_snapshot(
    config: Rc<AppConfig>,
    account: Option<Address>,
) -> ContractSnapshot {
    let client = ContractClient::new(&config);
    let poll_ms = config.poll_interval_ms;
    let connected = account.is_some();

    let total_supply = use_watched_read((), true, poll_ms, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.total_supply().await }
        }
    });

    // Account-scoped values are tagged with the account they were read for:
    // between an account switch and the poller reset, a value belonging to
    // the previous account must render as loading, not as authoritative.
    let account_balance = use_watched_read(account.clone(), connected, poll_ms, {
        let client = client.clone();
        let account = account.clone();
        move || {
            let client = client.clone();
            let account = account.clone();
            async move {
                let account = account.ok_or("no connected account")?;
                let balance = client.balance_of(&account).await?;
                Ok((account, balance))
            }
        }
    });

    let mintable_count = use_watched_read((), true, poll_ms, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.mintable_count().await }
        }
    });

    // Issuance cap and price are immutable on-chain: read once.
    let max_mint_count = use_watched_read((), true, 0, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.max_mint_count().await }
        }
    });

    let is_whitelisted = use_watched_read(account.clone(), connected, poll_ms, {
        let client = client.clone();
        let account = account.clone();
        move || {
            let client = client.clone();
            let account = account.clone();
            async move {
                let account = account.ok_or("no connected account")?;
                let whitelisted = client.is_in_whitelist(&account).await?;
                Ok((account, whitelisted))
            }
        }
    });

    let sell_price_wei = use_watched_read((), true, 0, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.sell_price().await }
        }
    });

    let owner_address = use_watched_read((), true, poll_ms, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.owner().await }
        }
    });

    let sale_start_unix = use_watched_read((), true, poll_ms, {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.sale_start_time().await }
        }
    });

    let for_current_account = |read_for: &Address| Some(read_for) == account.as_ref();

    ContractSnapshot {
        total_supply: *total_supply,
        account_balance: (*account_balance)
            .clone()
            .and_then(|(read_for, balance)| for_current_account(&read_for).then_some(balance)),
        mintable_count: *mintable_count,
        max_mint_count: *max_mint_count,
        is_whitelisted: (*is_whitelisted)
            .clone()
            .and_then(|(read_for, listed)| for_current_account(&read_for).then_some(listed)),
        sell_price_wei: *sell_price_wei,
        owner_address: (*owner_address).clone(),
        sale_start_unix: *sale_start_unix,
    }
}
