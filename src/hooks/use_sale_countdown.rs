use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::remaining_seconds;
use crate::utils::COUNTDOWN_TICK_MS;

/// Ticks the seconds-until-sale once per second from the watched on-chain
/// start time.
///
/// Idle while the start time is unknown, running once it arrives, and
/// restarted whenever it changes. The previous Interval is dropped before a
/// replacement is created, so there is never more than one live ticker
/// racing over the displayed value. The effect cleanup drops the handle on
/// unmount as well.
#[hook]
pub fn use_sale_countdown(sale_start_unix: Option<i64>) -> Option<i64> {
    let remaining = use_state_eq(|| None::<i64>);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let remaining = remaining.clone();
        let interval = interval.clone();
        use_effect_with(sale_start_unix, move |start| {
            // Cancel the old ticker before starting the new one.
            *interval.borrow_mut() = None;

            match *start {
                Some(start) => {
                    let tick = {
                        let remaining = remaining.clone();
                        move || {
                            let now = chrono::Utc::now().timestamp();
                            remaining.set(Some(remaining_seconds(start, now)));
                        }
                    };
                    tick();
                    *interval.borrow_mut() = Some(Interval::new(COUNTDOWN_TICK_MS, tick));
                }
                None => remaining.set(None),
            }

            let interval = interval.clone();
            move || {
                *interval.borrow_mut() = None;
            }
        });
    }

    *remaining
}
