// ============================================================================
// USE ORDERS SYNC HOOK - My-orders page polling
// ============================================================================

use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::SyncConfig;
use crate::services::{load_auth_token, ApiClient};
use crate::stores::OrdersStore;
use crate::sync::{orders_differ, NotificationIntent, OrdersListSyncEngine};

pub struct UseOrdersSyncHandle {
    pub is_syncing: UseStateHandle<bool>,
    pub force_sync: Callback<()>,
}

#[hook]
pub fn use_orders_sync(
    page: u32,
    limit: u32,
    orders: OrdersStore,
    notify: Callback<NotificationIntent>,
) -> UseOrdersSyncHandle {
    let is_syncing = use_state(|| false);
    let engine = use_mut_ref(OrdersListSyncEngine::new);
    let in_flight = use_mut_ref(|| false);
    let active = use_mut_ref(|| true);
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let config = SyncConfig::default();

    let sync_fn = {
        let orders = orders.clone();
        let notify = notify.clone();
        let engine = engine.clone();
        let in_flight = in_flight.clone();
        let active = active.clone();
        let is_syncing = is_syncing.clone();

        Callback::from(move |_| {
            // Not logged in: background sync simply waits.
            let Some(token) = load_auth_token() else {
                return;
            };
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;

            let orders = orders.clone();
            let notify = notify.clone();
            let engine = engine.clone();
            let in_flight = in_flight.clone();
            let active = active.clone();
            let is_syncing = is_syncing.clone();

            spawn_local(async move {
                is_syncing.set(true);
                match ApiClient::new().get_my_orders(page, limit, &token).await {
                    Ok(fetched) => {
                        if *active.borrow() {
                            let intents = engine.borrow_mut().observe(&fetched.orders);
                            for intent in intents {
                                notify.emit(intent);
                            }
                            // Store write only on an actual change, to keep
                            // re-render churn down.
                            if orders_differ(&orders.orders(), &fetched.orders) {
                                log::info!(
                                    "📦 Orders list changed, updating store ({} orders)",
                                    fetched.orders.len()
                                );
                                orders.replace_orders(fetched.orders, fetched.pagination);
                            }
                        }
                    }
                    Err(e) => log::error!("❌ Orders sync failed: {}", e),
                }
                if *active.borrow() {
                    is_syncing.set(false);
                }
                *in_flight.borrow_mut() = false;
            });
        })
    };

    {
        let sync_fn = sync_fn.clone();
        let interval_handle = interval_handle.clone();
        let active = active.clone();
        let interval_ms = config.orders_list_interval_ms;

        use_effect_with((page, limit), move |_| {
            log::info!("⏰ Orders sync active: every {}ms", interval_ms);
            *active.borrow_mut() = true;

            sync_fn.emit(());
            let tick = sync_fn.clone();
            *interval_handle.borrow_mut() =
                Some(Interval::new(interval_ms, move || tick.emit(())));

            move || {
                *active.borrow_mut() = false;
                *interval_handle.borrow_mut() = None;
                log::info!("🛑 Orders sync stopped");
            }
        });
    }

    UseOrdersSyncHandle {
        is_syncing,
        force_sync: sync_fn,
    }
}
