// ============================================================================
// USE ORDER SYNC HOOK - Single-order refresh for the order detail screen
// ============================================================================
// Not self-scheduling: the screen wires its own timer (1s initial delay so
// the primary fetch lands first, then every 3s) and calls sync_order. The
// fresh order goes back through on_synced; the screen decides whether to
// replace what it is showing.
// ============================================================================

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::Order;
use crate::services::{load_auth_token, ApiClient};
use crate::sync::{NotificationIntent, OrderSyncEngine};

#[derive(Clone, PartialEq)]
pub struct OrderSyncUpdate {
    pub order: Order,
    pub has_changes: bool,
}

pub struct UseOrderSyncHandle {
    pub sync_order: Callback<()>,
}

#[hook]
pub fn use_order_sync(
    order_id: Option<String>,
    notify: Callback<NotificationIntent>,
    on_synced: Callback<OrderSyncUpdate>,
) -> UseOrderSyncHandle {
    let engine = use_mut_ref(OrderSyncEngine::new);
    let in_flight = use_mut_ref(|| false);

    // Navigating to a different order must not diff against the previous
    // one's baseline.
    {
        let engine = engine.clone();
        use_effect_with(order_id.clone(), move |_| {
            *engine.borrow_mut() = OrderSyncEngine::new();
        });
    }

    let sync_order = {
        let engine = engine.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |_| {
            // No order or no login: nothing to poll, not an error.
            let Some(order_id) = order_id.clone() else {
                return;
            };
            let Some(token) = load_auth_token() else {
                return;
            };
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;

            let engine = engine.clone();
            let in_flight = in_flight.clone();
            let notify = notify.clone();
            let on_synced = on_synced.clone();

            spawn_local(async move {
                match ApiClient::new().get_order(&order_id, &token).await {
                    Ok(order) => {
                        let outcome = engine.borrow_mut().observe(&order);
                        for intent in outcome.notifications {
                            notify.emit(intent);
                        }
                        on_synced.emit(OrderSyncUpdate {
                            order,
                            has_changes: outcome.has_changes,
                        });
                    }
                    Err(e) => log::error!("❌ Order sync failed: {}", e),
                }
                *in_flight.borrow_mut() = false;
            });
        })
    };

    UseOrderSyncHandle { sync_order }
}
