// ============================================================================
// USE ADMIN ORDERS SYNC HOOK - Back-office all-orders polling
// ============================================================================
// Starts 1 second after activation (the screen's primary fetch goes
// first), then polls every 5 seconds. The query (page, status filter) is
// re-derived from the admin store on every tick, and the fetched page is
// pushed unconditionally; only the total count is diffed, for the "N new
// orders" notification.
// ============================================================================

use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;

use crate::config::SyncConfig;
use crate::services::{load_auth_token, ApiClient};
use crate::stores::AdminOrdersStore;
use crate::sync::{new_orders_notification, AdminOrdersSyncEngine, NotificationIntent};

pub struct UseAdminOrdersSyncHandle {
    pub is_syncing: UseStateHandle<bool>,
    pub force_sync: Callback<()>,
}

#[hook]
pub fn use_admin_orders_sync(
    admin: AdminOrdersStore,
    notify: Callback<NotificationIntent>,
) -> UseAdminOrdersSyncHandle {
    let is_syncing = use_state(|| false);
    let engine = use_mut_ref(AdminOrdersSyncEngine::new);
    let in_flight = use_mut_ref(|| false);
    let active = use_mut_ref(|| true);
    let timeout_handle = use_mut_ref(|| None::<Timeout>);
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let config = SyncConfig::default();

    let sync_fn = {
        let admin = admin.clone();
        let notify = notify.clone();
        let engine = engine.clone();
        let in_flight = in_flight.clone();
        let active = active.clone();
        let is_syncing = is_syncing.clone();
        let page_limit = config.admin_page_limit;

        Callback::from(move |_| {
            let Some(token) = load_auth_token() else {
                return;
            };
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;

            // Query follows whatever the back-office screen currently shows.
            let page = admin.pagination().page;
            let status = admin.status_filter();

            let admin = admin.clone();
            let notify = notify.clone();
            let engine = engine.clone();
            let in_flight = in_flight.clone();
            let active = active.clone();
            let is_syncing = is_syncing.clone();

            spawn_local(async move {
                is_syncing.set(true);
                match ApiClient::new()
                    .get_admin_orders(page, page_limit, status.as_deref(), &token)
                    .await
                {
                    Ok(fetched) => {
                        if *active.borrow() {
                            if let Some(delta) =
                                engine.borrow_mut().observe_total(fetched.pagination.total)
                            {
                                log::info!("🛎️ {} new orders since last poll", delta);
                                notify.emit(new_orders_notification(delta));
                                admin.add_new_orders(delta);
                            }
                            admin.replace_orders(fetched.orders, fetched.pagination);
                        }
                    }
                    Err(e) => log::error!("❌ Admin orders sync failed: {}", e),
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
        let timeout_handle = timeout_handle.clone();
        let interval_handle = interval_handle.clone();
        let active = active.clone();
        let delay_ms = config.admin_initial_delay_ms;
        let interval_ms = config.admin_interval_ms;

        use_effect_with((), move |_| {
            log::info!("⏰ Admin orders sync active: every {}ms after {}ms", interval_ms, delay_ms);
            *active.borrow_mut() = true;

            let first = sync_fn.clone();
            *timeout_handle.borrow_mut() =
                Some(Timeout::new(delay_ms, move || first.emit(())));
            let tick = sync_fn.clone();
            *interval_handle.borrow_mut() =
                Some(Interval::new(interval_ms, move || tick.emit(())));

            move || {
                *active.borrow_mut() = false;
                *timeout_handle.borrow_mut() = None;
                *interval_handle.borrow_mut() = None;
                log::info!("🛑 Admin orders sync stopped");
            }
        });
    }

    UseAdminOrdersSyncHandle {
        is_syncing,
        force_sync: sync_fn,
    }
}
