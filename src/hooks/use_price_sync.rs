// ============================================================================
// USE PRICE SYNC HOOK - Background price/discount/stock polling
// ============================================================================
// Every 3 seconds (plus once immediately on activation):
//   1. collect the deduplicated target id set from the shop store,
//   2. batch-fetch projections, diff against the engine baselines and
//      notify on important deltas,
//   3. refresh the featured/discounted lists (runs even when the target
//      set is empty), replacing them only when the id set changed,
//   4. merge the projections into cart/wishlist/current/lists, each write
//      guarded by its own did-anything-change check.
// ============================================================================

use std::collections::HashMap;

use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::SyncConfig;
use crate::models::ProductInfo;
use crate::services::ApiClient;
use crate::stores::ShopStore;
use crate::sync::price_sync::{
    important_ids, list_ids_changed, merge_cart, merge_current_product, merge_product_list,
    merge_wishlist, target_ids,
};
use crate::sync::{NotificationIntent, PriceSyncEngine};

pub struct UsePriceSyncHandle {
    pub is_syncing: UseStateHandle<bool>,
    pub last_sync: UseStateHandle<Option<chrono::DateTime<chrono::Utc>>>,
    pub force_sync: Callback<()>,
}

#[hook]
pub fn use_price_sync(shop: ShopStore, notify: Callback<NotificationIntent>) -> UsePriceSyncHandle {
    let is_syncing = use_state(|| false);
    let last_sync = use_state(|| None::<chrono::DateTime<chrono::Utc>>);
    let engine = use_mut_ref(PriceSyncEngine::new);
    let in_flight = use_mut_ref(|| false);
    let active = use_mut_ref(|| true);
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let config = SyncConfig::default();

    let sync_fn = {
        let shop = shop.clone();
        let notify = notify.clone();
        let engine = engine.clone();
        let in_flight = in_flight.clone();
        let active = active.clone();
        let is_syncing = is_syncing.clone();
        let last_sync = last_sync.clone();
        let config = config.clone();

        Callback::from(move |_| {
            // Overlapping cycles are possible when a round trip outlasts
            // the interval; skip the tick instead.
            if *in_flight.borrow() {
                log::info!("⏭️ Price sync cycle still in flight, skipping tick");
                return;
            }
            *in_flight.borrow_mut() = true;

            let shop = shop.clone();
            let notify = notify.clone();
            let engine = engine.clone();
            let in_flight = in_flight.clone();
            let active = active.clone();
            let is_syncing = is_syncing.clone();
            let last_sync = last_sync.clone();
            let config = config.clone();

            spawn_local(async move {
                is_syncing.set(true);
                let api = ApiClient::new();

                let cart = shop.cart();
                let wishlist = shop.wishlist();
                let current = shop.current_product();
                let products = shop.products();

                let ids = target_ids(
                    &cart,
                    &wishlist,
                    current.as_ref(),
                    &products,
                    &shop.featured(),
                    &shop.discounted(),
                    config.general_list_count,
                );
                let important = important_ids(&cart, &wishlist);

                let mut fetched_by_id: HashMap<String, ProductInfo> = HashMap::new();
                if !ids.is_empty() {
                    match api.fetch_products_batch(&ids).await {
                        Ok(fetched) => {
                            if *active.borrow() {
                                let intents =
                                    engine.borrow_mut().observe_batch(&fetched, &important);
                                for intent in intents {
                                    notify.emit(intent);
                                }
                                fetched_by_id = fetched
                                    .into_iter()
                                    .map(|info| (info.id.clone(), info))
                                    .collect();
                            }
                        }
                        Err(e) => log::error!("❌ Price sync batch fetch failed: {}", e),
                    }
                }

                // Featured/discounted refresh runs regardless of the
                // target set, both requests in flight together.
                let (featured_fresh, discounted_fresh) = futures::future::join(
                    api.fetch_featured(config.special_list_limit),
                    api.fetch_discounted(config.special_list_limit),
                )
                .await;

                if *active.borrow() {
                    match featured_fresh {
                        Ok(fresh) => {
                            if list_ids_changed(&shop.featured(), &fresh) {
                                log::info!("✨ Featured list changed, replacing ({} items)", fresh.len());
                                shop.replace_featured(fresh);
                            }
                        }
                        Err(e) => log::error!("❌ Featured refresh failed: {}", e),
                    }
                    match discounted_fresh {
                        Ok(fresh) => {
                            if list_ids_changed(&shop.discounted(), &fresh) {
                                log::info!("🏷️ Discounted list changed, replacing ({} items)", fresh.len());
                                shop.replace_discounted(fresh);
                            }
                        }
                        Err(e) => log::error!("❌ Discounted refresh failed: {}", e),
                    }

                    // Merge the fetched projections into every slice that
                    // holds these products, re-reading each slice so the
                    // overlay lands on the latest state.
                    if !fetched_by_id.is_empty() {
                        if let Some(merged) = merge_cart(&shop.cart(), &fetched_by_id) {
                            shop.apply_cart_merge(merged);
                        }
                        if let Some(merged) = merge_wishlist(&shop.wishlist(), &fetched_by_id) {
                            shop.apply_wishlist_merge(merged);
                        }
                        if let Some(merged) = shop
                            .current_product()
                            .as_ref()
                            .and_then(|c| merge_current_product(c, &fetched_by_id))
                        {
                            shop.apply_current_product_merge(merged);
                        }
                        if let Some(merged) = merge_product_list(&shop.products(), &fetched_by_id) {
                            shop.apply_products_merge(merged);
                        }
                        if let Some(merged) = merge_product_list(&shop.featured(), &fetched_by_id) {
                            shop.apply_featured_merge(merged);
                        }
                        if let Some(merged) = merge_product_list(&shop.discounted(), &fetched_by_id)
                        {
                            shop.apply_discounted_merge(merged);
                        }
                    }

                    is_syncing.set(false);
                    last_sync.set(Some(chrono::Utc::now()));
                }

                *in_flight.borrow_mut() = false;
            });
        })
    };

    {
        let sync_fn = sync_fn.clone();
        let interval_handle = interval_handle.clone();
        let active = active.clone();
        let interval_ms = config.price_interval_ms;

        use_effect_with((), move |_| {
            log::info!("⏰ Price sync active: every {}ms", interval_ms);
            *active.borrow_mut() = true;

            sync_fn.emit(());
            let tick = sync_fn.clone();
            *interval_handle.borrow_mut() =
                Some(Interval::new(interval_ms, move || tick.emit(())));

            move || {
                *active.borrow_mut() = false;
                *interval_handle.borrow_mut() = None;
                log::info!("🛑 Price sync stopped");
            }
        });
    }

    UsePriceSyncHandle {
        is_syncing,
        last_sync,
        force_sync: sync_fn,
    }
}
