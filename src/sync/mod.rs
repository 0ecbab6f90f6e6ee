// ============================================================================
// SYNC ENGINES - Background reconciliation of server state into the stores
// ============================================================================
// Four engines, one per polled entity class. Each owns its own snapshot
// baselines (constructed per activation, dropped on teardown) and exposes
// pure observe/merge operations; the hooks own timers, fetching and the
// actual store writes.
// ============================================================================

pub mod admin_orders_sync;
pub mod order_sync;
pub mod orders_list_sync;
pub mod price_sync;

pub use admin_orders_sync::{new_orders_notification, AdminOrdersSyncEngine};
pub use order_sync::{status_message, OrderSnapshot, OrderSyncEngine, OrderSyncOutcome};
pub use orders_list_sync::{orders_differ, OrdersListSyncEngine};
pub use price_sync::{
    important_ids, list_ids_changed, merge_cart, merge_current_product, merge_product_list,
    merge_wishlist, target_ids, PriceSyncEngine, ProductSnapshot,
};

use crate::models::Severity;

/// A notification an engine wants shown. Engines return these instead of
/// touching the notification queue themselves, so every diff rule stays
/// testable without a browser.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationIntent {
    pub message: String,
    pub severity: Severity,
}

impl NotificationIntent {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}
