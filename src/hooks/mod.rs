pub mod use_admin_orders_sync;
pub mod use_notifications;
pub mod use_order_sync;
pub mod use_orders_sync;
pub mod use_price_sync;

pub use use_admin_orders_sync::{use_admin_orders_sync, UseAdminOrdersSyncHandle};
pub use use_notifications::{use_notifications, UseNotificationsHandle};
pub use use_order_sync::{use_order_sync, OrderSyncUpdate, UseOrderSyncHandle};
pub use use_orders_sync::{use_orders_sync, UseOrdersSyncHandle};
pub use use_price_sync::{use_price_sync, UsePriceSyncHandle};
