// ============================================================================
// SYNC / NOTIFICATION CONFIG - Tunables for the background sync hooks
// ============================================================================

/// Polling cadence and fetch limits of the four sync engines. The defaults
/// are what production runs; hooks read them once on activation.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncConfig {
    /// Price/stock batch poll (use_price_sync)
    pub price_interval_ms: u32,
    /// Single-order poll cadence, wired by the order screen
    pub order_interval_ms: u32,
    /// Delay before the first order poll, so the primary fetch lands first
    pub order_initial_delay_ms: u32,
    /// My-orders page poll (use_orders_sync)
    pub orders_list_interval_ms: u32,
    /// Admin all-orders poll (use_admin_orders_sync)
    pub admin_interval_ms: u32,
    pub admin_initial_delay_ms: u32,
    /// How many ids of the general product list join each batch poll
    pub general_list_count: usize,
    /// Page size for the featured/discounted refreshes
    pub special_list_limit: u32,
    /// Page size for the admin all-orders query
    pub admin_page_limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            price_interval_ms: 3_000,
            order_interval_ms: 3_000,
            order_initial_delay_ms: 1_000,
            orders_list_interval_ms: 5_000,
            admin_interval_ms: 5_000,
            admin_initial_delay_ms: 1_000,
            general_list_count: 20,
            special_list_limit: 8,
            admin_page_limit: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationConfig {
    /// Hard cap on concurrently visible notifications
    pub max_visible: usize,
    /// Lifetime of each notification before it self-removes
    pub ttl_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { max_visible: 5, ttl_ms: 4_000 }
    }
}
