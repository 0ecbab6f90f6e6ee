// ============================================================================
// ADMIN ORDERS SYNC ENGINE - New-order counting over the admin list
// ============================================================================
// Coarser than the user-facing engines on purpose: the admin list changes
// constantly, so the fetched page is pushed into the store unconditionally
// and only the total count is diffed.
// ============================================================================

use crate::models::Severity;
use crate::sync::NotificationIntent;

pub struct AdminOrdersSyncEngine {
    previous_total: Option<u64>,
}

impl AdminOrdersSyncEngine {
    pub fn new() -> Self {
        Self { previous_total: None }
    }

    /// Track the total order count across fetches. Returns how many new
    /// orders arrived since the previous successful cycle, if any; the
    /// first cycle only seeds.
    pub fn observe_total(&mut self, total: u64) -> Option<u64> {
        let delta = match self.previous_total {
            Some(previous) if total > previous => Some(total - previous),
            _ => None,
        };
        self.previous_total = Some(total);
        delta
    }
}

impl Default for AdminOrdersSyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_orders_notification(delta: u64) -> NotificationIntent {
    NotificationIntent::new(
        format!("🛒 {} new orders received!", delta),
        Severity::Success,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sync_only_seeds() {
        let mut engine = AdminOrdersSyncEngine::new();
        assert_eq!(engine.observe_total(40), None);
    }

    #[test]
    fn growth_reports_the_delta() {
        let mut engine = AdminOrdersSyncEngine::new();
        engine.observe_total(40);
        assert_eq!(engine.observe_total(43), Some(3));

        let intent = new_orders_notification(3);
        assert!(intent.message.contains("3 new orders received!"));
        assert_eq!(intent.severity, Severity::Success);
    }

    #[test]
    fn equal_or_shrinking_totals_stay_quiet() {
        let mut engine = AdminOrdersSyncEngine::new();
        engine.observe_total(40);
        assert_eq!(engine.observe_total(40), None);
        assert_eq!(engine.observe_total(38), None);
        // the baseline follows the latest fetch even when it shrinks
        assert_eq!(engine.observe_total(39), Some(1));
    }
}
