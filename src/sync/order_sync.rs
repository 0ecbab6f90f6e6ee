// ============================================================================
// ORDER SYNC ENGINE - Status/tracking/delivery changes for one order
// ============================================================================
// Not self-scheduling: the order screen drives sync_order() on its own
// timer (1s initial delay, then every 3s) so the primary fetch always
// lands first. The engine never writes shared state; it hands the fresh
// order back to the caller.
// ============================================================================

use crate::models::{Order, Severity};
use crate::sync::NotificationIntent;
use crate::utils::format::format_delivery_date;

/// Baseline of the fields that trigger notifications.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSnapshot {
    pub order_status: String,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<String>,
}

impl From<&Order> for OrderSnapshot {
    fn from(order: &Order) -> Self {
        Self {
            order_status: order.order_status.clone(),
            tracking_number: order.tracking_number.clone(),
            estimated_delivery: order.estimated_delivery.clone(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct OrderSyncOutcome {
    pub notifications: Vec<NotificationIntent>,
    pub has_changes: bool,
}

pub struct OrderSyncEngine {
    baseline: Option<OrderSnapshot>,
}

impl OrderSyncEngine {
    pub fn new() -> Self {
        Self { baseline: None }
    }

    /// Diff a freshly fetched order against the baseline. The three checks
    /// (status, tracking, delivery estimate) are independent; any subset
    /// may fire in one cycle. The first observation only seeds.
    pub fn observe(&mut self, order: &Order) -> OrderSyncOutcome {
        let next = OrderSnapshot::from(order);

        let outcome = match &self.baseline {
            None => OrderSyncOutcome {
                notifications: Vec::new(),
                has_changes: false,
            },
            Some(prev) => {
                let mut notifications = Vec::new();

                if next.order_status != prev.order_status {
                    notifications.push(status_message(&next.order_status, "Your order"));
                }

                if tracking_newly_present(&prev.tracking_number, &next.tracking_number) {
                    notifications.push(NotificationIntent::new(
                        format!(
                            "📍 Tracking number assigned: {}",
                            next.tracking_number.as_deref().unwrap_or_default()
                        ),
                        Severity::Info,
                    ));
                }

                if let Some(delivery) = changed_delivery(&prev.estimated_delivery, &next.estimated_delivery) {
                    notifications.push(NotificationIntent::new(
                        format!("📅 Estimated delivery updated: {}", format_delivery_date(delivery)),
                        Severity::Info,
                    ));
                }

                OrderSyncOutcome {
                    has_changes: next != *prev,
                    notifications,
                }
            }
        };

        self.baseline = Some(next);
        outcome
    }
}

impl Default for OrderSyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The status wording table, shared with the orders-list engine. `subject`
/// is "Your order" on the order screen and "Order #AB12CD" in lists.
pub fn status_message(status: &str, subject: &str) -> NotificationIntent {
    match status {
        "delivered" => NotificationIntent::new(
            format!("🎉 {} has been delivered!", subject),
            Severity::Success,
        ),
        "shipped" => NotificationIntent::new(
            format!("📦 {} has been shipped!", subject),
            Severity::Success,
        ),
        "out_for_delivery" => NotificationIntent::new(
            format!("🚚 {} is out for delivery!", subject),
            Severity::Info,
        ),
        "cancelled" => NotificationIntent::new(
            format!("❌ {} has been cancelled", subject),
            Severity::Error,
        ),
        "processing" => NotificationIntent::new(
            format!("⏳ {} is being processed", subject),
            Severity::Info,
        ),
        "confirmed" => NotificationIntent::new(
            format!("✅ {} has been confirmed", subject),
            Severity::Success,
        ),
        other => NotificationIntent::new(
            format!("{} status updated to {}", subject, other),
            Severity::Info,
        ),
    }
}

/// True when a tracking number appears for the first time (was missing or
/// empty, now non-empty). A tracking number changing later does not fire.
pub fn tracking_newly_present(prev: &Option<String>, next: &Option<String>) -> bool {
    let was_empty = prev.as_deref().map_or(true, str::is_empty);
    let now_present = next.as_deref().map_or(false, |t| !t.is_empty());
    was_empty && now_present
}

/// The new estimate when it is non-empty and differs from the baseline.
fn changed_delivery<'a>(prev: &Option<String>, next: &'a Option<String>) -> Option<&'a str> {
    match next.as_deref() {
        Some(estimate) if !estimate.is_empty() && next != prev => Some(estimate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, tracking: Option<&str>, delivery: Option<&str>) -> Order {
        Order {
            id: "64ab12cd34ef56gh78ab12cd".to_string(),
            order_status: status.to_string(),
            tracking_number: tracking.map(str::to_string),
            estimated_delivery: delivery.map(str::to_string),
            total_amount: 499.0,
            created_at: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn first_observation_seeds_silently() {
        let mut engine = OrderSyncEngine::new();
        let outcome = engine.observe(&order("confirmed", None, None));
        assert!(outcome.notifications.is_empty());
        assert!(!outcome.has_changes);
    }

    #[test]
    fn confirmed_to_shipped_emits_exactly_one_success() {
        let mut engine = OrderSyncEngine::new();
        engine.observe(&order("confirmed", None, None));
        let outcome = engine.observe(&order("shipped", None, None));

        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(outcome.notifications[0].severity, Severity::Success);
        assert!(outcome.notifications[0].message.starts_with("📦"));
        assert!(outcome.notifications[0].message.contains("shipped"));
        assert!(outcome.has_changes);

        // baseline moved to "shipped": repeating is silent
        let outcome = engine.observe(&order("shipped", None, None));
        assert!(outcome.notifications.is_empty());
        assert!(!outcome.has_changes);
    }

    #[test]
    fn unknown_status_gets_generic_wording() {
        let mut engine = OrderSyncEngine::new();
        engine.observe(&order("confirmed", None, None));
        let outcome = engine.observe(&order("on_hold", None, None));
        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(
            outcome.notifications[0].message,
            "Your order status updated to on_hold"
        );
        assert_eq!(outcome.notifications[0].severity, Severity::Info);
    }

    #[test]
    fn tracking_number_fires_only_on_first_appearance() {
        let mut engine = OrderSyncEngine::new();
        engine.observe(&order("shipped", None, None));

        let outcome = engine.observe(&order("shipped", Some("TRK123"), None));
        assert_eq!(outcome.notifications.len(), 1);
        assert!(outcome.notifications[0].message.contains("TRK123"));
        assert_eq!(outcome.notifications[0].severity, Severity::Info);

        // changing an existing number stays quiet
        let outcome = engine.observe(&order("shipped", Some("TRK999"), None));
        assert!(outcome.notifications.is_empty());
        assert!(outcome.has_changes);
    }

    #[test]
    fn delivery_estimate_change_notifies_with_formatted_date() {
        let mut engine = OrderSyncEngine::new();
        engine.observe(&order("shipped", Some("TRK123"), Some("2026-08-10T00:00:00Z")));
        let outcome =
            engine.observe(&order("shipped", Some("TRK123"), Some("2026-08-14T00:00:00Z")));
        assert_eq!(outcome.notifications.len(), 1);
        assert!(outcome.notifications[0].message.contains("14 Aug 2026"));

        // same estimate again: nothing
        let outcome =
            engine.observe(&order("shipped", Some("TRK123"), Some("2026-08-14T00:00:00Z")));
        assert!(outcome.notifications.is_empty());
    }

    #[test]
    fn independent_checks_can_all_fire_in_one_cycle() {
        let mut engine = OrderSyncEngine::new();
        engine.observe(&order("confirmed", None, None));
        let outcome = engine.observe(&order(
            "shipped",
            Some("TRK123"),
            Some("2026-08-14T00:00:00Z"),
        ));
        assert_eq!(outcome.notifications.len(), 3);
        assert!(outcome.has_changes);
    }
}
