// ============================================================================
// ORDERS-LIST SYNC ENGINE - Per-order diffs over the my-orders page
// ============================================================================

use std::collections::HashMap;

use crate::models::{Order, Severity};
use crate::sync::order_sync::{status_message, tracking_newly_present};
use crate::sync::NotificationIntent;
use crate::utils::format::short_order_id;

/// Remembered fields per order id. Leaner than the single-order baseline:
/// the list view never shows delivery estimates.
#[derive(Clone, Debug, PartialEq)]
struct ListedOrderSnapshot {
    order_status: String,
    tracking_number: Option<String>,
}

impl From<&Order> for ListedOrderSnapshot {
    fn from(order: &Order) -> Self {
        Self {
            order_status: order.order_status.clone(),
            tracking_number: order.tracking_number.clone(),
        }
    }
}

pub struct OrdersListSyncEngine {
    snapshots: HashMap<String, ListedOrderSnapshot>,
    first_run: bool,
}

impl OrdersListSyncEngine {
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
            first_run: true,
        }
    }

    /// Diff a fetched page against the remembered per-order snapshots.
    /// First fetch seeds silently; orders appearing later (new purchase,
    /// page change) seed silently too.
    pub fn observe(&mut self, orders: &[Order]) -> Vec<NotificationIntent> {
        if self.first_run {
            for order in orders {
                self.snapshots.insert(order.id.clone(), order.into());
            }
            self.first_run = false;
            return Vec::new();
        }

        let mut intents = Vec::new();
        for order in orders {
            if let Some(prev) = self.snapshots.get(&order.id) {
                let subject = format!("Order #{}", short_order_id(&order.id));

                if order.order_status != prev.order_status {
                    intents.push(status_message(&order.order_status, &subject));
                }

                if tracking_newly_present(&prev.tracking_number, &order.tracking_number) {
                    intents.push(NotificationIntent::new(
                        format!(
                            "📍 {}: tracking number available: {}",
                            subject,
                            order.tracking_number.as_deref().unwrap_or_default()
                        ),
                        Severity::Info,
                    ));
                }
            }
            self.snapshots.insert(order.id.clone(), order.into());
        }
        intents
    }
}

impl Default for OrdersListSyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap replace-or-not heuristic for the shared orders list: length
/// mismatch, or any positional difference in id/status/tracking. Position
/// based on purpose, so a reordered page counts as a change.
pub fn orders_differ(current: &[Order], fresh: &[Order]) -> bool {
    if current.len() != fresh.len() {
        return true;
    }

    for (curr, new_order) in current.iter().zip(fresh.iter()) {
        if curr.id != new_order.id {
            return true; // order of the page changed
        }
        if curr.order_status != new_order.order_status {
            return true;
        }
        if curr.tracking_number != new_order.tracking_number {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: &str, tracking: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            order_status: status.to_string(),
            tracking_number: tracking.map(str::to_string),
            estimated_delivery: None,
            total_amount: 100.0,
            created_at: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn first_fetch_seeds_without_notifying() {
        let mut engine = OrdersListSyncEngine::new();
        let intents = engine.observe(&[
            order("64aaaaaaaaaaaaaaaaab12cd", "confirmed", None),
            order("64bbbbbbbbbbbbbbbbef56gh", "shipped", Some("TRK1")),
        ]);
        assert!(intents.is_empty());
    }

    #[test]
    fn status_change_is_prefixed_with_short_id() {
        let mut engine = OrdersListSyncEngine::new();
        engine.observe(&[order("64aaaaaaaaaaaaaaaaab12cd", "confirmed", None)]);
        let intents = engine.observe(&[order("64aaaaaaaaaaaaaaaaab12cd", "shipped", None)]);

        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("Order #AB12CD"));
        assert!(intents[0].message.contains("shipped"));
        assert_eq!(intents[0].severity, Severity::Success);
    }

    #[test]
    fn tracking_appearance_references_short_id() {
        let mut engine = OrdersListSyncEngine::new();
        engine.observe(&[order("64aaaaaaaaaaaaaaaaab12cd", "shipped", None)]);
        let intents = engine.observe(&[order("64aaaaaaaaaaaaaaaaab12cd", "shipped", Some("TRK7"))]);

        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("Order #AB12CD"));
        assert!(intents[0].message.contains("TRK7"));
    }

    #[test]
    fn unseen_order_seeds_silently_then_diffs() {
        let mut engine = OrdersListSyncEngine::new();
        engine.observe(&[order("a", "confirmed", None)]);

        // a new purchase shows up on a later page fetch: quiet
        let intents = engine.observe(&[
            order("a", "confirmed", None),
            order("b", "processing", None),
        ]);
        assert!(intents.is_empty());

        // from then on it participates
        let intents = engine.observe(&[order("b", "shipped", None)]);
        assert_eq!(intents.len(), 1);
    }

    #[test]
    fn orders_differ_on_length_status_and_position() {
        let a = order("a", "confirmed", None);
        let b = order("b", "shipped", Some("TRK1"));

        assert!(orders_differ(&[a.clone()], &[a.clone(), b.clone()]));
        assert!(orders_differ(
            &[a.clone()],
            &[order("a", "shipped", None)]
        ));
        assert!(orders_differ(
            &[a.clone()],
            &[order("a", "confirmed", Some("TRK2"))]
        ));
        // pure reorder counts as a change (position based comparison)
        assert!(orders_differ(
            &[a.clone(), b.clone()],
            &[b.clone(), a.clone()]
        ));
        assert!(!orders_differ(&[a.clone(), b.clone()], &[a, b]));
    }
}
