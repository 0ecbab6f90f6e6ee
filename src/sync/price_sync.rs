// ============================================================================
// PRICE SYNC ENGINE - Product price/discount/stock reconciliation
// ============================================================================
// Polls the batch projection endpoint for every product the user can see
// (cart, wishlist, current view, first page, featured, discounted), then:
//  - notifies on "important" deltas (cart/wishlist members only),
//  - proposes merge-if-different overlays for five store slices.
// ============================================================================

use std::collections::{HashMap, HashSet};

use crate::models::{CartItem, Product, ProductInfo, Severity, WishlistEntry};
use crate::sync::NotificationIntent;
use crate::utils::constants::LOW_STOCK_THRESHOLD;
use crate::utils::format::{format_discount, format_price};

/// The mutable product fields tracked for change detection. Never used as
/// a render source, only as the previous-poll baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSnapshot {
    pub price: f64,
    pub discount: f64,
    pub in_stock: u32,
}

impl From<&ProductInfo> for ProductSnapshot {
    fn from(info: &ProductInfo) -> Self {
        Self {
            price: info.price,
            discount: info.discount,
            in_stock: info.in_stock,
        }
    }
}

pub struct PriceSyncEngine {
    snapshots: HashMap<String, ProductSnapshot>,
    first_run: bool,
}

impl PriceSyncEngine {
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
            first_run: true,
        }
    }

    /// Compare a batch fetch against the stored baselines and return the
    /// notifications to show. Baselines are always overwritten afterwards,
    /// for every observed id, so the next comparison starts from the
    /// latest fetch.
    ///
    /// Suppression rules:
    /// - the very first batch this engine instance sees only seeds,
    /// - an id seen for the first time (added to cart later, say) seeds
    ///   silently too,
    /// - ids outside `important` update their baseline without notifying.
    pub fn observe_batch(
        &mut self,
        fetched: &[ProductInfo],
        important: &HashSet<String>,
    ) -> Vec<NotificationIntent> {
        if self.first_run {
            for info in fetched {
                self.snapshots.insert(info.id.clone(), info.into());
            }
            self.first_run = false;
            return Vec::new();
        }

        let mut intents = Vec::new();
        for info in fetched {
            if let Some(prev) = self.snapshots.get(&info.id) {
                if important.contains(&info.id) {
                    intents.extend(diff_product(&info.name, prev, &info.into()));
                }
            }
            self.snapshots.insert(info.id.clone(), info.into());
        }
        intents
    }
}

impl Default for PriceSyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify the delta between two snapshots of one product. At most one
/// notification per dimension (price, discount, stock); the stock checks
/// are ordered by priority and mutually exclusive.
fn diff_product(
    name: &str,
    prev: &ProductSnapshot,
    next: &ProductSnapshot,
) -> Vec<NotificationIntent> {
    let mut intents = Vec::new();

    if next.price > prev.price {
        intents.push(NotificationIntent::new(
            format!("📈 {}: price increased. Now {}", name, format_price(next.price)),
            Severity::Price,
        ));
    } else if next.price < prev.price {
        intents.push(NotificationIntent::new(
            format!("📉 {}: price decreased! Now {}", name, format_price(next.price)),
            Severity::Price,
        ));
    }

    if next.discount > prev.discount {
        intents.push(NotificationIntent::new(
            format!("🎉 {}: {}% off!", name, format_discount(next.discount)),
            Severity::Success,
        ));
    } else if prev.discount > 0.0 && next.discount == 0.0 {
        intents.push(NotificationIntent::new(
            format!("⚠️ {}: discount ended", name),
            Severity::Warning,
        ));
    }

    if prev.in_stock == 0 && next.in_stock > 0 {
        intents.push(NotificationIntent::new(
            format!("🎊 {} is back in stock!", name),
            Severity::Success,
        ));
    } else if prev.in_stock > 0 && next.in_stock == 0 {
        intents.push(NotificationIntent::new(
            format!("⚠️ {} is out of stock", name),
            Severity::Warning,
        ));
    } else if next.in_stock > 0
        && next.in_stock <= LOW_STOCK_THRESHOLD
        && prev.in_stock > LOW_STOCK_THRESHOLD
    {
        intents.push(NotificationIntent::new(
            format!("⚠️ {}: only {} left in stock!", name, next.in_stock),
            Severity::Warning,
        ));
    }

    intents
}

/// The deduplicated union of every product id a poll cycle must cover.
/// Order follows the source collections so the batch request stays stable
/// across cycles with unchanged state.
pub fn target_ids(
    cart: &[CartItem],
    wishlist: &[WishlistEntry],
    current: Option<&Product>,
    products: &[Product],
    featured: &[Product],
    discounted: &[Product],
    general_list_count: usize,
) -> Vec<String> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();

    for item in cart {
        push_unique(&mut ids, &mut seen, &item.id);
    }
    for entry in wishlist {
        push_unique(&mut ids, &mut seen, entry.id());
    }
    if let Some(product) = current {
        push_unique(&mut ids, &mut seen, &product.id);
    }
    for product in products.iter().take(general_list_count) {
        push_unique(&mut ids, &mut seen, &product.id);
    }
    for product in featured {
        push_unique(&mut ids, &mut seen, &product.id);
    }
    for product in discounted {
        push_unique(&mut ids, &mut seen, &product.id);
    }

    ids
}

fn push_unique(ids: &mut Vec<String>, seen: &mut HashSet<String>, id: &str) {
    if seen.insert(id.to_string()) {
        ids.push(id.to_string());
    }
}

/// Ids eligible for user-facing notifications: cart and wishlist members,
/// recomputed fresh each cycle.
pub fn important_ids(cart: &[CartItem], wishlist: &[WishlistEntry]) -> HashSet<String> {
    let mut ids: HashSet<String> = cart.iter().map(|item| item.id.clone()).collect();
    ids.extend(wishlist.iter().map(|entry| entry.id().to_string()));
    ids
}

/// Whole-list replacement guard for the featured/discounted refreshes:
/// compares the sorted id sets, so reordering alone does not count.
pub fn list_ids_changed(current: &[Product], fresh: &[Product]) -> bool {
    list_fingerprint(current) != list_fingerprint(fresh)
}

fn list_fingerprint(list: &[Product]) -> String {
    let mut ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.join(",")
}

/// Overlay fetched projections onto the cart. Quantity is clamped down to
/// the new stock, never raised. Returns None when nothing changed, so the
/// store write (and its re-render) can be skipped.
pub fn merge_cart(
    items: &[CartItem],
    fetched: &HashMap<String, ProductInfo>,
) -> Option<Vec<CartItem>> {
    let mut changed = false;
    let merged: Vec<CartItem> = items
        .iter()
        .map(|item| match fetched.get(&item.id) {
            Some(info) => {
                let mut next = item.clone();
                next.price = info.price;
                next.discount = info.discount;
                next.in_stock = info.in_stock;
                if next.quantity > info.in_stock {
                    next.quantity = info.in_stock;
                }
                if next.price != item.price
                    || next.discount != item.discount
                    || next.in_stock != item.in_stock
                    || next.quantity != item.quantity
                {
                    changed = true;
                }
                next
            }
            None => item.clone(),
        })
        .collect();

    changed.then_some(merged)
}

/// Overlay fetched projections onto the wishlist, preserving each entry's
/// wire shape. Returns None when nothing changed.
pub fn merge_wishlist(
    entries: &[WishlistEntry],
    fetched: &HashMap<String, ProductInfo>,
) -> Option<Vec<WishlistEntry>> {
    let mut changed = false;
    let merged: Vec<WishlistEntry> = entries
        .iter()
        .map(|entry| match fetched.get(entry.id()) {
            Some(info) => {
                let product = entry.product();
                if product.price != info.price
                    || product.discount != info.discount
                    || product.in_stock != info.in_stock
                {
                    changed = true;
                    let mut next = product.clone();
                    next.price = info.price;
                    next.discount = info.discount;
                    next.in_stock = info.in_stock;
                    entry.with_product(next)
                } else {
                    entry.clone()
                }
            }
            None => entry.clone(),
        })
        .collect();

    changed.then_some(merged)
}

/// Per-item overlay for a product list, same rule as the wishlist.
pub fn merge_product_list(
    list: &[Product],
    fetched: &HashMap<String, ProductInfo>,
) -> Option<Vec<Product>> {
    let mut changed = false;
    let merged: Vec<Product> = list
        .iter()
        .map(|product| match fetched.get(&product.id) {
            Some(info)
                if product.price != info.price
                    || product.discount != info.discount
                    || product.in_stock != info.in_stock =>
            {
                changed = true;
                let mut next = product.clone();
                next.price = info.price;
                next.discount = info.discount;
                next.in_stock = info.in_stock;
                next
            }
            _ => product.clone(),
        })
        .collect();

    changed.then_some(merged)
}

/// Overlay for the currently viewed product, if the fetch covered it.
pub fn merge_current_product(
    current: &Product,
    fetched: &HashMap<String, ProductInfo>,
) -> Option<Product> {
    let info = fetched.get(&current.id)?;
    if current.price == info.price
        && current.discount == info.discount
        && current.in_stock == info.in_stock
    {
        return None;
    }
    let mut next = current.clone();
    next.price = info.price;
    next.discount = info.discount;
    next.in_stock = info.in_stock;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &str, price: f64, discount: f64, in_stock: u32) -> ProductInfo {
        ProductInfo {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            discount,
            in_stock,
        }
    }

    fn product(id: &str, price: f64, discount: f64, in_stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            discount,
            in_stock,
            image: None,
            category: None,
            description: None,
        }
    }

    fn cart_item(id: &str, price: f64, discount: f64, in_stock: u32, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            discount,
            in_stock,
            quantity,
            image: None,
        }
    }

    fn all_important(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn by_id(infos: Vec<ProductInfo>) -> HashMap<String, ProductInfo> {
        infos.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    #[test]
    fn first_run_seeds_without_notifying() {
        let mut engine = PriceSyncEngine::new();
        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &all_important(&["p1"]));
        assert!(intents.is_empty());
    }

    #[test]
    fn unknown_id_after_first_run_seeds_silently() {
        let mut engine = PriceSyncEngine::new();
        engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &all_important(&["p1"]));
        // p2 shows up later (added to cart): baseline only, no notification
        let intents = engine.observe_batch(
            &[info("p1", 100.0, 0.0, 10), info("p2", 999.0, 50.0, 1)],
            &all_important(&["p1", "p2"]),
        );
        assert!(intents.is_empty());
        // but from the next cycle on p2 is diffed normally
        let intents = engine.observe_batch(
            &[info("p2", 999.0, 0.0, 1)],
            &all_important(&["p2"]),
        );
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].severity, Severity::Warning);
    }

    #[test]
    fn identical_poll_is_silent() {
        let mut engine = PriceSyncEngine::new();
        let batch = [info("p1", 100.0, 10.0, 8)];
        let important = all_important(&["p1"]);
        engine.observe_batch(&batch, &important);
        assert!(engine.observe_batch(&batch, &important).is_empty());
    }

    #[test]
    fn price_drop_with_new_discount_emits_both_dimensions() {
        // Cart scenario: 100/0%/10 -> 80/20%/10
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &important);
        let intents = engine.observe_batch(&[info("p1", 80.0, 20.0, 10)], &important);

        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0].severity, Severity::Price);
        assert!(intents[0].message.contains("Now ₹80"));
        assert!(intents[0].message.contains("decreased"));
        assert_eq!(intents[1].severity, Severity::Success);
        assert!(intents[1].message.contains("20% off"));
    }

    #[test]
    fn price_increase_is_price_severity() {
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &important);
        let intents = engine.observe_batch(&[info("p1", 120.0, 0.0, 10)], &important);
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].severity, Severity::Price);
        assert!(intents[0].message.contains("increased"));
        assert!(intents[0].message.contains("₹120"));
    }

    #[test]
    fn discount_dropping_to_zero_warns() {
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 30.0, 10)], &important);
        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &important);
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].severity, Severity::Warning);
        assert!(intents[0].message.contains("discount ended"));
    }

    #[test]
    fn unimportant_ids_update_baseline_but_never_notify() {
        let mut engine = PriceSyncEngine::new();
        let important = HashSet::new();
        engine.observe_batch(&[info("p1", 100.0, 0.0, 10)], &important);
        assert!(engine
            .observe_batch(&[info("p1", 50.0, 40.0, 0)], &important)
            .is_empty());
        // baseline moved: promoting the id now diffs against 50/40/0
        let intents = engine.observe_batch(&[info("p1", 50.0, 40.0, 0)], &all_important(&["p1"]));
        assert!(intents.is_empty());
    }

    #[test]
    fn back_in_stock_fires_alone() {
        // 0 -> 7 crosses the low-stock threshold too; only the highest
        // priority stock notification may fire
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 0.0, 0)], &important);
        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 7)], &important);
        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("back in stock"));
        assert_eq!(intents[0].severity, Severity::Success);

        // 0 -> 3 satisfies the low-stock condition too, but only the
        // first matching check may fire
        let mut engine = PriceSyncEngine::new();
        engine.observe_batch(&[info("p1", 100.0, 0.0, 0)], &important);
        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 3)], &important);
        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("back in stock"));
    }

    #[test]
    fn out_of_stock_warns() {
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 0.0, 3)], &important);
        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 0)], &important);
        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("out of stock"));
    }

    #[test]
    fn low_stock_only_on_crossing_the_threshold() {
        let mut engine = PriceSyncEngine::new();
        let important = all_important(&["p1"]);
        engine.observe_batch(&[info("p1", 100.0, 0.0, 7)], &important);

        let intents = engine.observe_batch(&[info("p1", 100.0, 0.0, 3)], &important);
        assert_eq!(intents.len(), 1);
        assert!(intents[0].message.contains("only 3 left"));

        // already below the threshold: 3 -> 2 stays quiet
        assert!(engine
            .observe_batch(&[info("p1", 100.0, 0.0, 2)], &important)
            .is_empty());
    }

    #[test]
    fn merge_cart_clamps_quantity_to_stock() {
        let items = [cart_item("p1", 100.0, 0.0, 10, 5)];
        let fetched = by_id(vec![info("p1", 100.0, 0.0, 3)]);
        let merged = merge_cart(&items, &fetched).expect("stock change must merge");
        assert_eq!(merged[0].quantity, 3);
        assert_eq!(merged[0].in_stock, 3);
    }

    #[test]
    fn merge_cart_never_raises_quantity() {
        let items = [cart_item("p1", 100.0, 0.0, 3, 2)];
        let fetched = by_id(vec![info("p1", 100.0, 0.0, 10)]);
        let merged = merge_cart(&items, &fetched).expect("stock change must merge");
        assert_eq!(merged[0].quantity, 2);
    }

    #[test]
    fn merge_cart_is_none_when_nothing_differs() {
        let items = [cart_item("p1", 100.0, 0.0, 10, 2)];
        let fetched = by_id(vec![info("p1", 100.0, 0.0, 10)]);
        assert!(merge_cart(&items, &fetched).is_none());
    }

    #[test]
    fn merge_cart_applies_price_and_discount() {
        let items = [cart_item("p1", 100.0, 0.0, 10, 2)];
        let fetched = by_id(vec![info("p1", 80.0, 20.0, 10)]);
        let merged = merge_cart(&items, &fetched).unwrap();
        assert_eq!(merged[0].price, 80.0);
        assert_eq!(merged[0].discount, 20.0);
        assert_eq!(merged[0].quantity, 2);
    }

    #[test]
    fn merge_wishlist_preserves_wire_shape() {
        let entries = [
            WishlistEntry::Wrapped { product: product("p1", 100.0, 0.0, 5) },
            WishlistEntry::Bare(product("p2", 40.0, 0.0, 1)),
        ];
        let fetched = by_id(vec![info("p1", 90.0, 0.0, 5), info("p2", 40.0, 0.0, 1)]);
        let merged = merge_wishlist(&entries, &fetched).unwrap();
        assert!(matches!(merged[0], WishlistEntry::Wrapped { .. }));
        assert_eq!(merged[0].product().price, 90.0);
        assert!(matches!(merged[1], WishlistEntry::Bare(_)));
        assert_eq!(merged[1].product().price, 40.0);
    }

    #[test]
    fn merge_wishlist_is_none_when_identical() {
        let entries = [WishlistEntry::Bare(product("p1", 100.0, 0.0, 5))];
        let fetched = by_id(vec![info("p1", 100.0, 0.0, 5)]);
        assert!(merge_wishlist(&entries, &fetched).is_none());
    }

    #[test]
    fn merge_current_product_only_when_covered_and_different() {
        let current = product("p1", 100.0, 0.0, 5);
        assert!(merge_current_product(&current, &by_id(vec![info("p2", 1.0, 0.0, 1)])).is_none());
        assert!(merge_current_product(&current, &by_id(vec![info("p1", 100.0, 0.0, 5)])).is_none());
        let merged =
            merge_current_product(&current, &by_id(vec![info("p1", 100.0, 0.0, 2)])).unwrap();
        assert_eq!(merged.in_stock, 2);
    }

    #[test]
    fn list_guard_ignores_order_but_not_membership() {
        let current = [product("a", 1.0, 0.0, 1), product("b", 2.0, 0.0, 1)];
        let reordered = [product("b", 2.0, 0.0, 1), product("a", 1.0, 0.0, 1)];
        let swapped = [product("a", 1.0, 0.0, 1), product("c", 3.0, 0.0, 1)];
        assert!(!list_ids_changed(&current, &reordered));
        assert!(list_ids_changed(&current, &swapped));
    }

    #[test]
    fn target_ids_dedups_across_sources() {
        let cart = [cart_item("p1", 100.0, 0.0, 10, 1)];
        let wishlist = [WishlistEntry::Bare(product("p2", 1.0, 0.0, 1))];
        let current = product("p1", 100.0, 0.0, 10);
        let products = [product("p3", 1.0, 0.0, 1), product("p2", 1.0, 0.0, 1)];
        let featured = [product("p4", 1.0, 0.0, 1)];
        let discounted = [product("p4", 1.0, 0.0, 1), product("p5", 1.0, 0.0, 1)];

        let ids = target_ids(
            &cart,
            &wishlist,
            Some(&current),
            &products,
            &featured,
            &discounted,
            20,
        );
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn target_ids_caps_the_general_list() {
        let products: Vec<Product> = (0..30)
            .map(|i| product(&format!("g{}", i), 1.0, 0.0, 1))
            .collect();
        let ids = target_ids(&[], &[], None, &products, &[], &[], 20);
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn important_ids_is_cart_union_wishlist() {
        let cart = [cart_item("p1", 1.0, 0.0, 1, 1)];
        let wishlist = [
            WishlistEntry::Bare(product("p2", 1.0, 0.0, 1)),
            WishlistEntry::Wrapped { product: product("p1", 1.0, 0.0, 1) },
        ];
        let ids = important_ids(&cart, &wishlist);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("p1") && ids.contains("p2"));
    }
}
