// ============================================================================
// SHOP STORE - Cart, wishlist and product lists shared across the app
// ============================================================================
// Single owner of the primary client state. Sync engines never reach into
// the RefCells; they hand merged slices to the apply_* methods and the
// store decides nothing further (the merge already carries the
// did-anything-change decision).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CartItem, Product, WishlistEntry};
use crate::utils::constants::STORAGE_KEY_CART;

#[derive(Clone)]
pub struct ShopStore {
    cart: Rc<RefCell<Vec<CartItem>>>,
    wishlist: Rc<RefCell<Vec<WishlistEntry>>>,
    current_product: Rc<RefCell<Option<Product>>>,
    products: Rc<RefCell<Vec<Product>>>,
    featured: Rc<RefCell<Vec<Product>>>,
    discounted: Rc<RefCell<Vec<Product>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ShopStore {
    pub fn new() -> Self {
        Self {
            cart: Rc::new(RefCell::new(Vec::new())),
            wishlist: Rc::new(RefCell::new(Vec::new())),
            current_product: Rc::new(RefCell::new(None)),
            products: Rc::new(RefCell::new(Vec::new())),
            featured: Rc::new(RefCell::new(Vec::new())),
            discounted: Rc::new(RefCell::new(Vec::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Store wired for the browser: restores the cart snapshot saved by a
    /// previous visit.
    pub fn bootstrap() -> Self {
        let store = Self::new();
        if let Some(cart) = crate::utils::storage::load_from_storage::<Vec<CartItem>>(STORAGE_KEY_CART) {
            log::info!("🛒 Cart snapshot restored: {} items", cart.len());
            *store.cart.borrow_mut() = cart;
        }
        store
    }

    // ------------------------------------------------------------------
    // Reads (cloned out, so callers never hold a borrow across awaits)
    // ------------------------------------------------------------------

    pub fn cart(&self) -> Vec<CartItem> {
        self.cart.borrow().clone()
    }

    pub fn wishlist(&self) -> Vec<WishlistEntry> {
        self.wishlist.borrow().clone()
    }

    pub fn current_product(&self) -> Option<Product> {
        self.current_product.borrow().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn featured(&self) -> Vec<Product> {
        self.featured.borrow().clone()
    }

    pub fn discounted(&self) -> Vec<Product> {
        self.discounted.borrow().clone()
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        {
            let mut cart = self.cart.borrow_mut();
            match cart.iter_mut().find(|item| item.id == product.id) {
                Some(item) => {
                    item.quantity = (item.quantity + quantity).min(product.in_stock);
                }
                None => cart.push(CartItem::from_product(product, quantity)),
            }
        }
        self.persist_cart();
        self.notify_subscribers();
    }

    /// Set a line quantity, clamped to known stock. Zero removes the line.
    pub fn set_quantity(&self, product_id: &str, quantity: u32) {
        {
            let mut cart = self.cart.borrow_mut();
            if quantity == 0 {
                cart.retain(|item| item.id != product_id);
            } else if let Some(item) = cart.iter_mut().find(|item| item.id == product_id) {
                item.quantity = quantity.min(item.in_stock);
            }
        }
        self.persist_cart();
        self.notify_subscribers();
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        self.cart.borrow_mut().retain(|item| item.id != product_id);
        self.persist_cart();
        self.notify_subscribers();
    }

    /// Add the product to the wishlist, or remove it if already there.
    pub fn toggle_wishlist(&self, product: &Product) {
        {
            let mut wishlist = self.wishlist.borrow_mut();
            let before = wishlist.len();
            wishlist.retain(|entry| entry.id() != product.id);
            if wishlist.len() == before {
                wishlist.push(WishlistEntry::Wrapped {
                    product: product.clone(),
                });
            }
        }
        self.notify_subscribers();
    }

    pub fn set_wishlist(&self, entries: Vec<WishlistEntry>) {
        *self.wishlist.borrow_mut() = entries;
        self.notify_subscribers();
    }

    pub fn set_current_product(&self, product: Option<Product>) {
        *self.current_product.borrow_mut() = product;
        self.notify_subscribers();
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
        self.notify_subscribers();
    }

    // ------------------------------------------------------------------
    // Merge appliers (price sync engine)
    // ------------------------------------------------------------------

    pub fn apply_cart_merge(&self, items: Vec<CartItem>) {
        *self.cart.borrow_mut() = items;
        self.persist_cart();
        self.notify_subscribers();
    }

    pub fn apply_wishlist_merge(&self, entries: Vec<WishlistEntry>) {
        *self.wishlist.borrow_mut() = entries;
        self.notify_subscribers();
    }

    pub fn apply_current_product_merge(&self, product: Product) {
        *self.current_product.borrow_mut() = Some(product);
        self.notify_subscribers();
    }

    pub fn apply_products_merge(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
        self.notify_subscribers();
    }

    pub fn apply_featured_merge(&self, products: Vec<Product>) {
        *self.featured.borrow_mut() = products;
        self.notify_subscribers();
    }

    pub fn apply_discounted_merge(&self, products: Vec<Product>) {
        *self.discounted.borrow_mut() = products;
        self.notify_subscribers();
    }

    /// Whole-list replacement used when the featured id set changed.
    pub fn replace_featured(&self, products: Vec<Product>) {
        *self.featured.borrow_mut() = products;
        self.notify_subscribers();
    }

    /// Whole-list replacement used when the discounted id set changed.
    pub fn replace_discounted(&self, products: Vec<Product>) {
        *self.discounted.borrow_mut() = products;
        self.notify_subscribers();
    }

    // ------------------------------------------------------------------
    // Reactivity
    // ------------------------------------------------------------------

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_subscribers(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }

    fn persist_cart(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) =
                crate::utils::storage::save_to_storage(STORAGE_KEY_CART, &*self.cart.borrow())
            {
                log::error!("❌ Error saving cart snapshot: {}", e);
            }
        }
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, in_stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: 100.0,
            discount: 0.0,
            in_stock,
            image: None,
            category: None,
            description: None,
        }
    }

    #[test]
    fn add_to_cart_merges_lines_and_clamps_to_stock() {
        let store = ShopStore::new();
        let p = product("p1", 3);
        store.add_to_cart(&p, 2);
        store.add_to_cart(&p, 2);

        let cart = store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 3);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let store = ShopStore::new();
        store.add_to_cart(&product("p1", 10), 2);
        store.set_quantity("p1", 0);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn toggle_wishlist_round_trips() {
        let store = ShopStore::new();
        let p = product("p1", 10);
        store.toggle_wishlist(&p);
        assert_eq!(store.wishlist().len(), 1);
        store.toggle_wishlist(&p);
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn subscribers_hear_about_merges() {
        let store = ShopStore::new();
        let calls = Rc::new(RefCell::new(0));
        {
            let calls = calls.clone();
            store.subscribe(move || *calls.borrow_mut() += 1);
        }
        store.apply_products_merge(vec![product("p1", 1)]);
        store.replace_featured(vec![product("p2", 1)]);
        assert_eq!(*calls.borrow(), 2);
    }
}
