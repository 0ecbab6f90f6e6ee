// ============================================================================
// ADMIN ORDERS STORE - Back-office order list + new-order counter
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Order, Pagination};

#[derive(Clone)]
pub struct AdminOrdersStore {
    orders: Rc<RefCell<Vec<Order>>>,
    pagination: Rc<RefCell<Pagination>>,
    status_filter: Rc<RefCell<Option<String>>>,
    /// Running "N new since you opened this screen" display counter
    new_orders: Rc<RefCell<u64>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AdminOrdersStore {
    pub fn new() -> Self {
        Self {
            orders: Rc::new(RefCell::new(Vec::new())),
            pagination: Rc::new(RefCell::new(Pagination::default())),
            status_filter: Rc::new(RefCell::new(None)),
            new_orders: Rc::new(RefCell::new(0)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    pub fn pagination(&self) -> Pagination {
        *self.pagination.borrow()
    }

    pub fn status_filter(&self) -> Option<String> {
        self.status_filter.borrow().clone()
    }

    pub fn new_orders(&self) -> u64 {
        *self.new_orders.borrow()
    }

    pub fn set_status_filter(&self, status: Option<String>) {
        *self.status_filter.borrow_mut() = status;
        self.notify_subscribers();
    }

    pub fn set_page(&self, page: u32) {
        self.pagination.borrow_mut().page = page;
        self.notify_subscribers();
    }

    /// Unconditional push from the admin sync engine, every successful
    /// cycle. The admin list changes too often for per-field guards to be
    /// worth anything.
    pub fn replace_orders(&self, orders: Vec<Order>, pagination: Pagination) {
        *self.orders.borrow_mut() = orders;
        *self.pagination.borrow_mut() = pagination;
        self.notify_subscribers();
    }

    pub fn add_new_orders(&self, delta: u64) {
        *self.new_orders.borrow_mut() += delta;
        self.notify_subscribers();
    }

    pub fn reset_new_orders(&self) {
        *self.new_orders.borrow_mut() = 0;
        self.notify_subscribers();
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_subscribers(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AdminOrdersStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_counter_accumulates_until_reset() {
        let store = AdminOrdersStore::new();
        store.add_new_orders(3);
        store.add_new_orders(2);
        assert_eq!(store.new_orders(), 5);
        store.reset_new_orders();
        assert_eq!(store.new_orders(), 0);
    }
}
