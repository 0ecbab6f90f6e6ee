// ============================================================================
// ORDERS STORE - The user's orders (current order + my-orders page)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Order, Pagination};

#[derive(Clone)]
pub struct OrdersStore {
    orders: Rc<RefCell<Vec<Order>>>,
    pagination: Rc<RefCell<Pagination>>,
    current_order: Rc<RefCell<Option<Order>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl OrdersStore {
    pub fn new() -> Self {
        Self {
            orders: Rc::new(RefCell::new(Vec::new())),
            pagination: Rc::new(RefCell::new(Pagination::default())),
            current_order: Rc::new(RefCell::new(None)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    pub fn pagination(&self) -> Pagination {
        *self.pagination.borrow()
    }

    pub fn current_order(&self) -> Option<Order> {
        self.current_order.borrow().clone()
    }

    /// The order screen owns this slot; the single-order sync engine only
    /// proposes, the screen decides.
    pub fn set_current_order(&self, order: Option<Order>) {
        *self.current_order.borrow_mut() = order;
        self.notify_subscribers();
    }

    /// Applied by the orders-list sync only when its positional heuristic
    /// saw an actual change.
    pub fn replace_orders(&self, orders: Vec<Order>, pagination: Pagination) {
        *self.orders.borrow_mut() = orders;
        *self.pagination.borrow_mut() = pagination;
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

impl Default for OrdersStore {
    fn default() -> Self {
        Self::new()
    }
}
