pub mod cart;
pub mod notification;
pub mod order;
pub mod product;

pub use cart::CartItem;
pub use notification::{Notification, Severity};
pub use order::{Order, OrderItem, Pagination};
pub use product::{Product, ProductInfo, WishlistEntry};
