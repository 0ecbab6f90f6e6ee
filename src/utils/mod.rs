pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::{format_delivery_date, format_discount, format_price, short_order_id};
pub use storage::{get_local_storage, load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage};
