// ============================================================================
// STOREFRONT PWA - Client-side state, services and background sync
// ============================================================================
// - Models: structures shared with the REST backend
// - Services: ONLY HTTP communication (stateless)
// - Stores: shared client state with Rc<RefCell> + subscribers
// - Sync: polling engines reconciling server state into the stores
// - Hooks: Yew wrappers owning timers and async glue
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod sync;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Panic hook first, for readable stack traces while debugging
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛍️ Storefront PWA client initialized");
    Ok(())
}
