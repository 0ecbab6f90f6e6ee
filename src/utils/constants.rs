/// Base URL of the storefront REST API
/// Configured at compile time:
/// - Development: http://localhost:5000 (default)
/// - Production: via BACKEND_URL env var (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// localStorage key holding the bearer token issued at login
pub const STORAGE_KEY_AUTH_TOKEN: &str = "token";

/// localStorage key holding the JSON-serialized cart snapshot
pub const STORAGE_KEY_CART: &str = "cartItems";

/// Stock level at or below which the "only N left" warning fires
pub const LOW_STOCK_THRESHOLD: u32 = 5;
