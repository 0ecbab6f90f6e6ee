// ============================================================================
// AUTH TOKEN ACCESS - Reads the bearer token the login flow stored
// ============================================================================
// Session issuance itself lives behind the REST API; this module only
// owns the localStorage slot.

use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;
use crate::utils::storage::{load_raw, remove_from_storage, save_raw};

/// Bearer token for authenticated endpoints. None means "not logged in",
/// which background sync treats as "skip silently", not as an error.
pub fn load_auth_token() -> Option<String> {
    load_raw(STORAGE_KEY_AUTH_TOKEN).filter(|t| !t.is_empty())
}

pub fn save_auth_token(token: &str) -> Result<(), String> {
    save_raw(STORAGE_KEY_AUTH_TOKEN, token)
}

pub fn clear_auth_token() {
    if let Err(e) = remove_from_storage(STORAGE_KEY_AUTH_TOKEN) {
        log::error!("❌ Error clearing auth token: {}", e);
    }
}
