//! Durable username mirror in browser `localStorage`.
//!
//! The mirror gives the header a name to show across full page reloads
//! while the session check is still in flight. It is never proof of
//! authentication: the verify endpoint is the only source of truth, and a
//! mirror that outlives its cookie session just means a stale name shows
//! briefly before verification resolves signed-out.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native paths no-op so
//! unit tests stay deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "brandforge_username";

/// Read the mirrored username, if one was stored.
pub fn load_username() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the mirror after an accepted sign-in or sign-up.
pub fn save_username(name: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, name);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
    }
}

/// Drop the mirror on logout.
pub fn clear_username() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
