//! Screen Wake Lock
//!
//! Scoped acquisition of the screen wake lock while shopping mode is active.
//! Unsupported browsers and rejected requests degrade silently; the lock is
//! purely an affordance.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{WakeLockSentinel, WakeLockType};

/// Holds the sentinel; releasing the guard releases the lock. The browser
/// also drops the lock itself on tab visibility changes, which is fine.
pub struct WakeLockGuard {
    sentinel: WakeLockSentinel,
}

impl WakeLockGuard {
    pub async fn acquire() -> Option<WakeLockGuard> {
        let navigator = web_sys::window()?.navigator();
        let wake_lock = navigator.wake_lock();
        let promise = wake_lock.request(WakeLockType::Screen);
        match JsFuture::from(promise).await {
            Ok(value) => {
                let sentinel: WakeLockSentinel = value.unchecked_into();
                Some(WakeLockGuard { sentinel })
            }
            Err(err) => {
                web_sys::console::warn_1(&err);
                None
            }
        }
    }
}

impl Drop for WakeLockGuard {
    fn drop(&mut self) {
        // release() returns a promise; nothing to await on teardown.
        let _ = self.sentinel.release();
    }
}
