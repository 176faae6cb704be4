//! Sync Error Taxonomy
//!
//! Every failure from the identity provider or the document store is mapped
//! to one of these at the bridge seam, displayed, and never propagated
//! further up.

use crate::models::Lang;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Anonymous sign-in failed; persistent until the app is re-entered.
    Auth,
    /// Store rules rejected read access to the joined list.
    AccessDenied,
    /// Transient subscription failure; clears on the next applied snapshot.
    SyncPaused,
    /// An add/update/delete was rejected; transient, not retried.
    Write,
}

impl SyncError {
    pub fn message(&self, lang: Lang) -> &'static str {
        let t = lang.strings();
        match self {
            SyncError::Auth => t.error_auth,
            SyncError::AccessDenied => t.error_access_denied,
            SyncError::SyncPaused => t.error_sync_paused,
            SyncError::Write => t.error_add,
        }
    }

    /// Subscription errors carry a code string from the store; only
    /// permission denial gets the more specific surface.
    pub fn from_subscription_code(code: &str) -> SyncError {
        if code == "permission-denied" {
            SyncError::AccessDenied
        } else {
            SyncError::SyncPaused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_is_distinct_from_transient() {
        assert_eq!(
            SyncError::from_subscription_code("permission-denied"),
            SyncError::AccessDenied
        );
        assert_eq!(
            SyncError::from_subscription_code("unavailable"),
            SyncError::SyncPaused
        );
        assert_eq!(SyncError::from_subscription_code(""), SyncError::SyncPaused);
    }
}
