//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::SyncError;
use crate::models::Item;

/// Session state owned by this client; no server counterpart.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items of the joined list, replaced wholesale by each snapshot
    pub items: Vec<Item>,
    /// Raw (pre-normalized) list name as the user typed it
    pub list_id: String,
    pub joined: bool,
    /// Waiting for the first snapshot after a join
    pub loading: bool,
    /// An add is in flight; gates the form
    pub submitting: bool,
    pub error: Option<SyncError>,
    /// Anonymous session uid, once the identity provider reports one
    pub user: Option<String>,
    /// Item currently being edited inline, with its draft text
    pub editing: Option<(String, String)>,
    /// Item awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Bumped on every join/leave; stale coordinator tasks check it before
    /// applying anything
    pub sync_generation: u32,
    /// Bumped on every write-failure banner; a timer only clears the banner
    /// it started
    pub error_flash_seq: u32,
    /// Up to 5 most-recently joined list names, most-recent-first
    pub recent_lists: Vec<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a snapshot: full replacement of the item set; a delivered snapshot
/// also clears loading and any subscription error.
pub fn store_apply_snapshot(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
    store.loading().set(false);
    store.error().set(None);
}

pub fn store_set_error(store: &AppStore, error: SyncError) {
    store.loading().set(false);
    store.error().set(Some(error));
}

/// Clear the error banner only if it still shows the given error; a newer
/// error keeps the banner.
pub fn store_clear_error_if(store: &AppStore, error: &SyncError) {
    if store.error().read_untracked().as_ref() == Some(error) {
        store.error().set(None);
    }
}

/// Return the session to Unjoined: empty the item set and drop every piece
/// of joined-list state, regardless of what error or in-flight edit was
/// pending. Bumps the generation so a stale snapshot can never land after
/// the reset.
pub fn store_reset_session(store: &AppStore) {
    store.sync_generation().update(|g| *g += 1);
    store.joined().set(false);
    store.items().set(Vec::new());
    store.list_id().set(String::new());
    store.loading().set(false);
    store.submitting().set(false);
    store.error().set(None);
    store.editing().set(None);
    store.pending_delete().set(None);
}

/// True once the identity provider has reported a session. Memoized so that
/// repeated uid writes with an unchanged signed-in state do not ripple into
/// the subscription effect.
pub fn auth_ready(store: AppStore) -> Memo<bool> {
    Memo::new(move |_| store.user().with(|u| u.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_ready_is_stable_across_session_refreshes() {
        let store: AppStore = Store::new(AppState::default());
        let ready = auth_ready(store);
        assert!(!ready.get_untracked());
        store.user().set(Some("uid-a".to_string()));
        assert!(ready.get_untracked());
        // Re-sign-in with a fresh uid is not an auth transition.
        store.user().set(Some("uid-b".to_string()));
        assert!(ready.get_untracked());
        store.user().set(None);
        assert!(!ready.get_untracked());
    }
}
