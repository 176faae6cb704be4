//! Subscription Coordinator
//!
//! Owns the single active subscription to the joined list. Snapshots arrive
//! on a channel drained by one coordinator task per join; a generation
//! counter guarantees that no event from a previous list is applied after a
//! leave or re-join.

use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::SyncError;
use crate::firebase::{self, Subscription, SyncEvent};
use crate::models::{is_joinable_name, normalize_list_id};
use crate::prefs;
use crate::store::{
    store_apply_snapshot, store_clear_error_if, store_reset_session, store_set_error, AppStore,
    AppStateStoreFields,
};

/// How long a rejected write keeps its banner up
const WRITE_ERROR_MS: u32 = 4_000;

/// Join/leave and subscription lifecycle, provided via context.
#[derive(Clone, Copy)]
pub struct SyncController {
    store: AppStore,
    active: StoredValue<Option<Subscription>, LocalStorage>,
}

impl SyncController {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            active: StoredValue::new_local(None),
        }
    }

    /// Validate and join a list. The subscription itself is started by the
    /// root effect once both auth and joined-state hold.
    pub fn join(&self, raw: &str) {
        let name = raw.trim().to_string();
        if !is_joinable_name(&name) {
            return;
        }
        prefs::save_list_id(&name);
        let recent = prefs::push_recent(&self.store.recent_lists().get_untracked(), &name);
        prefs::save_history(&recent);
        self.store.recent_lists().set(recent);
        self.store.list_id().set(name);
        self.store.joined().set(true);
    }

    /// Tear down the old subscription (if any) and stand up a fresh one for
    /// the currently joined list. Teardown, generation bump, and the new
    /// subscribe happen in one synchronous block, so there is no window
    /// where two subscriptions are live or a stale snapshot can land.
    pub fn resubscribe(&self) {
        self.teardown();
        let generation = self.store.sync_generation().get_untracked() + 1;
        self.store.sync_generation().set(generation);

        let list_key = normalize_list_id(&self.store.list_id().get_untracked());
        web_sys::console::log_1(&format!("[sync] subscribing to '{list_key}' (gen {generation})").into());
        self.store.loading().set(true);

        let (subscription, events) = firebase::subscribe_items(&list_key);
        self.active.set_value(Some(subscription));

        spawn_local(drain_events(self.store, generation, events));
    }

    /// Leave the joined list: unsubscribe first, then clear local state.
    /// Returns the session to Unjoined regardless of prior error state.
    pub fn leave(&self) {
        self.teardown();
        prefs::clear_list_id();
        store_reset_session(&self.store);
    }

    fn teardown(&self) {
        let mut taken = None;
        self.active.update_value(|slot| taken = slot.take());
        if let Some(subscription) = taken {
            subscription.unsubscribe();
        }
    }
}

/// Coordinator loop: apply every event from the channel, unless the store
/// has moved past this task's generation, in which case apply nothing and
/// exit.
async fn drain_events(store: AppStore, generation: u32, mut events: UnboundedReceiver<SyncEvent>) {
    while let Some(event) = events.next().await {
        if store.sync_generation().get_untracked() != generation {
            break;
        }
        match event {
            SyncEvent::Snapshot(items) => store_apply_snapshot(&store, items),
            SyncEvent::Error(error) => store_set_error(&store, error),
        }
    }
}

/// Get the sync controller from context
pub fn use_sync() -> SyncController {
    expect_context::<SyncController>()
}

/// Surface a rejected write, then clear it after a few seconds unless a
/// newer error replaced it. The operation is not retried.
pub fn flash_write_error(store: AppStore) {
    let seq = begin_write_flash(&store);
    spawn_local(async move {
        TimeoutFuture::new(WRITE_ERROR_MS).await;
        end_write_flash(&store, seq);
    });
}

fn begin_write_flash(store: &AppStore) -> u32 {
    store.submitting().set(false);
    let seq = store.error_flash_seq().get_untracked().wrapping_add(1);
    store.error_flash_seq().set(seq);
    store_set_error(store, SyncError::Write);
    seq
}

/// Timer expiry: only the flash that started this timer may clear the
/// banner, so a second failure inside the window keeps its full duration.
fn end_write_flash(store: &AppStore, seq: u32) {
    if store.error_flash_seq().get_untracked() == seq {
        store_clear_error_if(store, &SyncError::Write);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Item};
    use crate::store::AppState;
    use futures::channel::mpsc::unbounded;
    use futures::executor::block_on;
    use reactive_stores::Store;

    fn make_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            text: format!("Item {}", id),
            quantity: 1,
            category: Category::Dairy,
            completed: false,
            created_at: None,
            author: None,
        }
    }

    fn make_store() -> AppStore {
        Store::new(AppState::default())
    }

    #[test]
    fn test_current_generation_applies_snapshot() {
        let store = make_store();
        store.sync_generation().set(3);
        store.loading().set(true);
        store.error().set(Some(SyncError::SyncPaused));

        let (tx, rx) = unbounded();
        tx.unbounded_send(SyncEvent::Snapshot(vec![make_item("a")])).unwrap();
        drop(tx);
        block_on(drain_events(store, 3, rx));

        assert_eq!(store.items().get_untracked().len(), 1);
        assert!(!store.loading().get_untracked());
        // A delivered snapshot clears the transient sync error.
        assert!(store.error().get_untracked().is_none());
    }

    #[test]
    fn test_current_generation_surfaces_subscription_error() {
        let store = make_store();
        store.sync_generation().set(1);

        let (tx, rx) = unbounded();
        tx.unbounded_send(SyncEvent::Error(SyncError::AccessDenied)).unwrap();
        drop(tx);
        block_on(drain_events(store, 1, rx));

        assert_eq!(store.error().get_untracked(), Some(SyncError::AccessDenied));
    }

    #[test]
    fn test_stale_generation_applies_nothing() {
        // Events still queued from list A must not land after switching to
        // list B bumped the generation.
        let store = make_store();
        store.sync_generation().set(4);

        let (tx, rx) = unbounded();
        tx.unbounded_send(SyncEvent::Snapshot(vec![make_item("stale")])).unwrap();
        tx.unbounded_send(SyncEvent::Error(SyncError::SyncPaused)).unwrap();
        drop(tx);
        block_on(drain_events(store, 3, rx));

        assert!(store.items().get_untracked().is_empty());
        assert!(store.error().get_untracked().is_none());
    }

    #[test]
    fn test_session_reset_clears_joined_state_despite_errors() {
        let store = make_store();
        store.joined().set(true);
        store.list_id().set("home".to_string());
        store.items().set(vec![make_item("a"), make_item("b")]);
        store.error().set(Some(SyncError::SyncPaused));
        store.editing().set(Some(("a".to_string(), "draft".to_string())));
        store.pending_delete().set(Some("b".to_string()));
        let generation = store.sync_generation().get_untracked();

        store_reset_session(&store);

        assert!(!store.joined().get_untracked());
        assert!(store.items().get_untracked().is_empty());
        assert_eq!(store.list_id().get_untracked(), "");
        assert!(store.error().get_untracked().is_none());
        assert!(store.editing().get_untracked().is_none());
        assert!(store.pending_delete().get_untracked().is_none());
        assert!(store.sync_generation().get_untracked() > generation);
    }

    #[test]
    fn test_second_write_flash_survives_first_timer() {
        let store = make_store();
        let first = begin_write_flash(&store);
        let second = begin_write_flash(&store);

        // First failure's timer fires while the second banner is still up.
        end_write_flash(&store, first);
        assert_eq!(store.error().get_untracked(), Some(SyncError::Write));

        end_write_flash(&store, second);
        assert!(store.error().get_untracked().is_none());
    }

    #[test]
    fn test_flash_timer_does_not_clear_newer_error() {
        let store = make_store();
        let seq = begin_write_flash(&store);
        store_set_error(&store, SyncError::AccessDenied);
        end_write_flash(&store, seq);
        assert_eq!(store.error().get_untracked(), Some(SyncError::AccessDenied));
    }
}
