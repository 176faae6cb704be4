//! Grocery Sync App
//!
//! Root component: provides the session context, the app store, and the
//! sync controller; wires auth, the subscription effect, dark mode, and the
//! shopping-mode wake lock.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AddItemForm, DeleteModal, ErrorBanner, Header, ItemList, JoinScreen, ListBar};
use crate::context::SessionContext;
use crate::error::SyncError;
use crate::firebase;
use crate::prefs;
use crate::store::{
    auth_ready, store_clear_error_if, store_set_error, AppState, AppStateStoreFields, AppStore,
};
use crate::sync::SyncController;
use crate::wake_lock::WakeLockGuard;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::load();
    provide_context(session);

    // A saved list id means the last session left while joined; rejoin it.
    let saved_list = prefs::load_list_id();
    let store: AppStore = Store::new(AppState {
        joined: saved_list.is_some(),
        list_id: saved_list.unwrap_or_default(),
        recent_lists: prefs::load_history(),
        ..Default::default()
    });
    provide_context(store);

    let sync = SyncController::new(store);
    provide_context(sync);

    // Identity: observe session changes, then kick off anonymous sign-in.
    // Auth failure stays on the banner until the app is re-entered; there is
    // no internal retry loop.
    firebase::on_auth_state_changed(move |uid| {
        let signed_in = uid.is_some();
        store.user().set(uid);
        if signed_in {
            store_clear_error_if(&store, &SyncError::Auth);
        }
    });
    spawn_local(async move {
        if firebase::sign_in_anonymously().await.is_err() {
            store_set_error(&store, SyncError::Auth);
        }
    });

    // (Re)subscribe whenever auth and joined-state both hold. Leave clears
    // joined, so this effect never races a stale list name. Auth is tracked
    // through the memoized signed-in flag: uid refreshes with an unchanged
    // signed-in state must not tear down a live subscription.
    let authed = auth_ready(store);
    Effect::new(move |_| {
        let ready = authed.get();
        let joined = store.joined().get();
        if ready && joined {
            sync.resubscribe();
        }
    });

    // Dark mode lives as a class on <html> so styles apply outside the mount.
    Effect::new(move |_| {
        let dark = session.dark_mode.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = if dark {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
        }
    });

    // Scoped wake lock while shopping mode is on; released on mode exit or
    // teardown, whichever comes first.
    let wake_lock: StoredValue<Option<WakeLockGuard>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        if session.shopping_mode.get() {
            spawn_local(async move {
                let guard = WakeLockGuard::acquire().await;
                // Mode may have flipped back while the request was pending.
                if session.shopping_mode.get_untracked() {
                    wake_lock.set_value(guard);
                } else {
                    drop(guard);
                }
            });
        } else {
            wake_lock.set_value(None);
        }
    });
    on_cleanup(move || wake_lock.set_value(None));

    // Splash until the first auth state resolves, unless sign-in failed.
    let ready = move || store.user().with(|u| u.is_some()) || store.error().with(|e| e.is_some());

    view! {
        <div
            class="app-shell"
            dir=move || if session.lang.get().is_rtl() { "rtl" } else { "ltr" }
        >
            <Show
                when=ready
                fallback=move || {
                    view! {
                        <div class="connecting-screen">
                            <div class="spinner"></div>
                            <p>{move || session.lang.get().strings().connecting}</p>
                        </div>
                    }
                }
            >
                <Header />
                <main class="app-main">
                    <ErrorBanner />
                    <Show
                        when=move || store.joined().get()
                        fallback=|| view! { <JoinScreen /> }
                    >
                        <Show when=move || !session.shopping_mode.get()>
                            <ListBar />
                            <AddItemForm />
                        </Show>
                        <ItemList />
                    </Show>
                </main>
                <DeleteModal />
            </Show>
        </div>
    }
}
