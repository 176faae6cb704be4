//! Error Banner Component
//!
//! Shows the current sync error, already localized. Clearing is owned by
//! the coordinator (next snapshot) or the write-error timer.

use leptos::prelude::*;

use crate::context::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    view! {
        {move || {
            store.error().get().map(|error| {
                let message = error.message(session.lang.get());
                view! {
                    <div class="error-banner">
                        <span class="error-icon">"⚠"</span>
                        {message}
                    </div>
                }
            })
        }}
    }
}
