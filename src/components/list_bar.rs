//! List Bar Component
//!
//! Joined-list chrome: the list name chip, view-mode toggle, and leave
//! button. Hidden entirely in shopping mode.

use leptos::prelude::*;

use crate::context::use_session;
use crate::models::ViewMode;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::use_sync;

#[component]
pub fn ListBar() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let sync = use_sync();

    view! {
        <div class="list-bar">
            <span class="list-name-chip">{move || store.list_id().get()}</span>

            <div class="list-bar-actions">
                <button
                    class="view-toggle-btn"
                    title=move || {
                        let t = session.lang.get().strings();
                        match session.view_mode.get() {
                            ViewMode::Flat => t.view_flat,
                            ViewMode::ByCategory => t.view_category,
                        }
                    }
                    on:click=move |_| session.toggle_view_mode()
                >
                    {move || match session.view_mode.get() {
                        ViewMode::Flat => "🗂",
                        ViewMode::ByCategory => "📋",
                    }}
                </button>
                <button class="leave-btn" on:click=move |_| sync.leave()>
                    {move || session.lang.get().strings().signout}
                </button>
            </div>
        </div>
    }
}
