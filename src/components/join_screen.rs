//! Join Screen Component
//!
//! List-name entry with validation and the recent-lists chips.

use leptos::prelude::*;

use crate::context::use_session;
use crate::models::is_joinable_name;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::use_sync;

#[component]
pub fn JoinScreen() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let sync = use_sync();

    // Prefill with the last-used name so re-entry is one tap.
    let (name, set_name) = signal(store.list_id().get_untracked());

    let can_join = move || {
        is_joinable_name(&name.get()) && store.user().with(|u| u.is_some())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_join() {
            return;
        }
        sync.join(&name.get());
    };

    view! {
        <div class="join-screen">
            <div class="join-card">
                <div class="join-icon">"🔗"</div>
                <h2>{move || session.lang.get().strings().enter_list_id}</h2>

                <form class="join-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="join-input"
                        placeholder=move || session.lang.get().strings().enter_list_id_placeholder
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="join-btn" disabled=move || !can_join()>
                        {move || {
                            let t = session.lang.get().strings();
                            if store.user().with(|u| u.is_none()) { t.connecting } else { t.join }
                        }}
                    </button>
                </form>
            </div>

            <Show when=move || !store.recent_lists().read().is_empty()>
                <div class="recent-lists">
                    <div class="recent-label">{move || session.lang.get().strings().recent}</div>
                    <div class="recent-chips">
                        <For
                            each=move || store.recent_lists().get()
                            key=|recent| recent.clone()
                            children=move |recent| {
                                let label = recent.clone();
                                view! {
                                    <button
                                        class="recent-chip"
                                        on:click=move |_| sync.join(&recent)
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
