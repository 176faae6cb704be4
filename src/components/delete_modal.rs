//! Delete Confirmation Modal
//!
//! Overlay shown while an item is pending deletion. Confirm deletes against
//! the store (idempotent if the item is already gone); cancel just clears
//! the pending id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;
use crate::firebase;
use crate::models::normalize_list_id;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::flash_write_error;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let confirm = move |_| {
        let Some(id) = store.pending_delete().get_untracked() else {
            return;
        };
        let list_key = normalize_list_id(&store.list_id().get_untracked());
        spawn_local(async move {
            match firebase::delete_item(&list_key, &id).await {
                Ok(()) => store.pending_delete().set(None),
                Err(_) => {
                    store.pending_delete().set(None);
                    flash_write_error(store);
                }
            }
        });
    };

    view! {
        <Show when=move || store.pending_delete().read().is_some()>
            <div class="modal-backdrop">
                <div class="modal-card">
                    <div class="modal-icon">"🗑"</div>
                    <h3>{move || session.lang.get().strings().delete_title}</h3>
                    <p>{move || session.lang.get().strings().delete_warning}</p>
                    <div class="modal-actions">
                        <button
                            class="modal-btn cancel"
                            on:click=move |_| store.pending_delete().set(None)
                        >
                            {move || session.lang.get().strings().cancel}
                        </button>
                        <button class="modal-btn confirm" on:click=confirm>
                            {move || session.lang.get().strings().delete_confirm}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
