//! Item Row Component
//!
//! One list entry: completion toggle, text, category line, quantity badge,
//! and the edit/delete affordances (hidden in shopping mode). Switches to an
//! inline editor while this item is being edited.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;
use crate::firebase;
use crate::models::{normalize_list_id, Item};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::flash_write_error;

/// Rotating accent colors, keyed by row index within the group
const ROW_ACCENTS: &[&str] = &[
    "accent-pink", "accent-purple", "accent-indigo", "accent-blue",
    "accent-cyan", "accent-teal", "accent-green", "accent-lime",
    "accent-yellow", "accent-orange",
];

#[component]
pub fn ItemRow(item: Item, index: usize) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let row_id = item.id.clone();
    let is_editing = {
        let row_id = row_id.clone();
        move || {
            store
                .editing()
                .with(|e| e.as_ref().is_some_and(|(id, _)| *id == row_id))
        }
    };

    let display = {
        let item = item.clone();
        move || {
            let accent = ROW_ACCENTS[index % ROW_ACCENTS.len()];
            let row_class = if item.completed {
                format!("item-row completed {accent}")
            } else {
                format!("item-row {accent}")
            };

            let on_toggle = {
                let id = item.id.clone();
                let completed = item.completed;
                move |_| {
                    let list_key = normalize_list_id(&store.list_id().get_untracked());
                    let id = id.clone();
                    spawn_local(async move {
                        if firebase::set_item_completed(&list_key, &id, !completed).await.is_err() {
                            flash_write_error(store);
                        }
                    });
                }
            };

            let start_edit = {
                let id = item.id.clone();
                let text = item.text.clone();
                move |_| store.editing().set(Some((id.clone(), text.clone())))
            };

            let request_delete = {
                let id = item.id.clone();
                move |_| store.pending_delete().set(Some(id.clone()))
            };

            let category = item.category;
            let quantity = item.quantity;

            view! {
                <div class=row_class>
                    <button
                        class=move || if item.completed { "check-btn checked" } else { "check-btn" }
                        on:click=on_toggle
                    >
                        "✓"
                    </button>

                    <div class="item-body">
                        <div class="item-text">{item.text.clone()}</div>
                        <div class="item-meta">
                            <span>
                                {move || format!("{} {}", category.emoji(), category.label(session.lang.get()))}
                            </span>
                            <Show when=move || { quantity > 1 }>
                                <span class="qty-badge">{format!("x{quantity}")}</span>
                            </Show>
                        </div>
                    </div>

                    <Show when=move || !session.shopping_mode.get()>
                        <div class="row-actions">
                            <button
                                class="row-btn edit"
                                title=move || session.lang.get().strings().edit
                                on:click=start_edit.clone()
                            >
                                "✎"
                            </button>
                            <button
                                class="row-btn delete"
                                title=move || session.lang.get().strings().delete_confirm
                                on:click=request_delete.clone()
                            >
                                "🗑"
                            </button>
                        </div>
                    </Show>
                </div>
            }
        }
    };

    let editor = {
        let row_id = row_id.clone();
        move || {
            let draft = move || {
                store
                    .editing()
                    .with(|e| e.as_ref().map(|(_, text)| text.clone()).unwrap_or_default())
            };

            let save = {
                let row_id = row_id.clone();
                move |_| {
                    let text = draft().trim().to_string();
                    if text.is_empty() {
                        return;
                    }
                    let list_key = normalize_list_id(&store.list_id().get_untracked());
                    let row_id = row_id.clone();
                    spawn_local(async move {
                        match firebase::update_item_text(&list_key, &row_id, &text).await {
                            Ok(()) => store.editing().set(None),
                            Err(_) => flash_write_error(store),
                        }
                    });
                }
            };

            view! {
                <div class="item-row editing">
                    <input
                        type="text"
                        class="edit-input"
                        prop:value=draft
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store.editing().update(|e| {
                                if let Some((_, text)) = e {
                                    *text = value;
                                }
                            });
                        }
                        dir="auto"
                    />
                    <button class="row-btn save" title=move || session.lang.get().strings().save on:click=save>
                        "💾"
                    </button>
                    <button
                        class="row-btn cancel"
                        title=move || session.lang.get().strings().cancel
                        on:click=move |_| store.editing().set(None)
                    >
                        "✗"
                    </button>
                </div>
            }
        }
    };

    view! {
        {move || {
            if is_editing() {
                editor().into_any()
            } else {
                display().into_any()
            }
        }}
    }
}
