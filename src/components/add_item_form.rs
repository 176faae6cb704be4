//! Add Item Form Component
//!
//! Text input, quantity stepper (1–99), category select, and the add
//! button. Submits directly against the document store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;
use crate::firebase;
use crate::models::{normalize_list_id, Category};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::flash_write_error;

const QTY_MIN: u32 = 1;
const QTY_MAX: u32 = 99;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let (text, set_text) = signal(String::new());
    let (qty, set_qty) = signal(QTY_MIN);
    let (category, set_category) = signal(Category::Other);

    let can_submit = move || {
        !text.get().trim().is_empty()
            && !store.submitting().get()
            && store.user().with(|u| u.is_some())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = text.get_untracked().trim().to_string();
        if entered.is_empty() || store.submitting().get_untracked() {
            return;
        }
        let quantity = qty.get_untracked();
        let chosen = category.get_untracked();
        let list_key = normalize_list_id(&store.list_id().get_untracked());
        store.submitting().set(true);

        spawn_local(async move {
            // The session may have lapsed; try one re-sign-in before failing.
            if store.user().with_untracked(|u| u.is_none()) {
                match firebase::sign_in_anonymously().await {
                    Ok(uid) => store.user().set(Some(uid)),
                    Err(_) => {
                        flash_write_error(store);
                        return;
                    }
                }
            }
            let result = firebase::add_item(&list_key, &entered, quantity, chosen).await;
            store.submitting().set(false);
            match result {
                Ok(()) => {
                    store.error().set(None);
                    set_text.set(String::new());
                    set_qty.set(QTY_MIN);
                }
                Err(_) => flash_write_error(store),
            }
        });
    };

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <div class="add-item-row">
                <input
                    type="text"
                    class="add-item-input"
                    placeholder=move || session.lang.get().strings().placeholder
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    dir="auto"
                />

                <div class="qty-stepper" dir="ltr">
                    <button
                        type="button"
                        class="qty-btn"
                        disabled=move || qty.get() <= QTY_MIN
                        on:click=move |_| set_qty.update(|q| *q = (*q - 1).max(QTY_MIN))
                    >
                        "−"
                    </button>
                    <span class="qty-value">{move || qty.get()}</span>
                    <button
                        type="button"
                        class="qty-btn"
                        on:click=move |_| set_qty.update(|q| *q = (*q + 1).min(QTY_MAX))
                    >
                        "+"
                    </button>
                </div>
            </div>

            <div class="add-item-row">
                <select
                    class="category-select"
                    prop:value=move || category.get().key()
                    on:change=move |ev| set_category.set(Category::from_key(&event_target_value(&ev)))
                >
                    {Category::ALL.iter().map(|&cat| {
                        view! {
                            <option value=cat.key()>
                                {move || format!("{}  {}", cat.emoji(), cat.label(session.lang.get()))}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <button type="submit" class="add-btn" disabled=move || !can_submit()>
                    {move || {
                        let t = session.lang.get().strings();
                        if store.submitting().get() { t.loading } else { t.add_item }
                    }}
                </button>
            </div>
        </form>
    }
}
