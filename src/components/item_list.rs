//! Item List Component
//!
//! Runs the materializer over the current item set and renders the
//! resulting groups. Empty groups are skipped; category headers only show
//! in grouped view.

use leptos::prelude::*;

use crate::context::use_session;
use crate::materialize::materialize;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::components::ItemRow;

#[component]
pub fn ItemList() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let groups = Memo::new(move |_| {
        materialize(&store.items().get(), session.view_mode.get())
    });

    let show_empty = move || {
        store.items().read().is_empty() && !store.loading().get()
    };

    view! {
        <div class="item-groups">
            {move || {
                let lang = session.lang.get();
                groups
                    .get()
                    .into_iter()
                    .filter(|group| !group.items.is_empty())
                    .map(|group| {
                        let header = group.category.map(|cat| {
                            view! {
                                <h3 class="group-header">
                                    <span class="group-emoji">{cat.emoji()}</span>
                                    <span>{cat.label(lang)}</span>
                                </h3>
                            }
                        });
                        let rows = group
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| view! { <ItemRow item=item index=index /> })
                            .collect_view();
                        view! {
                            <div class="item-group">
                                {header}
                                {rows}
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <Show when=show_empty>
                <div class="empty-state">
                    <div class="empty-icon">"🧺"</div>
                    <p>{move || session.lang.get().strings().empty}</p>
                </div>
            </Show>
        </div>
    }
}
