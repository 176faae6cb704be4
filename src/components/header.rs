//! Header Component
//!
//! App title plus the shopping-mode, dark-mode, and language toggles, with
//! the shopping-mode banner underneath.

use leptos::prelude::*;

use crate::context::use_session;
use crate::models::Lang;

/// Sticky header with the preference toggles
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let shopping_btn_class = move || {
        if session.shopping_mode.get() {
            "toggle-btn shopping active"
        } else {
            "toggle-btn shopping"
        }
    };

    view! {
        <header class="app-header">
            <div class="header-row">
                <div class="logo-area">
                    <span class="logo-icon">"🧺"</span>
                    <h1 class="app-title">{move || session.lang.get().strings().title}</h1>
                </div>

                <div class="header-toggles">
                    <button
                        class=shopping_btn_class
                        on:click=move |_| session.toggle_shopping_mode()
                    >
                        {move || if session.shopping_mode.get() { "👁" } else { "✏️" }}
                    </button>
                    <button
                        class="toggle-btn theme"
                        on:click=move |_| session.toggle_dark_mode()
                    >
                        {move || if session.dark_mode.get() { "☀️" } else { "🌙" }}
                    </button>
                    <button
                        class="toggle-btn lang"
                        on:click=move |_| session.toggle_lang()
                    >
                        {move || match session.lang.get() {
                            Lang::En => "HE",
                            Lang::He => "EN",
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || session.shopping_mode.get()>
                <div class="shopping-banner">
                    {move || session.lang.get().strings().shopping_mode_on}
                </div>
            </Show>
        </header>
    }
}
