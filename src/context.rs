//! Session Context
//!
//! Client-local UI preferences provided via the Leptos Context API. Each
//! setter persists through the preference store, so changes survive reload.

use leptos::prelude::*;

use crate::models::{Lang, ViewMode};
use crate::prefs;

/// App-wide preference signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub lang: ReadSignal<Lang>,
    set_lang: WriteSignal<Lang>,
    pub dark_mode: ReadSignal<bool>,
    set_dark_mode: WriteSignal<bool>,
    pub view_mode: ReadSignal<ViewMode>,
    set_view_mode: WriteSignal<ViewMode>,
    /// Read-mostly UI affordance; not persisted
    pub shopping_mode: ReadSignal<bool>,
    set_shopping_mode: WriteSignal<bool>,
}

impl SessionContext {
    /// Seed every preference from the local store.
    pub fn load() -> Self {
        let (lang, set_lang) = signal(prefs::load_lang());
        let (dark_mode, set_dark_mode) = signal(prefs::load_dark_mode());
        let (view_mode, set_view_mode) = signal(prefs::load_view_mode());
        let (shopping_mode, set_shopping_mode) = signal(false);
        Self {
            lang,
            set_lang,
            dark_mode,
            set_dark_mode,
            view_mode,
            set_view_mode,
            shopping_mode,
            set_shopping_mode,
        }
    }

    pub fn toggle_lang(&self) {
        let lang = self.lang.get_untracked().toggled();
        self.set_lang.set(lang);
        prefs::save_lang(lang);
    }

    pub fn toggle_dark_mode(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.set_dark_mode.set(dark);
        prefs::save_dark_mode(dark);
    }

    pub fn toggle_view_mode(&self) {
        let mode = self.view_mode.get_untracked().toggled();
        self.set_view_mode.set(mode);
        prefs::save_view_mode(mode);
    }

    pub fn toggle_shopping_mode(&self) {
        self.set_shopping_mode.update(|on| *on = !*on);
    }
}

/// Get the session context; panics if the root component forgot to provide it.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
