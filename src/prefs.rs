//! Local Preference Store
//!
//! localStorage-backed persistence for session preferences. Unreadable
//! storage or corrupt values degrade to defaults, never fail.

use crate::models::{Lang, ViewMode};

const KEY_LIST_ID: &str = "grocery_list_id";
const KEY_VIEW_MODE: &str = "grocery_view_mode";
const KEY_LANG: &str = "grocery_lang";
const KEY_DARK_MODE: &str = "grocery_dark_mode";
const KEY_HISTORY: &str = "grocery_list_history";

/// Most-recently-joined list names kept in history
pub const HISTORY_LIMIT: usize = 5;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn load_list_id() -> Option<String> {
    get(KEY_LIST_ID).filter(|s| !s.is_empty())
}

pub fn save_list_id(list_id: &str) {
    set(KEY_LIST_ID, list_id);
}

pub fn clear_list_id() {
    remove(KEY_LIST_ID);
}

pub fn load_view_mode() -> ViewMode {
    get(KEY_VIEW_MODE)
        .map(|s| ViewMode::from_str(&s))
        .unwrap_or(ViewMode::Flat)
}

pub fn save_view_mode(mode: ViewMode) {
    set(KEY_VIEW_MODE, mode.as_str());
}

pub fn load_lang() -> Lang {
    get(KEY_LANG).map(|s| Lang::from_str(&s)).unwrap_or(Lang::He)
}

pub fn save_lang(lang: Lang) {
    set(KEY_LANG, lang.as_str());
}

pub fn load_dark_mode() -> bool {
    get(KEY_DARK_MODE).as_deref() == Some("true")
}

pub fn save_dark_mode(dark: bool) {
    set(KEY_DARK_MODE, if dark { "true" } else { "false" });
}

pub fn load_history() -> Vec<String> {
    get(KEY_HISTORY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn save_history(history: &[String]) {
    if let Ok(json) = serde_json::to_string(history) {
        set(KEY_HISTORY, &json);
    }
}

/// Push a joined name onto the recent-list history: exact-string dedup,
/// most-recent-first, capped at [`HISTORY_LIMIT`]. The raw (pre-normalized)
/// name is what the user recognizes, so that is what gets stored.
pub fn push_recent(history: &[String], name: &str) -> Vec<String> {
    let mut updated = Vec::with_capacity(HISTORY_LIMIT);
    updated.push(name.to_string());
    updated.extend(history.iter().filter(|h| *h != name).cloned());
    updated.truncate(HISTORY_LIMIT);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_all(history: Vec<&str>, names: &[&str]) -> Vec<String> {
        let mut history: Vec<String> = history.into_iter().map(String::from).collect();
        for name in names {
            history = push_recent(&history, name);
        }
        history
    }

    #[test]
    fn test_push_recent_orders_most_recent_first() {
        assert_eq!(join_all(vec![], &["a"]), vec!["a"]);
        assert_eq!(join_all(vec![], &["a", "b"]), vec!["b", "a"]);
    }

    #[test]
    fn test_push_recent_dedups_rejoin() {
        assert_eq!(join_all(vec![], &["a", "b", "a"]), vec!["a", "b"]);
    }

    #[test]
    fn test_push_recent_caps_at_limit_and_evicts_oldest() {
        // a rejoined, then five newer distinct names evict it.
        let history = join_all(vec![], &["a", "b", "a", "c", "d", "e", "f"]);
        assert_eq!(history, vec!["f", "e", "d", "c", "a"]);
        let history = push_recent(&history, "g");
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history, vec!["g", "f", "e", "d", "c"]);
        assert!(!history.contains(&"a".to_string()));
    }

    #[test]
    fn test_push_recent_never_holds_duplicates() {
        let history = join_all(vec![], &["a", "b", "c", "b", "a", "b"]);
        let unique: std::collections::HashSet<&String> = history.iter().collect();
        assert_eq!(unique.len(), history.len());
        assert_eq!(history[0], "b");
    }
}
