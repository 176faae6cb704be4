//! Document Store Bridge
//!
//! Frontend bindings to the realtime document store and identity provider.
//! The JS side (`public/firebase-bridge.js`) owns the vendor SDK and exposes
//! a small surface on `window.__GROCERY_BRIDGE__`; everything here maps that
//! surface onto typed Rust calls and a snapshot channel.

use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::SyncError;
use crate::models::{Category, Item};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = signInAnonymously)]
    async fn sign_in_anonymously_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = onAuthStateChanged)]
    fn on_auth_state_changed_js(callback: &Function);

    #[wasm_bindgen(js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = subscribeItems)]
    fn subscribe_items_js(list_id: &str, on_snapshot: &Function, on_error: &Function) -> Function;

    #[wasm_bindgen(catch, js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = addItem)]
    async fn add_item_js(list_id: &str, fields: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = updateItem)]
    async fn update_item_js(list_id: &str, item_id: &str, patch: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__GROCERY_BRIDGE__"], js_name = deleteItem)]
    async fn delete_item_js(list_id: &str, item_id: &str) -> Result<JsValue, JsValue>;
}

// ========================
// Identity
// ========================

/// Anonymous sign-in; resolves to the session uid.
pub async fn sign_in_anonymously() -> Result<String, SyncError> {
    let uid = sign_in_anonymously_js().await.map_err(|_| SyncError::Auth)?;
    uid.as_string().ok_or(SyncError::Auth)
}

/// Register the session-changed observer for the lifetime of the app.
/// The callback receives the current uid, or `None` when signed out.
pub fn on_auth_state_changed(mut callback: impl FnMut(Option<String>) + 'static) {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |uid: JsValue| {
        callback(uid.as_string());
    });
    on_auth_state_changed_js(closure.as_ref().unchecked_ref());
    // Observer outlives any component; leak it intentionally.
    closure.forget();
}

// ========================
// Realtime subscription
// ========================

/// One event on the snapshot channel
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Complete replacement set of items for the subscribed list
    Snapshot(Vec<Item>),
    Error(SyncError),
}

/// Handle for an active subscription. Dropping the handle without calling
/// [`Subscription::unsubscribe`] would leak the JS listener, so the owner
/// must tear it down explicitly on leave or re-join.
pub struct Subscription {
    unsubscribe: Function,
    _on_snapshot: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl Subscription {
    /// Detach the JS listener; queued events die with the dropped closures.
    pub fn unsubscribe(self) {
        let _ = self.unsubscribe.call0(&JsValue::NULL);
    }
}

/// Subscribe to a list's item collection. Snapshots and subscription errors
/// arrive on the returned channel; a single coordinator task is expected to
/// drain it (no other consumer).
pub fn subscribe_items(list_id: &str) -> (Subscription, UnboundedReceiver<SyncEvent>) {
    let (tx, rx) = unbounded::<SyncEvent>();

    let snapshot_tx = tx.clone();
    let on_snapshot = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
        match serde_wasm_bindgen::from_value::<Vec<Item>>(docs) {
            Ok(items) => {
                let _ = snapshot_tx.unbounded_send(SyncEvent::Snapshot(items));
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[sync] snapshot decode failed: {err}").into());
            }
        }
    });

    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_string())
            .unwrap_or_default();
        let _ = tx.unbounded_send(SyncEvent::Error(SyncError::from_subscription_code(&code)));
    });

    let unsubscribe = subscribe_items_js(
        list_id,
        on_snapshot.as_ref().unchecked_ref(),
        on_error.as_ref().unchecked_ref(),
    );

    (
        Subscription {
            unsubscribe,
            _on_snapshot: on_snapshot,
            _on_error: on_error,
        },
        rx,
    )
}

// ========================
// Writes
// ========================

#[derive(Serialize)]
struct NewItemFields<'a> {
    text: &'a str,
    quantity: u32,
    category: Category,
    completed: bool,
}

#[derive(Serialize)]
struct TextPatch<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, SyncError> {
    serde_wasm_bindgen::to_value(value).map_err(|_| SyncError::Write)
}

/// Create an item. The bridge stamps the server timestamp and author uid.
pub async fn add_item(
    list_id: &str,
    text: &str,
    quantity: u32,
    category: Category,
) -> Result<(), SyncError> {
    let fields = to_js(&NewItemFields { text, quantity, category, completed: false })?;
    add_item_js(list_id, fields).await.map_err(|_| SyncError::Write)?;
    Ok(())
}

pub async fn update_item_text(list_id: &str, item_id: &str, text: &str) -> Result<(), SyncError> {
    let patch = to_js(&TextPatch { text })?;
    update_item_js(list_id, item_id, patch).await.map_err(|_| SyncError::Write)?;
    Ok(())
}

pub async fn set_item_completed(
    list_id: &str,
    item_id: &str,
    completed: bool,
) -> Result<(), SyncError> {
    let patch = to_js(&CompletedPatch { completed })?;
    update_item_js(list_id, item_id, patch).await.map_err(|_| SyncError::Write)?;
    Ok(())
}

/// Delete an item; the store treats deleting an absent item as a no-op.
pub async fn delete_item(list_id: &str, item_id: &str) -> Result<(), SyncError> {
    delete_item_js(list_id, item_id).await.map_err(|_| SyncError::Write)?;
    Ok(())
}
