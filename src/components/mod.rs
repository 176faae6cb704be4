//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod delete_modal;
mod error_banner;
mod header;
mod item_list;
mod item_row;
mod join_screen;
mod list_bar;

pub use add_item_form::AddItemForm;
pub use delete_modal::DeleteModal;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use join_screen::JoinScreen;
pub use list_bar::ListBar;
