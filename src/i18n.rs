//! UI Strings
//!
//! Bilingual (English / Hebrew) string tables and category labels.

use crate::models::{Category, Lang};

/// All user-visible strings for one language
pub struct Strings {
    pub title: &'static str,
    pub enter_list_id: &'static str,
    pub enter_list_id_placeholder: &'static str,
    pub join: &'static str,
    pub add_item: &'static str,
    pub connecting: &'static str,
    pub placeholder: &'static str,
    pub empty: &'static str,
    pub loading: &'static str,
    pub signout: &'static str,
    pub recent: &'static str,
    pub error_add: &'static str,
    pub error_auth: &'static str,
    pub error_access_denied: &'static str,
    pub error_sync_paused: &'static str,
    pub view_flat: &'static str,
    pub view_category: &'static str,
    pub edit: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete_title: &'static str,
    pub delete_warning: &'static str,
    pub delete_confirm: &'static str,
    pub shopping_mode_on: &'static str,
    pub quantity: &'static str,
}

const EN: Strings = Strings {
    title: "Grocery List",
    enter_list_id: "Enter Shared List Name",
    enter_list_id_placeholder: "e.g., our-home-123",
    join: "Join List",
    add_item: "Add",
    connecting: "Connecting...",
    placeholder: "I need...",
    empty: "Your list is empty.",
    loading: "Loading...",
    signout: "Exit",
    recent: "Recent",
    error_add: "Connection issue. Try again.",
    error_auth: "Network error",
    error_access_denied: "Access denied: list is locked",
    error_sync_paused: "Sync paused.",
    view_flat: "Flat List",
    view_category: "By Category",
    edit: "Edit",
    save: "Save",
    cancel: "Cancel",
    delete_title: "Remove Item?",
    delete_warning: "This cannot be undone.",
    delete_confirm: "Remove",
    shopping_mode_on: "Shopping Mode",
    quantity: "Qty",
};

const HE: Strings = Strings {
    title: "רשימת קניות",
    enter_list_id: "שם רשימה משותפת",
    enter_list_id_placeholder: "לדוגמה: הבית-שלנו",
    join: "כניסה",
    add_item: "הוסף",
    connecting: "מתחבר...",
    placeholder: "מה צריך לקנות?",
    empty: "הרשימה ריקה.",
    loading: "טוען...",
    signout: "יציאה",
    recent: "אחרונים",
    error_add: "בעיית חיבור. נסו שוב.",
    error_auth: "שגיאת רשת",
    error_access_denied: "אין גישה: הרשימה נעולה",
    error_sync_paused: "הסנכרון הושהה.",
    view_flat: "רשימה רגילה",
    view_category: "לפי קטגוריות",
    edit: "ערוך",
    save: "שמור",
    cancel: "ביטול",
    delete_title: "למחוק פריט?",
    delete_warning: "לא ניתן לשחזר מחיקה.",
    delete_confirm: "מחק",
    shopping_mode_on: "מצב קנייה",
    quantity: "כמות",
};

impl Lang {
    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::He => &HE,
        }
    }
}

impl Category {
    pub fn emoji(self) -> &'static str {
        match self {
            Category::Produce => "🍎",
            Category::Dairy => "🧀",
            Category::Meat => "🥩",
            Category::Bakery => "🥖",
            Category::Pantry => "🥫",
            Category::Frozen => "🧊",
            Category::Household => "🧻",
            Category::Other => "🛒",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Category::Produce, Lang::En) => "Produce",
            (Category::Produce, Lang::He) => "ירקות",
            (Category::Dairy, Lang::En) => "Dairy",
            (Category::Dairy, Lang::He) => "חלב",
            (Category::Meat, Lang::En) => "Meat",
            (Category::Meat, Lang::He) => "בשר",
            (Category::Bakery, Lang::En) => "Bakery",
            (Category::Bakery, Lang::He) => "מאפים",
            (Category::Pantry, Lang::En) => "Pantry",
            (Category::Pantry, Lang::He) => "מזווה",
            (Category::Frozen, Lang::En) => "Frozen",
            (Category::Frozen, Lang::He) => "קפואים",
            (Category::Household, Lang::En) => "Home",
            (Category::Household, Lang::He) => "לבית",
            (Category::Other, Lang::En) => "Other",
            (Category::Other, Lang::He) => "שונות",
        }
    }
}
