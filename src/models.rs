//! Frontend Models
//!
//! Data structures matching the shared document store schema.

use serde::{Deserialize, Serialize};

/// Server-assigned creation time, as delivered by the document store.
///
/// Absent on items written optimistically in this session until the server
/// echo arrives; such items sort as the oldest (seconds = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanoseconds: i32,
}

/// Fixed category enumeration. `ALL` is the grouped-view iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Bakery,
    Pantry,
    Frozen,
    Household,
    #[default]
    Other,
}

// Unrecognized or null wire values degrade to Other instead of failing the
// whole snapshot.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key.as_deref().map(Category::from_key).unwrap_or_default())
    }
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Household,
        Category::Other,
    ];

    pub fn from_key(key: &str) -> Category {
        match key {
            "produce" => Category::Produce,
            "dairy" => Category::Dairy,
            "meat" => Category::Meat,
            "bakery" => Category::Bakery,
            "pantry" => Category::Pantry,
            "frozen" => Category::Frozen,
            "household" => Category::Household,
            _ => Category::Other,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Bakery => "bakery",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Household => "household",
            Category::Other => "other",
        }
    }
}

/// One grocery entry (matches the item documents in the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub author: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    /// Sort key seconds; items the server has not timestamped yet count as 0.
    pub fn created_seconds(&self) -> i64 {
        self.created_at.map(|t| t.seconds).unwrap_or(0)
    }
}

/// Presentation mode for the joined list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Flat,
    ByCategory,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Flat => "flat",
            ViewMode::ByCategory => "category",
        }
    }

    pub fn from_str(s: &str) -> ViewMode {
        match s {
            "category" => ViewMode::ByCategory,
            _ => ViewMode::Flat,
        }
    }

    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Flat => ViewMode::ByCategory,
            ViewMode::ByCategory => ViewMode::Flat,
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    He,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
        }
    }

    pub fn from_str(s: &str) -> Lang {
        match s {
            "en" => Lang::En,
            _ => Lang::He,
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::He,
            Lang::He => Lang::En,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Lang::He)
    }
}

/// Normalize a user-chosen list name into the key that namespaces its items:
/// every char outside `[A-Za-z0-9-_]` becomes `_`, then lowercase.
pub fn normalize_list_id(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// A list name can be joined once its trimmed form has at least 3 chars.
pub fn is_joinable_name(raw: &str) -> bool {
    raw.trim().chars().count() >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list_id() {
        assert_eq!(normalize_list_id("Our Home 123"), "our_home_123");
        assert_eq!(normalize_list_id("list-A_b"), "list-a_b");
        assert_eq!(normalize_list_id("רשימה"), "_____");
        assert_eq!(normalize_list_id(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Our Home", "a!b@c", "already_normal-1"] {
            let once = normalize_list_id(raw);
            assert_eq!(normalize_list_id(&once), once);
        }
    }

    #[test]
    fn test_joinable_name_boundary() {
        assert!(!is_joinable_name(""));
        assert!(!is_joinable_name("ab"));
        assert!(!is_joinable_name("  ab  "));
        assert!(is_joinable_name("abc"));
        assert!(is_joinable_name(" abc "));
    }

    #[test]
    fn test_unknown_category_decodes_as_other() {
        let json = r#"{"id":"x","text":"Milk","category":"cheese"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Other);

        let json = r#"{"id":"x","text":"Milk","category":null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Other);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{"id":"x","text":"Milk"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.category, Category::Other);
        assert!(!item.completed);
        assert!(item.created_at.is_none());
        assert!(item.author.is_none());
        assert_eq!(item.created_seconds(), 0);
    }
}
