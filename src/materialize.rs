//! List Materializer
//!
//! Pure derivation of the renderable grouping from the current item set and
//! the active view mode.

use crate::models::{Category, Item, ViewMode};

/// One renderable group. `category` is `None` for the single flat group.
/// Grouped view keeps empty groups; rendering skips them.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub category: Option<Category>,
    pub items: Vec<Item>,
}

/// Sort then group the item set for display.
///
/// Sort: not-completed before completed; within each partition newest first
/// by server timestamp (missing timestamp counts as 0, i.e. oldest); ties
/// keep input order (stable sort).
pub fn materialize(items: &[Item], mode: ViewMode) -> Vec<Group> {
    let mut sorted: Vec<Item> = items.to_vec();
    sorted.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(b.created_seconds().cmp(&a.created_seconds()))
    });

    match mode {
        ViewMode::Flat => vec![Group { category: None, items: sorted }],
        ViewMode::ByCategory => Category::ALL
            .iter()
            .map(|&cat| Group {
                category: Some(cat),
                items: sorted.iter().filter(|i| i.category == cat).cloned().collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timestamp;

    fn make_item(id: &str, category: Category, completed: bool, seconds: Option<i64>) -> Item {
        Item {
            id: id.to_string(),
            text: format!("Item {}", id),
            quantity: 1,
            category,
            completed,
            created_at: seconds.map(|s| Timestamp { seconds: s, nanoseconds: 0 }),
            author: None,
        }
    }

    fn flat_ids(items: &[Item]) -> Vec<String> {
        materialize(items, ViewMode::Flat)[0]
            .items
            .iter()
            .map(|i| i.id.clone())
            .collect()
    }

    #[test]
    fn test_flat_view_is_single_group() {
        let items = vec![make_item("a", Category::Dairy, false, Some(10))];
        let groups = materialize(&items, ViewMode::Flat);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, None);
        assert_eq!(groups[0].items.len(), 1);
    }

    #[test]
    fn test_not_completed_precede_completed() {
        let items = vec![
            make_item("done", Category::Other, true, Some(200)),
            make_item("open", Category::Other, false, Some(100)),
        ];
        assert_eq!(flat_ids(&items), vec!["open", "done"]);
    }

    #[test]
    fn test_newest_first_within_partition() {
        let items = vec![
            make_item("old", Category::Other, false, Some(50)),
            make_item("new", Category::Other, false, Some(100)),
            make_item("pending", Category::Other, false, None),
        ];
        // No timestamp sorts as seconds = 0, i.e. oldest.
        assert_eq!(flat_ids(&items), vec!["new", "old", "pending"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let items = vec![
            make_item("first", Category::Other, false, Some(100)),
            make_item("second", Category::Other, false, Some(100)),
        ];
        assert_eq!(flat_ids(&items), vec!["first", "second"]);
    }

    #[test]
    fn test_output_is_permutation_invariant() {
        // Distinct keys: every permutation of the input must materialize
        // identically.
        let a = make_item("a", Category::Dairy, false, Some(300));
        let b = make_item("b", Category::Meat, false, Some(100));
        let c = make_item("c", Category::Dairy, true, Some(200));
        let expected = materialize(&[a.clone(), b.clone(), c.clone()], ViewMode::Flat);
        let perms: [[&Item; 3]; 6] = [
            [&a, &b, &c], [&a, &c, &b], [&b, &a, &c],
            [&b, &c, &a], [&c, &a, &b], [&c, &b, &a],
        ];
        for perm in perms {
            let input: Vec<Item> = perm.iter().map(|i| (*i).clone()).collect();
            assert_eq!(materialize(&input, ViewMode::Flat), expected);
        }
    }

    #[test]
    fn test_groups_partition_the_input() {
        let items = vec![
            make_item("a", Category::Produce, false, Some(5)),
            make_item("b", Category::Produce, true, Some(4)),
            make_item("c", Category::Frozen, false, Some(3)),
            make_item("d", Category::Other, false, None),
        ];
        let groups = materialize(&items, ViewMode::ByCategory);
        let mut seen: Vec<String> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id.clone()))
            .collect();
        assert_eq!(seen.len(), items.len());
        seen.sort();
        let mut expected: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_category_groups_follow_fixed_order() {
        let items = vec![
            make_item("h", Category::Household, false, Some(1)),
            make_item("p", Category::Produce, false, Some(2)),
        ];
        let groups = materialize(&items, ViewMode::ByCategory);
        let order: Vec<Category> = groups.iter().filter_map(|g| g.category).collect();
        assert_eq!(order.as_slice(), Category::ALL.as_slice());
    }

    #[test]
    fn test_empty_groups_are_retained() {
        let items = vec![make_item("a", Category::Dairy, false, Some(1))];
        let groups = materialize(&items, ViewMode::ByCategory);
        assert_eq!(groups.len(), Category::ALL.len());
        assert_eq!(groups.iter().filter(|g| !g.items.is_empty()).count(), 1);
    }

    #[test]
    fn test_group_order_matches_flat_sort() {
        let items = vec![
            make_item("d-old", Category::Dairy, false, Some(10)),
            make_item("d-new", Category::Dairy, false, Some(20)),
            make_item("d-done", Category::Dairy, true, Some(30)),
        ];
        let groups = materialize(&items, ViewMode::ByCategory);
        let dairy = groups
            .iter()
            .find(|g| g.category == Some(Category::Dairy))
            .unwrap();
        let ids: Vec<&str> = dairy.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["d-new", "d-old", "d-done"]);
    }

    #[test]
    fn test_milk_bread_scenario() {
        // Milk open at t=100, Bread completed at t=50.
        let milk = make_item("milk", Category::Dairy, false, Some(100));
        let bread = make_item("bread", Category::Bakery, true, Some(50));
        let items = vec![bread.clone(), milk.clone()];

        assert_eq!(flat_ids(&items), vec!["milk", "bread"]);

        let groups = materialize(&items, ViewMode::ByCategory);
        for group in &groups {
            match group.category {
                Some(Category::Dairy) => assert_eq!(group.items, vec![milk.clone()]),
                Some(Category::Bakery) => assert_eq!(group.items, vec![bread.clone()]),
                _ => assert!(group.items.is_empty()),
            }
        }
    }
}
