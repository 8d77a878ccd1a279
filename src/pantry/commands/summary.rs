use crate::model::{Category, InventoryItem};
use serde::Serialize;
use std::collections::BTreeMap;

/// Live counts over a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub distinct_items: usize,
    pub total_quantity: u64,
    /// Distinct items per category. Categories with no items are omitted.
    pub by_category: BTreeMap<Category, usize>,
}

pub fn run(snapshot: &[InventoryItem]) -> Summary {
    let mut summary = Summary {
        distinct_items: snapshot.len(),
        ..Summary::default()
    };
    for item in snapshot {
        summary.total_quantity += u64::from(item.quantity);
        *summary.by_category.entry(item.category).or_insert(0) += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_zero_counts() {
        assert_eq!(run(&[]), Summary::default());
    }

    #[test]
    fn counts_items_quantities_and_categories() {
        let items = vec![
            InventoryItem::new("apple", Category::Fruit, 3),
            InventoryItem::new("banana", Category::Fruit, 1),
            InventoryItem::new("egg", Category::Dairy, 12),
        ];
        let summary = run(&items);
        assert_eq!(summary.distinct_items, 3);
        assert_eq!(summary.total_quantity, 16);
        assert_eq!(summary.by_category.get(&Category::Fruit), Some(&2));
        assert_eq!(summary.by_category.get(&Category::Dairy), Some(&1));
        assert_eq!(summary.by_category.get(&Category::Grain), None);
    }
}
