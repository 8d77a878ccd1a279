use crate::model::InventoryItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Matching items, in snapshot order.
    pub items: Vec<InventoryItem>,
    /// Whether any name matched. Always false for an empty query.
    pub found: bool,
}

/// Case-insensitive substring match of `query` against item names.
/// An empty query matches everything.
pub fn filter(snapshot: &[InventoryItem], query: &str) -> SearchResult {
    if query.is_empty() {
        return SearchResult {
            items: snapshot.to_vec(),
            found: false,
        };
    }

    let query_lower = query.to_lowercase();
    let items: Vec<InventoryItem> = snapshot
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&query_lower))
        .cloned()
        .collect();

    SearchResult {
        found: !items.is_empty(),
        items,
    }
}
