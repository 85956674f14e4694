//! Read-only catalog store.

use super::model::CatalogItem;
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable, indexed collection of catalog items.
///
/// Items are stored behind `Arc` so replies can reference them without
/// copying. Lookups never fail; a missing id or key yields `None` / an
/// empty list.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Arc<CatalogItem>>,
    by_id: HashMap<String, usize>,
    by_category: HashMap<String, Vec<usize>>,
}

impl CatalogStore {
    /// Builds a store from items in declaration order.
    ///
    /// If two items share an id, the first one wins for `get_by_id`.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, item) in items.iter().enumerate() {
            by_id.entry(item.id.clone()).or_insert(index);
            by_category
                .entry(item.category_key.to_lowercase())
                .or_default()
                .push(index);
        }

        Self {
            items: items.into_iter().map(Arc::new).collect(),
            by_id,
            by_category,
        }
    }

    /// All items in declaration order.
    pub fn get_all(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    /// Finds an item by id.
    pub fn get_by_id(&self, id: &str) -> Option<Arc<CatalogItem>> {
        self.by_id.get(id).map(|&index| self.items[index].clone())
    }

    /// Items whose category key matches (case-insensitive), in declaration order.
    pub fn get_by_category_key(&self, key: &str) -> Vec<Arc<CatalogItem>> {
        self.by_category
            .get(&key.to_lowercase())
            .map(|indexes| indexes.iter().map(|&i| self.items[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Resolves a list of ids, skipping unknown ones.
    pub fn get_many(&self, ids: &[&str]) -> Vec<Arc<CatalogItem>> {
        ids.iter().filter_map(|id| self.get_by_id(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Money;

    fn item(id: &str, category_key: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            brand: "Test".to_string(),
            price: Money(1),
            image: String::new(),
            category_key: category_key.to_string(),
            attributes: Default::default(),
            recommended_variant: None,
        }
    }

    #[test]
    fn test_lookups() {
        let store = CatalogStore::new(vec![item("1", "dress"), item("2", "Shoes"), item("3", "dress")]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.get_by_id("2").unwrap().name, "Item 2");
        assert!(store.get_by_id("99").is_none());

        let dresses = store.get_by_category_key("DRESS");
        assert_eq!(dresses.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
        assert!(store.get_by_category_key("hats").is_empty());
    }

    #[test]
    fn test_get_many_skips_unknown_ids() {
        let store = CatalogStore::new(vec![item("1", "a"), item("2", "b")]);
        let items = store.get_many(&["2", "404", "1"]);
        assert_eq!(items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["2", "1"]);
    }

    #[test]
    fn test_items_are_shared_not_copied() {
        let store = CatalogStore::new(vec![item("1", "a")]);
        let first = store.get_by_id("1").unwrap();
        let second = store.get_by_id("1").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
