use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Item;
use crate::rarity::Rarity;

/// Items won during the current session, in the order they were won.
///
/// There is no way to remove or edit an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionInventory {
    items: Vec<Arc<Item>>,
}

impl SessionInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: Arc<Item>) {
        self.items.push(item);
    }

    pub fn list(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_by_rarity(&self, rarity: Rarity) -> usize {
        self.items.iter().filter(|item| item.rarity == rarity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_append_keeps_win_order() {
        let catalog = Catalog::builtin().unwrap();
        let order = [4usize, 0, 4, 2, 5, 1, 0];

        let mut inventory = SessionInventory::new();
        assert!(inventory.is_empty());
        for (n, index) in order.iter().enumerate() {
            inventory.append(catalog.items()[*index].clone());
            assert_eq!(inventory.count(), n + 1);
            assert_eq!(inventory.list().last().unwrap().id, catalog.items()[*index].id);
        }

        let ids: Vec<u32> = inventory.list().iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![5, 1, 5, 3, 6, 2, 1]);
    }

    #[test]
    fn test_count_by_rarity() {
        let catalog = Catalog::builtin().unwrap();
        let mut inventory = SessionInventory::new();
        for item in catalog.items() {
            inventory.append(item.clone());
        }
        inventory.append(catalog.items()[0].clone());

        assert_eq!(inventory.count_by_rarity(Rarity::Common), 3);
        assert_eq!(inventory.count_by_rarity(Rarity::Rare), 2);
        assert_eq!(inventory.count_by_rarity(Rarity::Legendary), 2);
    }
}
