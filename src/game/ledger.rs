//! Stock ledgers for the shop and the player inventory
//!
//! A ledger is an ordered list of named, quantity-counted entries. Order is
//! preserved so slot layout stays stable between frames; lookups are a linear
//! scan by exact name, which is fine at catalog scale (tens of items).

use std::collections::HashMap;

use super::item::{ItemCatalog, ItemDefinition};

/// Stock every seed gets in a freshly opened seed shop
pub const SEED_SHOP_QUANTITY: u32 = 99;

/// A single stocked item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub name: String,
    pub label: String,
    pub icon: String,
    pub description: String,
    pub buy_price: u32,
    pub quantity: u32,
}

impl StockEntry {
    pub fn from_definition(def: &ItemDefinition, quantity: u32) -> Self {
        Self {
            name: def.name.clone(),
            label: def.label().to_string(),
            icon: def.icon_key().to_string(),
            description: def.description.clone(),
            buy_price: def.buy_price,
            quantity,
        }
    }
}

/// Anything that holds stock the transaction engine can move items between.
///
/// `increase` never creates entries. `decrease` clamps at zero and returns
/// `None` when the name is absent.
pub trait ItemStore {
    fn entries(&self) -> &[StockEntry];

    fn increase(&mut self, name: &str, amount: u32);

    fn decrease(&mut self, name: &str, amount: u32) -> Option<u32>;

    fn get(&self, name: &str) -> Option<&StockEntry> {
        self.entries().iter().find(|e| e.name == name)
    }

    fn quantity(&self, name: &str) -> Option<u32> {
        self.get(name).map(|e| e.quantity)
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    name: String,
    entries: Vec<StockEntry>,
}

impl Ledger {
    pub fn new(name: &str, entries: Vec<StockEntry>) -> Self {
        Self {
            name: name.to_string(),
            entries,
        }
    }

    /// One entry per catalog item, in catalog order. Items missing from
    /// `quantities` start at zero.
    pub fn from_catalog<'a>(
        name: &str,
        items: impl IntoIterator<Item = &'a ItemDefinition>,
        quantities: &HashMap<String, u32>,
    ) -> Self {
        let entries = items
            .into_iter()
            .map(|def| {
                let quantity = quantities.get(&def.name).copied().unwrap_or(0);
                StockEntry::from_definition(def, quantity)
            })
            .collect();
        Self::new(name, entries)
    }

    /// Shop stocking every seed in the catalog with `quantity` units
    pub fn seed_shop(name: &str, catalog: &ItemCatalog, quantity: u32) -> Self {
        let quantities = catalog
            .iter()
            .filter(|def| def.is_seed())
            .map(|def| (def.name.clone(), quantity))
            .collect();
        Self::from_catalog(name, catalog.iter().filter(|def| def.is_seed()), &quantities)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_at(&self, index: usize) -> Option<&StockEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut StockEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }
}

impl ItemStore for Ledger {
    fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    fn increase(&mut self, name: &str, amount: u32) {
        if let Some(entry) = self.get_mut(name) {
            entry.quantity = entry.quantity.saturating_add(amount);
        }
    }

    fn decrease(&mut self, name: &str, amount: u32) -> Option<u32> {
        let entry = self.get_mut(name)?;
        entry.quantity = entry.quantity.saturating_sub(amount);
        Some(entry.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::item::SEED_CATEGORY;

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            ItemDefinition::new("wheat_seed", SEED_CATEGORY, 10),
            ItemDefinition::new("hoe", "tool", 200),
            ItemDefinition::new("carrot_seed", SEED_CATEGORY, 15),
        ])
    }

    #[test]
    fn test_decrease_clamps_at_zero() {
        let mut ledger = Ledger::seed_shop("Seeds", &catalog(), 5);
        assert_eq!(ledger.decrease("wheat_seed", 3), Some(2));
        assert_eq!(ledger.decrease("wheat_seed", 10), Some(0));
        assert_eq!(ledger.quantity("wheat_seed"), Some(0));
        assert_eq!(ledger.decrease("wheat_seed", 0), Some(0));
    }

    #[test]
    fn test_decrease_missing_item_leaves_ledger_untouched() {
        let mut ledger = Ledger::seed_shop("Seeds", &catalog(), 5);
        let before = ledger.clone();
        assert_eq!(ledger.decrease("hoe", 1), None);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_increase_never_creates_entries() {
        let mut ledger = Ledger::seed_shop("Seeds", &catalog(), 5);
        ledger.increase("hoe", 4);
        assert!(!ledger.contains("hoe"));
        assert_eq!(ledger.len(), 2);

        ledger.increase("carrot_seed", 4);
        assert_eq!(ledger.quantity("carrot_seed"), Some(9));
    }

    #[test]
    fn test_increase_saturates() {
        let mut ledger = Ledger::seed_shop("Seeds", &catalog(), u32::MAX - 1);
        ledger.increase("wheat_seed", 10);
        assert_eq!(ledger.quantity("wheat_seed"), Some(u32::MAX));
    }

    #[test]
    fn test_seed_shop_keeps_catalog_order() {
        let ledger = Ledger::seed_shop("Seeds", &catalog(), SEED_SHOP_QUANTITY);
        let names: Vec<_> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["wheat_seed", "carrot_seed"]);
        assert!(ledger.entries().iter().all(|e| e.quantity == SEED_SHOP_QUANTITY));
        assert_eq!(ledger.entry_at(1).map(|e| e.buy_price), Some(15));
    }

    #[test]
    fn test_from_catalog_defaults_missing_quantities_to_zero() {
        let catalog = catalog();
        let quantities = HashMap::from([("hoe".to_string(), 1)]);
        let ledger = Ledger::from_catalog("Inventory", catalog.iter(), &quantities);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.quantity("hoe"), Some(1));
        assert_eq!(ledger.quantity("wheat_seed"), Some(0));
    }
}
