//! Shop screen configuration
//!
//! Loads the item catalog, shop stock, starting inventory and screen layout
//! from a TOML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::game::item::{ItemCatalog, ItemDefinition, SEED_CATEGORY};
use crate::game::ledger::{Ledger, SEED_SHOP_QUANTITY};
use crate::game::transaction::DEFAULT_PURCHASE_QUANTITY;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub default_quantity: u32,
    pub items: Vec<ItemDefinition>,
    pub shop: ShopSection,
    pub inventory: InventorySection,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopSection {
    pub name: String,
    /// Stock every listed item starts with
    pub stock_quantity: u32,
    /// Item categories this shop trades in
    pub categories: Vec<String>,
    /// Fraction of the buy price paid out when selling
    pub sell_multiplier: f32,
    /// Per-item overrides of `stock_quantity`
    pub stock: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventorySection {
    pub name: String,
    pub items: HashMap<String, u32>,
}

/// Screen geometry in pixels
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub slot_size: f32,
    pub padding: f32,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: "Seed Shop".to_string(),
            stock_quantity: SEED_SHOP_QUANTITY,
            categories: vec![SEED_CATEGORY.to_string()],
            sell_multiplier: 0.5,
            stock: HashMap::new(),
        }
    }
}

impl Default for InventorySection {
    fn default() -> Self {
        Self {
            name: "Inventory".to_string(),
            items: HashMap::new(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slot_size: 48.0,
            padding: 28.0,
            columns: 6,
            width: 1000.0,
            height: 600.0,
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        let items = vec![
            ItemDefinition::new("wheat_seed", SEED_CATEGORY, 10)
                .with_description("Grows into wheat in four days. Plant in spring or summer."),
            ItemDefinition::new("carrot_seed", SEED_CATEGORY, 15)
                .with_description("Crunchy roots, ready in three days."),
            ItemDefinition::new("tomato_seed", SEED_CATEGORY, 25)
                .with_description("Keeps producing after the first harvest."),
            ItemDefinition::new("hoe", "tool", 200).with_description("Tills soil."),
        ];
        let inventory_items = items
            .iter()
            .map(|item| (item.name.clone(), if item.is_seed() { 0 } else { 1 }))
            .collect();

        Self {
            default_quantity: DEFAULT_PURCHASE_QUANTITY,
            items,
            shop: ShopSection::default(),
            inventory: InventorySection {
                items: inventory_items,
                ..InventorySection::default()
            },
            layout: LayoutConfig::default(),
        }
    }
}

impl ShopConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ShopConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        log::info!(
            "Loaded shop config {:?}: {} items, shop '{}'",
            path,
            config.items.len(),
            config.shop.name
        );
        Ok(config)
    }

    /// Checks catalog names are unique and every stock or inventory line
    /// names a catalog item.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|other| other.name == item.name) {
                return Err(ConfigError::DuplicateItem {
                    name: item.name.clone(),
                });
            }
        }

        let known = |name: &str| self.items.iter().any(|item| item.name == name);
        if let Some(name) = self.shop.stock.keys().find(|name| !known(name)) {
            return Err(ConfigError::UnknownItem {
                name: name.clone(),
                section: "shop.stock",
            });
        }
        if let Some(name) = self.inventory.items.keys().find(|name| !known(name)) {
            return Err(ConfigError::UnknownItem {
                name: name.clone(),
                section: "inventory.items",
            });
        }
        Ok(())
    }

    pub fn catalog(&self) -> ItemCatalog {
        ItemCatalog::new(self.items.clone())
    }

    /// Shop ledger: every catalog item in one of the shop's categories
    pub fn shop_ledger(&self, catalog: &ItemCatalog) -> Ledger {
        let stocked: Vec<&ItemDefinition> = catalog
            .iter()
            .filter(|def| self.shop.categories.contains(&def.category))
            .collect();
        let quantities = stocked
            .iter()
            .map(|def| {
                let quantity = self
                    .shop
                    .stock
                    .get(&def.name)
                    .copied()
                    .unwrap_or(self.shop.stock_quantity);
                (def.name.clone(), quantity)
            })
            .collect();
        Ledger::from_catalog(&self.shop.name, stocked, &quantities)
    }

    /// Inventory ledger: only the items listed under `[inventory.items]`,
    /// in catalog order
    pub fn inventory_ledger(&self, catalog: &ItemCatalog) -> Ledger {
        let held = catalog
            .iter()
            .filter(|def| self.inventory.items.contains_key(&def.name));
        Ledger::from_catalog(&self.inventory.name, held, &self.inventory.items)
    }
}
