use serde::{Deserialize, Serialize};

/// Category tag for seeds, the only goods the seed shop stocks
pub const SEED_CATEGORY: &str = "seed";

/// Item definition loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    /// Texture key; defaults to the item name
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub buy_price: u32,
    #[serde(default)]
    pub category: String,
}

impl ItemDefinition {
    pub fn new(name: &str, category: &str, buy_price: u32) -> Self {
        Self {
            name: name.to_string(),
            display_name: String::new(),
            icon: String::new(),
            description: String::new(),
            buy_price,
            category: category.to_string(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Name shown in the footer, falling back to the key
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    pub fn icon_key(&self) -> &str {
        if self.icon.is_empty() {
            &self.name
        } else {
            &self.icon
        }
    }

    pub fn is_seed(&self) -> bool {
        self.category == SEED_CATEGORY
    }
}

/// Ordered item catalog. Catalog order decides shop slot order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        log::info!("Loaded {} item definitions", items.len());
        Self { items }
    }

    /// Get item definition by name
    pub fn get(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
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

    #[test]
    fn test_label_and_icon_fall_back_to_name() {
        let item = ItemDefinition::new("wheat_seed", SEED_CATEGORY, 10);
        assert_eq!(item.label(), "wheat_seed");
        assert_eq!(item.icon_key(), "wheat_seed");
        assert!(item.is_seed());

        let named = ItemDefinition {
            display_name: "Wheat Seed".to_string(),
            icon: "seeds/wheat".to_string(),
            ..item
        };
        assert_eq!(named.label(), "Wheat Seed");
        assert_eq!(named.icon_key(), "seeds/wheat");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ItemCatalog::new(vec![
            ItemDefinition::new("wheat_seed", SEED_CATEGORY, 10),
            ItemDefinition::new("hoe", "tool", 200),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("hoe").map(|i| i.buy_price), Some(200));
        assert!(catalog.get("axe").is_none());
    }
}
