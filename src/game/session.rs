//! One shop screen session: both ledgers plus selection and pending state

use super::ledger::{ItemStore, Ledger, StockEntry};
use super::selection::{Selection, SelectionTracker, Side};
use super::transaction::{Direction, PendingTransaction, Receipt, TransactionEngine};
use crate::config::ShopConfig;
use crate::error::ShopError;

/// Discrete control events, from buttons or keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    Commit,
    IncreaseQuantity,
    DecreaseQuantity,
    ClearSelection,
}

pub struct ShopSession {
    shop: Ledger,
    inventory: Ledger,
    tracker: SelectionTracker,
    engine: TransactionEngine,
    sell_multiplier: f32,
}

impl ShopSession {
    pub fn new(shop: Ledger, inventory: Ledger, default_quantity: u32, sell_multiplier: f32) -> Self {
        log::info!(
            "Opened shop '{}' ({} items) with {} inventory entries",
            shop.name(),
            shop.len(),
            inventory.len()
        );
        Self {
            shop,
            inventory,
            tracker: SelectionTracker::new(),
            engine: TransactionEngine::new(default_quantity),
            sell_multiplier,
        }
    }

    pub fn from_config(config: &ShopConfig) -> Self {
        let catalog = config.catalog();
        Self::new(
            config.shop_ledger(&catalog),
            config.inventory_ledger(&catalog),
            config.default_quantity,
            config.shop.sell_multiplier,
        )
    }

    pub fn shop(&self) -> &Ledger {
        &self.shop
    }

    pub fn inventory(&self) -> &Ledger {
        &self.inventory
    }

    pub fn ledger(&self, side: Side) -> &Ledger {
        match side {
            Side::Shop => &self.shop,
            Side::Inventory => &self.inventory,
        }
    }

    pub fn entry_at(&self, side: Side, index: usize) -> Option<&StockEntry> {
        self.ledger(side).entry_at(index)
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn selection(&self) -> &Selection {
        self.tracker.active()
    }

    pub fn pending(&self) -> Option<&PendingTransaction> {
        self.engine.pending()
    }

    /// Entry the active selection points at, if it still exists
    pub fn selected_entry(&self) -> Option<&StockEntry> {
        match self.tracker.active() {
            Selection::Item { side, item_id } => self.ledger(*side).get(item_id),
            Selection::None => None,
        }
    }

    /// Price per unit for the given direction. Selling pays out a fraction
    /// of the buy price.
    pub fn unit_price(&self, direction: Direction, entry: &StockEntry) -> u32 {
        match direction {
            Direction::Buy => entry.buy_price,
            Direction::Sell => (entry.buy_price as f32 * self.sell_multiplier).floor() as u32,
        }
    }

    /// Total for the pending transaction, for display only
    pub fn pending_total(&self) -> Option<u32> {
        let pending = self.engine.pending()?;
        let entry = self.ledger(pending.direction.source_side()).get(&pending.item_id)?;
        Some(pending.total_price(self.unit_price(pending.direction, entry)))
    }

    /// Select an item and start a fresh pending transaction for it
    pub fn select(&mut self, side: Side, item_id: &str) {
        self.tracker.set_selection(side, item_id);
        let source = match side {
            Side::Shop => &self.shop,
            Side::Inventory => &self.inventory,
        };
        self.engine.select(Direction::for_side(side), item_id, source);
    }

    pub fn clear_selection(&mut self) {
        self.tracker.clear_selection();
        self.engine.discard();
    }

    pub fn update_hover(&mut self, hit: Option<(Side, &str)>) {
        self.tracker.update_hover(hit);
    }

    /// Returns the commit outcome for `Commit`, `None` for the other commands
    pub fn apply(&mut self, command: ShopCommand) -> Option<Result<Receipt, ShopError>> {
        match command {
            ShopCommand::Commit => return Some(self.commit()),
            ShopCommand::IncreaseQuantity => {
                if let Some(direction) = self.engine.pending().map(|p| p.direction) {
                    let source = match direction {
                        Direction::Buy => &self.shop,
                        Direction::Sell => &self.inventory,
                    };
                    self.engine.increase(source);
                }
            }
            ShopCommand::DecreaseQuantity => self.engine.decrease(),
            ShopCommand::ClearSelection => self.clear_selection(),
        }
        None
    }

    pub fn commit(&mut self) -> Result<Receipt, ShopError> {
        let direction = self
            .engine
            .pending()
            .map(|p| p.direction)
            .ok_or(ShopError::NothingPending)?;

        let result = match direction {
            Direction::Buy => self.engine.commit(&mut self.shop, &mut self.inventory),
            Direction::Sell => self.engine.commit(&mut self.inventory, &mut self.shop),
        };
        if let Err(e) = &result {
            log::warn!("Rejected {:?} in '{}': {}", direction, self.shop.name(), e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::item::{ItemCatalog, ItemDefinition, SEED_CATEGORY};
    use std::collections::HashMap;

    fn session() -> ShopSession {
        let catalog = ItemCatalog::new(vec![
            ItemDefinition::new("wheat_seed", SEED_CATEGORY, 10),
            ItemDefinition::new("rare_seed", SEED_CATEGORY, 500),
            ItemDefinition::new("hoe", "tool", 200),
        ]);
        let mut shop = Ledger::seed_shop("Seed Shop", &catalog, 99);
        shop.decrease("rare_seed", 97);
        let inventory = Ledger::from_catalog(
            "Inventory",
            catalog.iter(),
            &HashMap::from([("hoe".to_string(), 1), ("wheat_seed".to_string(), 5)]),
        );
        ShopSession::new(shop, inventory, 1, 0.5)
    }

    #[test]
    fn test_buy_scenario() {
        let mut session = session();
        session.select(Side::Shop, "wheat_seed");
        assert_eq!(session.pending().map(|p| p.quantity), Some(1));

        session.apply(ShopCommand::IncreaseQuantity);
        session.apply(ShopCommand::IncreaseQuantity);
        assert_eq!(session.pending().map(|p| p.quantity), Some(3));
        assert_eq!(session.pending_total(), Some(30));

        let receipt = session.apply(ShopCommand::Commit).unwrap().unwrap();
        assert_eq!(receipt.quantity, 3);
        assert_eq!(session.shop().quantity("wheat_seed"), Some(96));
        assert_eq!(session.inventory().quantity("wheat_seed"), Some(8));
    }

    #[test]
    fn test_rare_seed_caps_at_stock() {
        let mut session = session();
        session.select(Side::Shop, "rare_seed");
        for _ in 0..3 {
            session.apply(ShopCommand::IncreaseQuantity);
        }
        assert_eq!(session.pending().map(|p| p.quantity), Some(2));
        session.commit().unwrap();
        assert_eq!(session.shop().quantity("rare_seed"), Some(0));
        assert_eq!(session.inventory().quantity("rare_seed"), Some(2));
    }

    #[test]
    fn test_inventory_click_discards_pending_buy() {
        let mut session = session();
        session.select(Side::Shop, "wheat_seed");
        session.apply(ShopCommand::IncreaseQuantity);
        session.apply(ShopCommand::IncreaseQuantity);

        session.select(Side::Inventory, "hoe");
        assert_eq!(session.selection(), &Selection::item(Side::Inventory, "hoe"));
        let pending = session.pending().unwrap();
        assert_eq!(pending.direction, Direction::Sell);
        assert_eq!(pending.quantity, 1);

        session.select(Side::Shop, "wheat_seed");
        assert_eq!(session.pending().map(|p| p.quantity), Some(1));
    }

    #[test]
    fn test_sell_uses_multiplier_and_moves_stock_back() {
        let mut session = session();
        session.select(Side::Inventory, "wheat_seed");
        session.apply(ShopCommand::IncreaseQuantity);
        assert_eq!(session.pending_total(), Some(10));

        session.commit().unwrap();
        assert_eq!(session.inventory().quantity("wheat_seed"), Some(3));
        assert_eq!(session.shop().quantity("wheat_seed"), Some(101));
    }

    #[test]
    fn test_rejected_commit_leaves_ledgers_alone() {
        let mut session = session();
        let (shop, inventory) = (session.shop().clone(), session.inventory().clone());

        session.select(Side::Inventory, "hoe");
        let result = session.apply(ShopCommand::Commit).unwrap();
        assert_eq!(result, Err(ShopError::NotFound { item_id: "hoe".to_string() }));
        assert_eq!(session.shop(), &shop);
        assert_eq!(session.inventory(), &inventory);
        assert!(session.pending().is_some());
    }

    #[test]
    fn test_clear_selection_drops_pending() {
        let mut session = session();
        session.select(Side::Shop, "wheat_seed");
        assert!(session.selected_entry().is_some());
        assert_eq!(session.apply(ShopCommand::ClearSelection), None);
        assert!(session.selection().is_none());
        assert!(session.pending().is_none());
        assert_eq!(session.commit(), Err(ShopError::NothingPending));
    }
}
