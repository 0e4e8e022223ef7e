//! Pending transaction state machine and the two-ledger transfer
//!
//! The engine never knows which ledger is the shop: the caller passes the
//! source and destination stores for the transaction's direction. Buying moves
//! shop stock into the inventory, selling moves it back.

use super::ledger::ItemStore;
use super::selection::Side;
use crate::error::ShopError;

/// Quantity a new pending transaction starts at
pub const DEFAULT_PURCHASE_QUANTITY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Shop items are bought, inventory items are sold
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Shop => Direction::Buy,
            Side::Inventory => Direction::Sell,
        }
    }

    pub fn source_side(&self) -> Side {
        match self {
            Direction::Buy => Side::Shop,
            Direction::Sell => Side::Inventory,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub direction: Direction,
    pub item_id: String,
    pub quantity: u32,
}

impl PendingTransaction {
    pub fn total_price(&self, unit_price: u32) -> u32 {
        unit_price.saturating_mul(self.quantity)
    }
}

/// Outcome of a successful commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub direction: Direction,
    pub item_id: String,
    pub quantity: u32,
    pub source_remaining: u32,
    pub destination_quantity: u32,
}

#[derive(Debug, Clone)]
pub struct TransactionEngine {
    pending: Option<PendingTransaction>,
    default_quantity: u32,
}

impl TransactionEngine {
    pub fn new(default_quantity: u32) -> Self {
        Self {
            pending: None,
            default_quantity: default_quantity.max(1),
        }
    }

    pub fn pending(&self) -> Option<&PendingTransaction> {
        self.pending.as_ref()
    }

    pub fn default_quantity(&self) -> u32 {
        self.default_quantity
    }

    /// Default quantity clamped into [1, available]. Zero-stock items still
    /// get 1 so they can be viewed; commit rejects them.
    fn initial_quantity(&self, available: u32) -> u32 {
        self.default_quantity.min(available).max(1)
    }

    /// Start a fresh pending transaction, dropping any uncommitted quantity
    pub fn select<S: ItemStore + ?Sized>(&mut self, direction: Direction, item_id: &str, source: &S) {
        let available = source.quantity(item_id).unwrap_or(0);
        let quantity = self.initial_quantity(available);
        log::debug!("{:?} pending for '{}' at quantity {}", direction, item_id, quantity);
        self.pending = Some(PendingTransaction {
            direction,
            item_id: item_id.to_string(),
            quantity,
        });
    }

    pub fn discard(&mut self) {
        self.pending = None;
    }

    /// Step quantity up, capped at what the source holds
    pub fn increase<S: ItemStore + ?Sized>(&mut self, source: &S) {
        if let Some(pending) = &mut self.pending {
            let available = source.quantity(&pending.item_id).unwrap_or(0);
            if pending.quantity < available {
                pending.quantity += 1;
            }
        }
    }

    /// Step quantity down, never below 1
    pub fn decrease(&mut self) {
        if let Some(pending) = &mut self.pending {
            if pending.quantity > 1 {
                pending.quantity -= 1;
            }
        }
    }

    /// Overwrite the pending quantity as typed. Not clamped; commit validates it.
    pub fn set_quantity(&mut self, quantity: u32) {
        if let Some(pending) = &mut self.pending {
            pending.quantity = quantity;
        }
    }

    /// Apply the pending transfer from `source` to `destination`.
    ///
    /// Every check runs before the first write, and both writes happen under
    /// the same pair of exclusive borrows, so either both ledgers change or
    /// neither does. On rejection the pending transaction is kept for a retry.
    pub fn commit<S, D>(&mut self, source: &mut S, destination: &mut D) -> Result<Receipt, ShopError>
    where
        S: ItemStore + ?Sized,
        D: ItemStore + ?Sized,
    {
        let pending = self.pending.as_ref().ok_or(ShopError::NothingPending)?;
        let item_id = pending.item_id.clone();
        let quantity = pending.quantity;
        let direction = pending.direction;

        let available = source
            .quantity(&item_id)
            .ok_or_else(|| ShopError::NotFound { item_id: item_id.clone() })?;
        let held = destination
            .quantity(&item_id)
            .ok_or_else(|| ShopError::NotFound { item_id: item_id.clone() })?;
        if quantity < 1 {
            return Err(ShopError::InvalidQuantity { quantity });
        }
        if quantity > available {
            return Err(ShopError::InsufficientStock {
                item_id,
                requested: quantity,
                available,
            });
        }
        if held.checked_add(quantity).is_none() {
            return Err(ShopError::CapacityExceeded {
                item_id,
                requested: quantity,
                held,
            });
        }

        let source_remaining = source
            .decrease(&item_id, quantity)
            .ok_or_else(|| ShopError::NotFound { item_id: item_id.clone() })?;
        destination.increase(&item_id, quantity);
        let destination_quantity = destination.quantity(&item_id).unwrap_or(0);

        log::info!(
            "{:?} {} x '{}' ({} left at source, {} at destination)",
            direction,
            quantity,
            item_id,
            source_remaining,
            destination_quantity
        );

        let reset = self.initial_quantity(source_remaining);
        if let Some(pending) = &mut self.pending {
            pending.quantity = reset;
        }

        Ok(Receipt {
            direction,
            item_id,
            quantity,
            source_remaining,
            destination_quantity,
        })
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PURCHASE_QUANTITY)
    }
}
