pub mod item;
pub mod ledger;
pub mod selection;
pub mod session;
pub mod transaction;

pub use item::{ItemCatalog, ItemDefinition, SEED_CATEGORY};
pub use ledger::{ItemStore, Ledger, StockEntry, SEED_SHOP_QUANTITY};
pub use selection::{Selection, SelectionTracker, Side};
pub use session::{ShopCommand, ShopSession};
pub use transaction::{Direction, PendingTransaction, Receipt, TransactionEngine, DEFAULT_PURCHASE_QUANTITY};
