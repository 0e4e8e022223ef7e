//! Shop and inventory trading screen
//!
//! The player browses a shop's stock next to their own inventory, picks an
//! item, dials in a quantity and commits the trade. `game` holds the stock
//! ledgers and the selection/transaction state machine, `input` maps pointer
//! and keyboard input onto it, and `render` draws it through the
//! `ShopRenderer` trait.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod ui;

pub use config::ShopConfig;
pub use error::{ConfigError, ShopError};
pub use game::{ShopCommand, ShopSession};
