pub mod layout;

pub use layout::{Button, GridLayout, ShopScreenLayout, UiElementId};
