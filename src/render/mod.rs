pub mod common;
mod renderer;
mod shop;

use macroquad::prelude::{Rect, Vec2};

pub use renderer::MacroquadRenderer;
pub use shop::{draw_shop_screen, wrap_text};

/// Drawing surface the shop screen is composed onto. Owns no shop state;
/// everything it draws is handed to it by `draw_shop_screen`.
pub trait ShopRenderer {
    /// Slot background, item icon and stack count
    fn draw_item_slot(&mut self, rect: Rect, icon: &str, scale: f32, quantity: u32);

    /// Selection frame over a slot. 255 for the active selection, fainter for hover.
    fn draw_selection_highlight(&mut self, rect: Rect, alpha: u8);

    /// `position` is the top-left corner of the text
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32);

    fn measure_text(&self, text: &str, size: f32) -> f32;

    /// Background for panels and buttons
    fn draw_panel(&mut self, _rect: Rect) {}
}
