//! Shop screen geometry and slot hit testing

use macroquad::prelude::{Rect, Vec2};

use crate::config::LayoutConfig;

/// Height reserved above each grid for its title
const SECTION_HEADER: f32 = 40.0;
const FOOTER_HEIGHT: f32 = 150.0;
const BUTTON_WIDTH: f32 = 150.0;
const BUTTON_HEIGHT: f32 = 40.0;
const ARROW_SIZE: f32 = 32.0;

/// Identifier for a clickable element on the shop screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElementId {
    InventorySlot(usize),
    ShopSlot(usize),
    CommitButton,
    IncreaseButton,
    DecreaseButton,
}

/// Fixed-size slot grid. Slots are laid out left to right, top to bottom,
/// with `padding` of dead space after each slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub origin: Vec2,
    pub slot_size: f32,
    pub padding: f32,
    pub columns: usize,
}

impl GridLayout {
    pub fn new(origin: Vec2, slot_size: f32, padding: f32, columns: usize) -> Self {
        Self {
            origin,
            slot_size,
            padding,
            columns: columns.max(1),
        }
    }

    fn stride(&self) -> f32 {
        self.slot_size + self.padding
    }

    pub fn slot_rect(&self, index: usize) -> Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        Rect::new(
            self.origin.x + col as f32 * self.stride(),
            self.origin.y + row as f32 * self.stride(),
            self.slot_size,
            self.slot_size,
        )
    }

    /// Slot index under `point`, if it lands inside one of the first
    /// `entry_count` slots. Gaps between slots never match.
    pub fn resolve_slot(&self, point: Vec2, entry_count: usize) -> Option<usize> {
        let stride = self.stride();
        if stride <= 0.0 {
            return None;
        }
        let col = ((point.x - self.origin.x) / stride).floor();
        let row = ((point.y - self.origin.y) / stride).floor();
        if col < 0.0 || row < 0.0 || col >= self.columns as f32 {
            return None;
        }

        // Rows past the last entry can't match; also keeps the index math in range
        let rows = entry_count.div_ceil(self.columns);
        if row >= rows as f32 {
            return None;
        }

        let index = row as usize * self.columns + col as usize;
        if index >= entry_count {
            return None;
        }
        self.slot_rect(index).contains(point).then_some(index)
    }
}

/// A clickable control. Holds no pressed state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Whether a click at `point` activates this button this tick
    pub fn activated(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Geometry of the whole shop screen: two grids side by side, a footer
/// with the transaction controls underneath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopScreenLayout {
    pub container: Rect,
    pub inventory_area: Rect,
    pub shop_area: Rect,
    pub footer: Rect,
    pub inventory_grid: GridLayout,
    pub shop_grid: GridLayout,
    pub commit_button: Button,
    pub increase_button: Button,
    pub decrease_button: Button,
}

impl ShopScreenLayout {
    /// Center a `config.width` x `config.height` panel on the screen
    pub fn new(screen_size: Vec2, config: &LayoutConfig) -> Self {
        let padding = config.padding;
        let slot_size = config.slot_size;
        let columns = config.columns.max(1);

        let container = Rect::new(
            screen_size.x * 0.5 - config.width * 0.5,
            screen_size.y * 0.5 - config.height * 0.5,
            config.width,
            config.height,
        );

        let section_width = (padding + slot_size) * columns as f32;
        let grid_height = container.h - FOOTER_HEIGHT;
        let inventory_area = Rect::new(container.x, container.y, section_width, grid_height);
        let shop_area = Rect::new(
            container.x + container.w - section_width - padding,
            container.y,
            section_width,
            grid_height,
        );
        let footer = Rect::new(
            container.x,
            container.y + container.h - FOOTER_HEIGHT,
            container.w,
            FOOTER_HEIGHT,
        );

        let grid_origin = |area: Rect| Vec2::new(area.x + padding, area.y + padding + SECTION_HEADER);
        let inventory_grid = GridLayout::new(grid_origin(inventory_area), slot_size, padding, columns);
        let shop_grid = GridLayout::new(grid_origin(shop_area), slot_size, padding, columns);

        let commit = Rect::new(
            footer.x + footer.w - padding - BUTTON_WIDTH,
            footer.y + footer.h - padding * 0.5 - BUTTON_HEIGHT,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
        let arrow_y = commit.y - padding * 0.25 - ARROW_SIZE;
        let increase = Rect::new(commit.x + commit.w - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE);
        let decrease = Rect::new(commit.x, arrow_y, ARROW_SIZE, ARROW_SIZE);

        Self {
            container,
            inventory_area,
            shop_area,
            footer,
            inventory_grid,
            shop_grid,
            commit_button: Button::new(commit),
            increase_button: Button::new(increase),
            decrease_button: Button::new(decrease),
        }
    }

    /// Box the pending quantity is shown in, between the arrow buttons
    pub fn quantity_rect(&self) -> Rect {
        let commit = self.commit_button.rect;
        let arrows = self.increase_button.rect;
        Rect::new(commit.x + commit.w * 0.5 - 35.0, arrows.y, 70.0, arrows.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    fn grid() -> GridLayout {
        // 64px slots with 28px gaps, 6 per row
        GridLayout::new(vec2(100.0, 50.0), 64.0, 28.0, 6)
    }

    #[test]
    fn test_slot_rect_positions() {
        let grid = grid();
        assert_eq!(grid.slot_rect(0), Rect::new(100.0, 50.0, 64.0, 64.0));
        assert_eq!(grid.slot_rect(7), Rect::new(192.0, 142.0, 64.0, 64.0));
    }

    #[test]
    fn test_resolve_slot_inside_slots() {
        let grid = grid();
        assert_eq!(grid.resolve_slot(vec2(110.0, 60.0), 10), Some(0));
        assert_eq!(grid.resolve_slot(vec2(200.0, 150.0), 10), Some(7));
        assert_eq!(grid.resolve_slot(vec2(100.0 + 5.0 * 92.0 + 1.0, 51.0), 10), Some(5));
    }

    #[test]
    fn test_resolve_slot_padding_is_dead_zone() {
        let grid = grid();
        // Right of slot 0, inside the gap before slot 1
        assert_eq!(grid.resolve_slot(vec2(170.0, 60.0), 10), None);
        // Below slot 0
        assert_eq!(grid.resolve_slot(vec2(110.0, 120.0), 10), None);
    }

    #[test]
    fn test_resolve_slot_out_of_range() {
        let grid = grid();
        assert_eq!(grid.resolve_slot(vec2(90.0, 60.0), 10), None);
        assert_eq!(grid.resolve_slot(vec2(110.0, 40.0), 10), None);
        // Past the last column
        assert_eq!(grid.resolve_slot(vec2(100.0 + 6.0 * 92.0 + 1.0, 60.0), 10), None);
        // Slot exists in the grid but has no entry
        assert_eq!(grid.resolve_slot(vec2(200.0, 150.0), 7), None);
        assert_eq!(grid.resolve_slot(vec2(110.0, 60.0), 0), None);
    }

    #[test]
    fn test_resolve_slot_far_away_pointer() {
        let grid = GridLayout::new(vec2(0.0, 0.0), 48.0, 28.0, 6);
        assert_eq!(grid.resolve_slot(vec2(10.0, 1.0e30), 10), None);
        assert_eq!(grid.resolve_slot(vec2(1.0e30, 10.0), 10), None);
        assert_eq!(grid.resolve_slot(vec2(10.0, f32::INFINITY), 10), None);
        assert_eq!(grid.resolve_slot(vec2(f32::NAN, 10.0), 10), None);
        assert_eq!(grid.resolve_slot(vec2(10.0, 10.0), 10), Some(0));
    }

    #[test]
    fn test_button_activation_is_pure() {
        let button = Button::new(Rect::new(10.0, 10.0, 150.0, 40.0));
        assert!(button.activated(vec2(20.0, 20.0)));
        assert!(button.activated(vec2(20.0, 20.0)));
        assert!(!button.activated(vec2(5.0, 20.0)));
    }

    #[test]
    fn test_screen_layout_has_disjoint_regions() {
        let layout = ShopScreenLayout::new(vec2(1280.0, 720.0), &LayoutConfig::default());
        assert_eq!(layout.container, Rect::new(140.0, 60.0, 1000.0, 600.0));
        assert!(!layout.inventory_area.overlaps(&layout.shop_area));
        assert!(layout.container.contains(layout.commit_button.rect.point()));
        assert!(!layout.increase_button.rect.overlaps(&layout.decrease_button.rect));
        assert!(!layout.commit_button.rect.overlaps(&layout.increase_button.rect));
        assert_eq!(layout.inventory_grid.columns, 6);
    }
}
