//! Macroquad implementation of the shop renderer

use std::collections::HashMap;
use std::path::Path;

use macroquad::prelude::*;

use super::common::*;
use super::ShopRenderer;
use crate::game::ItemCatalog;

/// Fallback icon size when an item has no texture
const PLACEHOLDER_ICON: f32 = 32.0;

/// Draws the shop screen with macroquad
pub struct MacroquadRenderer {
    item_sprites: HashMap<String, Texture2D>,
    fallback_colors: HashMap<String, Color>,
}

impl MacroquadRenderer {
    /// Load `<icon>.png` from `sprite_dir` for every catalog item. Missing
    /// sprites fall back to a colored square.
    pub async fn new(catalog: &ItemCatalog, sprite_dir: &Path) -> Self {
        let mut item_sprites = HashMap::new();
        let mut fallback_colors = HashMap::new();

        for item in catalog.iter() {
            let key = item.icon_key().to_string();
            let color = if item.is_seed() { CATEGORY_SEED } else { CATEGORY_OTHER };
            fallback_colors.insert(key.clone(), color);

            if item_sprites.contains_key(&key) {
                continue;
            }
            let path = sprite_dir.join(format!("{}.png", key));
            let path_str = path.to_string_lossy();
            match load_texture(&path_str).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    log::debug!("Loaded item sprite: {}", key);
                    item_sprites.insert(key, tex);
                }
                Err(e) => {
                    log::warn!("Failed to load item sprite {}: {}", path_str, e);
                }
            }
        }
        log::info!("Loaded {} item sprites", item_sprites.len());

        Self {
            item_sprites,
            fallback_colors,
        }
    }

    fn draw_icon(&self, rect: Rect, icon: &str, scale: f32) {
        if let Some(texture) = self.item_sprites.get(icon) {
            let w = texture.width() * scale;
            let h = texture.height() * scale;
            draw_texture_ex(
                texture,
                rect.x + (rect.w - w) / 2.0,
                rect.y + (rect.h - h) / 2.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(w, h)),
                    ..Default::default()
                },
            );
        } else {
            let color = self.fallback_colors.get(icon).copied().unwrap_or(CATEGORY_OTHER);
            let size = PLACEHOLDER_ICON.min(rect.w);
            draw_rectangle(
                rect.x + (rect.w - size) / 2.0,
                rect.y + (rect.h - size) / 2.0,
                size,
                size,
                color,
            );
        }
    }
}

impl ShopRenderer for MacroquadRenderer {
    fn draw_item_slot(&mut self, rect: Rect, icon: &str, scale: f32, quantity: u32) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, SLOT_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, FRAME_THICKNESS, SLOT_BORDER);
        self.draw_icon(rect, icon, scale);

        // Stack count in the bottom-right corner, with a drop shadow
        let text = quantity.to_string();
        let width = self.measure_text(&text, QUANTITY_FONT_SIZE);
        let x = rect.x + rect.w - width - 3.0;
        let y = rect.y + rect.h - 4.0;
        draw_text(&text, x + 1.0, y + 1.0, QUANTITY_FONT_SIZE, TEXT_DARK);
        draw_text(&text, x, y, QUANTITY_FONT_SIZE, TEXT_QUANTITY);
    }

    fn draw_selection_highlight(&mut self, rect: Rect, alpha: u8) {
        let color = Color {
            a: alpha as f32 / 255.0,
            ..SLOT_SELECTED_BORDER
        };
        let inset = HIGHLIGHT_THICKNESS / 2.0;
        draw_rectangle_lines(
            rect.x - inset,
            rect.y - inset,
            rect.w + HIGHLIGHT_THICKNESS,
            rect.h + HIGHLIGHT_THICKNESS,
            HIGHLIGHT_THICKNESS,
            color,
        );
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32) {
        // macroquad places text on its baseline
        draw_text(text, position.x, position.y + size * 0.8, size, TEXT_DARK);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        measure_text(text, None, size as u16, 1.0).width
    }

    fn draw_panel(&mut self, rect: Rect) {
        let bg = if rect.w > 200.0 { PANEL_BG } else { BUTTON_BG };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, FRAME_THICKNESS, PANEL_LINE);
    }
}
