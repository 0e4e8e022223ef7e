//! Shop screen color palette

use macroquad::prelude::Color;

// Panel backgrounds
pub const PANEL_BG: Color = Color::new(0.933, 0.890, 0.780, 1.0);           // rgba(238, 227, 199, 255) parchment
pub const PANEL_LINE: Color = Color::new(0.812, 0.749, 0.608, 1.0);         // rgba(207, 191, 155, 255)
pub const BUTTON_BG: Color = Color::new(0.557, 0.424, 0.267, 1.0);          // rgba(142, 108, 68, 255)

// Slot colors
pub const SLOT_BG: Color = Color::new(0.855, 0.792, 0.659, 1.0);            // rgba(218, 202, 168, 255)
pub const SLOT_BORDER: Color = Color::new(0.557, 0.424, 0.267, 1.0);        // rgba(142, 108, 68, 255)
pub const SLOT_SELECTED_BORDER: Color = Color::new(0.855, 0.737, 0.502, 1.0); // rgba(218, 188, 128, 255)

// Text colors
pub const TEXT_DARK: Color = Color::new(0.149, 0.118, 0.086, 1.0);          // rgba(38, 30, 22, 255)
pub const TEXT_QUANTITY: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// Item category colors, used when an icon texture is missing
pub const CATEGORY_SEED: Color = Color::new(0.345, 0.620, 0.290, 1.0);      // rgba(88, 158, 74, 255)
pub const CATEGORY_OTHER: Color = Color::new(0.620, 0.620, 0.659, 1.0);     // rgba(158, 158, 168, 255)

pub const FRAME_THICKNESS: f32 = 2.0;
pub const HIGHLIGHT_THICKNESS: f32 = 4.0;
pub const QUANTITY_FONT_SIZE: f32 = 16.0;
