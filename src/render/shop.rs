//! Shop screen composition

use macroquad::prelude::{Rect, Vec2};

use super::ShopRenderer;
use crate::game::{ItemStore, Ledger, Selection, ShopSession, Side};
use crate::ui::{GridLayout, ShopScreenLayout};

const TITLE_SIZE: f32 = 30.0;
const NAME_SIZE: f32 = 20.0;
const QUANTITY_SIZE: f32 = 18.0;
const DESCRIPTION_SIZE: f32 = 16.0;
const LINE_SPACING: f32 = 6.0;

/// Alpha of the active selection frame and of the hover frame
const SELECTED_ALPHA: u8 = 255;
const HOVER_ALPHA: u8 = 100;

/// Break `text` into lines no wider than `max_width`
pub fn wrap_text<R: ShopRenderer + ?Sized>(renderer: &R, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let test_line = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current_line, word)
        };

        if renderer.measure_text(&test_line, size) > max_width && !current_line.is_empty() {
            lines.push(std::mem::replace(&mut current_line, word.to_string()));
        } else {
            current_line = test_line;
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

fn slot_of(ledger: &Ledger, grid: &GridLayout, item_id: &str) -> Option<Rect> {
    ledger
        .entries()
        .iter()
        .position(|e| e.name == item_id)
        .map(|i| grid.slot_rect(i))
}

fn grid_for(layout: &ShopScreenLayout, side: Side) -> &GridLayout {
    match side {
        Side::Shop => &layout.shop_grid,
        Side::Inventory => &layout.inventory_grid,
    }
}

fn draw_section<R: ShopRenderer + ?Sized>(renderer: &mut R, ledger: &Ledger, area: Rect, grid: &GridLayout, scale: f32) {
    renderer.draw_text(ledger.name(), Vec2::new(area.x + 20.0, area.y + 10.0), TITLE_SIZE);
    for (i, entry) in ledger.entries().iter().enumerate() {
        renderer.draw_item_slot(grid.slot_rect(i), &entry.icon, scale, entry.quantity);
    }
}

fn draw_footer<R: ShopRenderer + ?Sized>(renderer: &mut R, session: &ShopSession, layout: &ShopScreenLayout) {
    let (Some(entry), Some(pending)) = (session.selected_entry(), session.pending()) else {
        return;
    };
    let footer = layout.footer;
    let padding = layout.inventory_grid.padding;

    renderer.draw_panel(footer);
    renderer.draw_text(&entry.label, Vec2::new(footer.x + padding, footer.y + padding), NAME_SIZE);

    // Total, right aligned
    let price_text = format!("${}", session.pending_total().unwrap_or(0));
    let price_width = renderer.measure_text(&price_text, NAME_SIZE);
    renderer.draw_text(
        &price_text,
        Vec2::new(footer.x + footer.w - padding - price_width, footer.y + padding),
        NAME_SIZE,
    );

    // Quantity between the arrows
    let quantity_rect = layout.quantity_rect();
    let quantity_text = pending.quantity.to_string();
    let quantity_width = renderer.measure_text(&quantity_text, QUANTITY_SIZE);
    renderer.draw_text(
        &quantity_text,
        Vec2::new(
            quantity_rect.x + quantity_rect.w * 0.5 - quantity_width * 0.5,
            quantity_rect.y + quantity_rect.h * 0.5 - QUANTITY_SIZE * 0.5,
        ),
        QUANTITY_SIZE,
    );

    for (button, label) in [(layout.decrease_button, "<"), (layout.increase_button, ">")] {
        renderer.draw_panel(button.rect);
        let width = renderer.measure_text(label, QUANTITY_SIZE);
        renderer.draw_text(
            label,
            Vec2::new(button.rect.center().x - width * 0.5, button.rect.center().y - QUANTITY_SIZE * 0.5),
            QUANTITY_SIZE,
        );
    }

    let commit = layout.commit_button.rect;
    renderer.draw_panel(commit);
    let label = pending.direction.label();
    let label_width = renderer.measure_text(label, NAME_SIZE);
    renderer.draw_text(
        label,
        Vec2::new(commit.center().x - label_width * 0.5, commit.center().y - NAME_SIZE * 0.5),
        NAME_SIZE,
    );

    // Description fills the space left of the controls
    let max_width = commit.x - footer.x - padding * 3.0;
    let mut y = footer.y + padding + NAME_SIZE + LINE_SPACING * 2.0;
    for line in wrap_text(&*renderer, &entry.description, DESCRIPTION_SIZE, max_width) {
        renderer.draw_text(&line, Vec2::new(footer.x + padding, y), DESCRIPTION_SIZE);
        y += DESCRIPTION_SIZE + LINE_SPACING;
    }
}

/// Draw the whole screen from session state
pub fn draw_shop_screen<R: ShopRenderer + ?Sized>(
    renderer: &mut R,
    session: &ShopSession,
    layout: &ShopScreenLayout,
    scale: f32,
) {
    renderer.draw_panel(layout.container);
    draw_section(renderer, session.inventory(), layout.inventory_area, &layout.inventory_grid, scale);
    draw_section(renderer, session.shop(), layout.shop_area, &layout.shop_grid, scale);

    if let Selection::Item { side, item_id } = session.selection() {
        if let Some(rect) = slot_of(session.ledger(*side), grid_for(layout, *side), item_id) {
            renderer.draw_selection_highlight(rect, SELECTED_ALPHA);
        }
        draw_footer(renderer, session, layout);
    }

    if let Some((side, item_id)) = session.tracker().hover_highlight() {
        if let Some(rect) = slot_of(session.ledger(side), grid_for(layout, side), item_id) {
            renderer.draw_selection_highlight(rect, HOVER_ALPHA);
        }
    }
}
