//! Per-frame mouse and keyboard polling

use macroquad::prelude::*;

use super::router::InputRouter;
use crate::error::ShopError;
use crate::game::{Receipt, ShopCommand, ShopSession};

/// Polls macroquad input once per frame and feeds it through the router
pub struct InputHandler {
    // Hover is only recomputed when the pointer actually moves
    last_pointer: Option<Vec2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Keyboard shortcuts for the footer controls
    fn key_command() -> Option<ShopCommand> {
        if is_key_pressed(KeyCode::Enter) {
            Some(ShopCommand::Commit)
        } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::Up) {
            Some(ShopCommand::IncreaseQuantity)
        } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::Down) {
            Some(ShopCommand::DecreaseQuantity)
        } else if is_key_pressed(KeyCode::Escape) {
            Some(ShopCommand::ClearSelection)
        } else {
            None
        }
    }

    /// Returns the outcome of any commit triggered this frame
    pub fn process(&mut self, router: &InputRouter, session: &mut ShopSession) -> Option<Result<Receipt, ShopError>> {
        let pointer = Vec2::from(mouse_position());

        if self.last_pointer != Some(pointer) {
            router.pointer_moved(pointer, session);
            self.last_pointer = Some(pointer);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(outcome) = router.click(pointer, session) {
                return Some(outcome);
            }
        }

        Self::key_command().and_then(|command| session.apply(command))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
