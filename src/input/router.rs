//! Maps pointer positions onto slots and controls and drives the session

use macroquad::prelude::Vec2;

use crate::error::ShopError;
use crate::game::{Receipt, ShopCommand, ShopSession, Side};
use crate::ui::{ShopScreenLayout, UiElementId};

pub struct InputRouter {
    layout: ShopScreenLayout,
}

impl InputRouter {
    pub fn new(layout: ShopScreenLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ShopScreenLayout {
        &self.layout
    }

    /// Recompute geometry, e.g. after a window resize
    pub fn set_layout(&mut self, layout: ShopScreenLayout) {
        self.layout = layout;
    }

    /// First element under `point`: inventory slots, then shop slots, then
    /// the commit, increase and decrease buttons.
    pub fn hit_test(&self, point: Vec2, session: &ShopSession) -> Option<UiElementId> {
        if let Some(i) = self.layout.inventory_grid.resolve_slot(point, session.inventory().len()) {
            return Some(UiElementId::InventorySlot(i));
        }
        if let Some(i) = self.layout.shop_grid.resolve_slot(point, session.shop().len()) {
            return Some(UiElementId::ShopSlot(i));
        }
        if self.layout.commit_button.activated(point) {
            return Some(UiElementId::CommitButton);
        }
        if self.layout.increase_button.activated(point) {
            return Some(UiElementId::IncreaseButton);
        }
        if self.layout.decrease_button.activated(point) {
            return Some(UiElementId::DecreaseButton);
        }
        None
    }

    fn slot_item(&self, point: Vec2, session: &ShopSession) -> Option<(Side, String)> {
        let (side, index) = match self.hit_test(point, session)? {
            UiElementId::InventorySlot(i) => (Side::Inventory, i),
            UiElementId::ShopSlot(i) => (Side::Shop, i),
            _ => return None,
        };
        session.entry_at(side, index).map(|entry| (side, entry.name.clone()))
    }

    /// Hover follows the pointer; anything but a slot clears it
    pub fn pointer_moved(&self, point: Vec2, session: &mut ShopSession) {
        let hit = self.slot_item(point, session);
        session.update_hover(hit.as_ref().map(|(side, name)| (*side, name.as_str())));
    }

    /// Primary click. Returns the commit outcome when the commit button was hit.
    pub fn click(&self, point: Vec2, session: &mut ShopSession) -> Option<Result<Receipt, ShopError>> {
        let command = match self.hit_test(point, session)? {
            UiElementId::InventorySlot(_) | UiElementId::ShopSlot(_) => {
                if let Some((side, name)) = self.slot_item(point, session) {
                    log::debug!("Selected {:?} item '{}'", side, name);
                    session.select(side, &name);
                }
                return None;
            }
            UiElementId::CommitButton => ShopCommand::Commit,
            UiElementId::IncreaseButton => ShopCommand::IncreaseQuantity,
            UiElementId::DecreaseButton => ShopCommand::DecreaseQuantity,
        };
        session.apply(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, ShopConfig};
    use crate::game::{ItemStore, Selection};
    use macroquad::prelude::vec2;

    fn setup() -> (InputRouter, ShopSession) {
        let config = ShopConfig::default();
        let layout = ShopScreenLayout::new(vec2(1280.0, 720.0), &LayoutConfig::default());
        (InputRouter::new(layout), ShopSession::from_config(&config))
    }

    fn shop_slot(router: &InputRouter, index: usize) -> Vec2 {
        router.layout().shop_grid.slot_rect(index).center()
    }

    fn inventory_slot(router: &InputRouter, index: usize) -> Vec2 {
        router.layout().inventory_grid.slot_rect(index).center()
    }

    #[test]
    fn test_hit_test_order() {
        let (router, session) = setup();
        assert_eq!(
            router.hit_test(inventory_slot(&router, 3), &session),
            Some(UiElementId::InventorySlot(3))
        );
        assert_eq!(router.hit_test(shop_slot(&router, 1), &session), Some(UiElementId::ShopSlot(1)));
        // Shop has three seeds, so the fourth slot is empty space
        assert_eq!(router.hit_test(shop_slot(&router, 3), &session), None);
        assert_eq!(
            router.hit_test(router.layout().commit_button.rect.center(), &session),
            Some(UiElementId::CommitButton)
        );
        assert_eq!(
            router.hit_test(router.layout().decrease_button.rect.center(), &session),
            Some(UiElementId::DecreaseButton)
        );
        assert_eq!(router.hit_test(vec2(0.0, 0.0), &session), None);
    }

    #[test]
    fn test_hover_is_idempotent_and_clears() {
        let (router, mut session) = setup();
        let point = shop_slot(&router, 0);

        router.pointer_moved(point, &mut session);
        let first = session.tracker().hover().clone();
        router.pointer_moved(point, &mut session);
        assert_eq!(session.tracker().hover(), &first);
        assert_eq!(first, Selection::item(Side::Shop, "wheat_seed"));
        assert!(session.selection().is_none());

        router.pointer_moved(router.layout().commit_button.rect.center(), &mut session);
        assert!(session.tracker().hover().is_none());
    }

    #[test]
    fn test_click_through_a_purchase() {
        let (router, mut session) = setup();
        let layout = *router.layout();

        assert!(router.click(shop_slot(&router, 0), &mut session).is_none());
        assert_eq!(session.selection(), &Selection::item(Side::Shop, "wheat_seed"));

        router.click(layout.increase_button.rect.center(), &mut session);
        router.click(layout.increase_button.rect.center(), &mut session);
        router.click(layout.increase_button.rect.center(), &mut session);
        router.click(layout.decrease_button.rect.center(), &mut session);
        assert_eq!(session.pending().map(|p| p.quantity), Some(3));

        let receipt = router.click(layout.commit_button.rect.center(), &mut session).unwrap().unwrap();
        assert_eq!(receipt.quantity, 3);
        assert_eq!(session.shop().quantity("wheat_seed"), Some(96));
        assert_eq!(session.inventory().quantity("wheat_seed"), Some(3));
    }

    #[test]
    fn test_click_on_gap_changes_nothing() {
        let (router, mut session) = setup();
        router.click(shop_slot(&router, 0), &mut session);

        let slot = router.layout().shop_grid.slot_rect(0);
        let gap = vec2(slot.right() + 2.0, slot.center().y);
        assert!(router.click(gap, &mut session).is_none());
        assert_eq!(session.selection(), &Selection::item(Side::Shop, "wheat_seed"));
    }

    #[test]
    fn test_commit_click_without_selection_is_rejected() {
        let (router, mut session) = setup();
        let result = router.click(router.layout().commit_button.rect.center(), &mut session);
        assert_eq!(result, Some(Err(ShopError::NothingPending)));
    }
}
