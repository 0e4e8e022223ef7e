//! Active selection and hover tracking, independent of rendering

/// Which grid an item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Shop,
    Inventory,
}

/// Either nothing, or an item on one side. Side and id are always set together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Item { side: Side, item_id: String },
}

impl Selection {
    pub fn item(side: Side, item_id: &str) -> Self {
        Selection::Item {
            side,
            item_id: item_id.to_string(),
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Selection::None => None,
            Selection::Item { side, .. } => Some(*side),
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Item { item_id, .. } => Some(item_id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    active: Selection,
    hover: Selection,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &Selection {
        &self.active
    }

    pub fn hover(&self) -> &Selection {
        &self.hover
    }

    pub fn set_selection(&mut self, side: Side, item_id: &str) {
        self.active = Selection::item(side, item_id);
    }

    pub fn clear_selection(&mut self) {
        self.active = Selection::None;
    }

    /// Recomputed every pointer move; `None` when the pointer is over no slot
    pub fn update_hover(&mut self, hit: Option<(Side, &str)>) {
        self.hover = match hit {
            Some((side, item_id)) => Selection::item(side, item_id),
            None => Selection::None,
        };
    }

    /// Compares the item id only, ignoring the side
    pub fn is_selected(&self, item_id: &str) -> bool {
        self.active.item_id() == Some(item_id)
    }

    /// Side-qualified comparison, so a shop entry and an inventory entry
    /// sharing a name are told apart
    pub fn is_selected_on(&self, side: Side, item_id: &str) -> bool {
        self.active.side() == Some(side) && self.is_selected(item_id)
    }

    /// Hover worth highlighting: set, and not the slot already selected
    pub fn hover_highlight(&self) -> Option<(Side, &str)> {
        match &self.hover {
            Selection::Item { side, item_id } if !self.is_selected_on(*side, item_id) => {
                Some((*side, item_id.as_str()))
            }
            _ => None,
        }
    }
}
