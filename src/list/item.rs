use serde::Serialize;
use std::fmt;

/// Identity of a list item. Assigned once at creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-item state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemMode {
    #[default]
    Viewing,
    Editing,
}

/// A single shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub mode: ItemMode,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            mode: ItemMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ItemMode::Editing
    }
}
