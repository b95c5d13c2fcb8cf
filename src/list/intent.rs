use crate::list::{Item, ItemId};
use crate::mvi::Intent;

/// Commands applied to the shopping list.
///
/// Quantities arrive already parsed; text handling lives in the store.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Append a new item. Ignored when the name is blank.
    Add { name: String, quantity: u32 },
    /// Put the item with `id` into edit mode and every other item out of it.
    BeginEdit { id: ItemId },
    /// End edit mode everywhere, then update the item with `id`.
    CommitEdit {
        id: ItemId,
        name: String,
        quantity: u32,
    },
    /// Remove the first item equal to this exact record.
    Delete { item: Item },
}

impl Intent for ListIntent {}
