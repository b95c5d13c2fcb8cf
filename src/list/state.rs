use crate::list::Item;
use crate::mvi::UiState;

/// Authoritative list state: ordered items plus the id counter.
///
/// Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListState {
    pub items: Vec<Item>,
    /// Id handed to the next added item. Only ever grows.
    pub next_id: u64,
}

impl Default for ShoppingListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl UiState for ShoppingListState {}
