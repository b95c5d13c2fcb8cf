use crate::list::{Item, ItemId, ItemMode, ListIntent, ShoppingListState, DEFAULT_QUANTITY};
use crate::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ShoppingListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Add { name, quantity } => {
                if name.trim().is_empty() {
                    return state;
                }
                let ShoppingListState { mut items, next_id } = state;
                items.push(Item::new(ItemId(next_id), name, at_least_one(quantity)));
                ShoppingListState {
                    items,
                    next_id: next_id + 1,
                }
            }
            ListIntent::BeginEdit { id } => {
                let ShoppingListState { mut items, next_id } = state;
                for item in &mut items {
                    item.mode = if item.id == id {
                        ItemMode::Editing
                    } else {
                        ItemMode::Viewing
                    };
                }
                ShoppingListState { items, next_id }
            }
            ListIntent::CommitEdit { id, name, quantity } => {
                let ShoppingListState { mut items, next_id } = state;
                for item in &mut items {
                    item.mode = ItemMode::Viewing;
                }
                if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                    item.name = name;
                    item.quantity = at_least_one(quantity);
                }
                ShoppingListState { items, next_id }
            }
            ListIntent::Delete { item } => {
                let ShoppingListState { mut items, next_id } = state;
                if let Some(index) = items.iter().position(|candidate| *candidate == item) {
                    items.remove(index);
                }
                ShoppingListState { items, next_id }
            }
        }
    }
}

/// Quantities are never zero; a zero from a typed caller becomes the default.
fn at_least_one(quantity: u32) -> u32 {
    if quantity == 0 {
        DEFAULT_QUANTITY
    } else {
        quantity
    }
}
