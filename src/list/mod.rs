//! Shopping list domain: items, the list reducer and the store that owns it.

mod error;
mod intent;
mod item;
mod quantity;
mod reducer;
mod state;
mod store;

pub use error::ListError;
pub use intent::ListIntent;
pub use item::{Item, ItemId, ItemMode};
pub use quantity::{parse_quantity, parse_quantity_or_default, DEFAULT_QUANTITY};
pub use reducer::ListReducer;
pub use state::ShoppingListState;
pub use store::{ListSnapshot, ShoppingListStore};
