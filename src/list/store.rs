//! State-owning store for the shopping list.
//!
//! The store is the only writer. Every intent runs through [`ListReducer`]
//! and, when the resulting items differ, a fresh [`ListSnapshot`] is
//! published on a `watch` channel for renderers to pick up.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::AddQuantityPolicy;
use crate::list::{
    parse_quantity, parse_quantity_or_default, Item, ItemId, ListError, ListIntent, ListReducer,
    ShoppingListState, DEFAULT_QUANTITY,
};
use crate::mvi::Reducer;

/// Immutable view of the list handed to the renderer.
///
/// Cloning is cheap; the items live behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSnapshot {
    items: Arc<Vec<Item>>,
}

impl ListSnapshot {
    fn new(items: &[Item]) -> Self {
        Self {
            items: Arc::new(items.to_vec()),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct ShoppingListStore {
    state: ShoppingListState,
    add_policy: AddQuantityPolicy,
    publisher: watch::Sender<ListSnapshot>,
}

impl Default for ShoppingListStore {
    fn default() -> Self {
        Self::new(AddQuantityPolicy::default())
    }
}

impl ShoppingListStore {
    pub fn new(add_policy: AddQuantityPolicy) -> Self {
        let (publisher, _) = watch::channel(ListSnapshot::default());
        Self {
            state: ShoppingListState::default(),
            add_policy,
            publisher,
        }
    }

    pub fn state(&self) -> &ShoppingListState {
        &self.state
    }

    pub fn add_policy(&self) -> AddQuantityPolicy {
        self.add_policy
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ListSnapshot {
        self.publisher.borrow().clone()
    }

    /// Subscribe to snapshots. The receiver starts with the current one marked seen.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.publisher.subscribe()
    }

    /// Add an item from user-entered text.
    ///
    /// Returns `Ok(None)` when the name is blank. Quantity text that does not
    /// parse is handled according to the store's [`AddQuantityPolicy`].
    pub fn add_item(&mut self, name: &str, quantity_text: &str) -> Result<Option<ItemId>, ListError> {
        if name.trim().is_empty() {
            tracing::debug!("Ignoring add with blank name");
            return Ok(None);
        }

        let quantity = match (parse_quantity(quantity_text), self.add_policy) {
            (Ok(quantity), _) => quantity,
            (Err(err), AddQuantityPolicy::Reject) => {
                tracing::warn!(error = %err, "Rejected item quantity");
                return Err(err);
            }
            (Err(err), AddQuantityPolicy::UseDefault) => {
                tracing::debug!(error = %err, "Defaulting item quantity");
                DEFAULT_QUANTITY
            }
        };

        let id = ItemId(self.state.next_id);
        self.dispatch(ListIntent::Add {
            name: name.to_string(),
            quantity,
        });
        tracing::info!(%id, name, quantity, "Item added");
        Ok(Some(id))
    }

    pub fn begin_edit(&mut self, id: ItemId) {
        tracing::debug!(%id, "Begin edit");
        self.dispatch(ListIntent::BeginEdit { id });
    }

    pub fn commit_edit(&mut self, id: ItemId, name: &str, quantity: u32) {
        let changed = self.dispatch(ListIntent::CommitEdit {
            id,
            name: name.to_string(),
            quantity,
        });
        if changed {
            tracing::info!(%id, name, quantity, "Item updated");
        } else {
            tracing::debug!(%id, "Commit edit changed nothing");
        }
    }

    /// Commit an edit from user-entered text. Unparseable quantities become 1.
    pub fn commit_edit_text(&mut self, id: ItemId, name: &str, quantity_text: &str) {
        self.commit_edit(id, name, parse_quantity_or_default(quantity_text));
    }

    pub fn delete_item(&mut self, item: &Item) {
        if self.dispatch(ListIntent::Delete { item: item.clone() }) {
            tracing::info!(id = %item.id, name = %item.name, "Item deleted");
        } else {
            tracing::debug!(id = %item.id, "Delete matched no item");
        }
    }

    /// Apply an intent and republish if the items changed.
    ///
    /// Returns whether a new snapshot was published.
    pub fn dispatch(&mut self, intent: ListIntent) -> bool {
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), intent);
        debug_assert!(self.state.items.iter().filter(|item| item.is_editing()).count() <= 1);

        let items = &self.state.items;
        self.publisher.send_if_modified(|snapshot| {
            if snapshot.items() == items.as_slice() {
                return false;
            }
            *snapshot = ListSnapshot::new(items);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_only_on_change() {
        let mut store = ShoppingListStore::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.add_item("Milk", "2").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.begin_edit(ItemId(42));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn snapshot_tracks_state() {
        let mut store = ShoppingListStore::default();
        store.add_item("Milk", "2").unwrap();
        store.begin_edit(ItemId(1));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items(), store.state().items.as_slice());
        assert_eq!(
            snapshot.items().iter().find(|item| item.is_editing()).map(|item| item.id),
            Some(ItemId(1))
        );
    }

    #[test]
    fn rejected_add_leaves_counter_untouched() {
        let mut store = ShoppingListStore::new(AddQuantityPolicy::Reject);
        assert!(store.add_item("Milk", "lots").is_err());
        assert_eq!(store.state().next_id, 1);
        assert_eq!(store.add_item("Milk", "2"), Ok(Some(ItemId(1))));
    }

    #[test]
    fn dispatch_reports_whether_items_changed() {
        let mut store = ShoppingListStore::default();
        store.add_item("Milk", "2").unwrap();
        let missing = Item::new(ItemId(9), "Milk", 2);
        assert!(!store.dispatch(ListIntent::Delete { item: missing }));
        assert!(!store.dispatch(ListIntent::CommitEdit {
            id: ItemId(9),
            name: "Bread".to_string(),
            quantity: 5,
        }));
        assert!(store.dispatch(ListIntent::CommitEdit {
            id: ItemId(1),
            name: "Bread".to_string(),
            quantity: 5,
        }));
    }
}
