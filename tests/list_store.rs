use shoplist::config::AddQuantityPolicy;
use shoplist::list::{Item, ItemId, ItemMode, ListError, ListIntent, ShoppingListStore};

fn store_with(names: &[(&str, &str)]) -> ShoppingListStore {
    let mut store = ShoppingListStore::default();
    for (name, quantity) in names {
        store.add_item(name, quantity).unwrap();
    }
    store
}

fn editing_count(store: &ShoppingListStore) -> usize {
    store.snapshot().items().iter().filter(|item| item.is_editing()).count()
}

// -- Scenarios ----------------------------------------------------------------

#[test]
fn add_milk_to_empty_list() {
    let mut store = ShoppingListStore::default();
    assert_eq!(store.add_item("Milk", "2"), Ok(Some(ItemId(1))));
    assert_eq!(
        store.snapshot().items(),
        &[Item {
            id: ItemId(1),
            name: "Milk".to_string(),
            quantity: 2,
            mode: ItemMode::Viewing,
        }]
    );
}

#[test]
fn blank_name_is_rejected_silently() {
    let mut store = store_with(&[("Milk", "2")]);
    assert_eq!(store.add_item("", "5"), Ok(None));
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn blank_name_wins_over_bad_quantity() {
    let mut store = ShoppingListStore::default();
    assert_eq!(store.add_item("  ", "abc"), Ok(None));
    assert!(store.snapshot().is_empty());
}

#[test]
fn second_begin_edit_displaces_first() {
    let mut store = store_with(&[("Milk", "2"), ("Eggs", "12")]);
    store.begin_edit(ItemId(2));
    store.begin_edit(ItemId(1));
    let snapshot = store.snapshot();
    assert_eq!(editing_count(&store), 1);
    assert_eq!(
        snapshot.items().iter().find(|item| item.is_editing()).map(|item| item.id),
        Some(ItemId(1))
    );
}

#[test]
fn commit_milk_to_bread() {
    let mut store = store_with(&[("Milk", "2")]);
    store.begin_edit(ItemId(1));
    store.commit_edit(ItemId(1), "Bread", 5);
    assert_eq!(store.snapshot().items(), &[Item::new(ItemId(1), "Bread", 5)]);
}

#[test]
fn delete_only_item() {
    let mut store = store_with(&[("Milk", "2")]);
    let item = store.snapshot().items()[0].clone();
    store.delete_item(&item);
    assert!(store.snapshot().is_empty());
}

// -- Properties ---------------------------------------------------------------

#[test]
fn length_counts_only_non_blank_adds() {
    let inputs = [
        ("Milk", "2"),
        ("", "1"),
        ("Eggs", "12"),
        ("   ", "3"),
        ("Bread", "1"),
        ("\t", "9"),
        ("Tea", "40"),
    ];
    let mut store = ShoppingListStore::default();
    let mut expected = 0;
    for (name, quantity) in inputs {
        store.add_item(name, quantity).unwrap();
        if !name.trim().is_empty() {
            expected += 1;
        }
        assert_eq!(store.snapshot().len(), expected);
    }
}

#[test]
fn begin_edit_leaves_exactly_the_target_editing() {
    let mut store = store_with(&[("Milk", "2"), ("Eggs", "12"), ("Bread", "1")]);
    for id in [3, 1, 2, 2, 3] {
        store.begin_edit(ItemId(id));
        assert_eq!(editing_count(&store), 1);
        assert_eq!(
            store.snapshot().items().iter().find(|item| item.is_editing()).map(|item| item.id),
            Some(ItemId(id))
        );
    }
}

#[test]
fn commit_edit_clears_every_edit_flag() {
    let mut store = store_with(&[("Milk", "2"), ("Eggs", "12")]);
    store.begin_edit(ItemId(2));
    store.commit_edit(ItemId(1), "Oat milk", 3);
    assert_eq!(editing_count(&store), 0);
    let snapshot = store.snapshot();
    let item = snapshot.items().iter().find(|item| item.id == ItemId(1)).unwrap();
    assert_eq!((item.name.as_str(), item.quantity), ("Oat milk", 3));
}

#[test]
fn delete_absent_record_leaves_length_unchanged() {
    let mut store = store_with(&[("Milk", "2"), ("Eggs", "12")]);
    store.delete_item(&Item::new(ItemId(9), "Milk", 2));
    assert_eq!(store.snapshot().len(), 2);

    let present = store.snapshot().items()[1].clone();
    store.delete_item(&present);
    assert_eq!(store.snapshot().len(), 1);
    assert!(!store.snapshot().items().contains(&present));
}

#[test]
fn begin_edit_twice_equals_once() {
    let mut once = store_with(&[("Milk", "2"), ("Eggs", "12")]);
    let mut twice = store_with(&[("Milk", "2"), ("Eggs", "12")]);
    once.begin_edit(ItemId(2));
    twice.begin_edit(ItemId(2));
    twice.begin_edit(ItemId(2));
    assert_eq!(once.snapshot(), twice.snapshot());
}

// -- Quantity text ------------------------------------------------------------

#[test]
fn commit_edit_text_defaults_bad_quantity_to_one() {
    let mut store = store_with(&[("Milk", "2")]);
    store.commit_edit_text(ItemId(1), "Milk", "a dozen");
    assert_eq!(store.snapshot().items()[0].quantity, 1);
    store.commit_edit_text(ItemId(1), "Milk", "");
    assert_eq!(store.snapshot().items()[0].quantity, 1);
    store.commit_edit_text(ItemId(1), "Milk", " 4 ");
    assert_eq!(store.snapshot().items()[0].quantity, 4);
}

#[test]
fn reject_policy_refuses_bad_quantity() {
    let mut store = ShoppingListStore::new(AddQuantityPolicy::Reject);
    assert_eq!(
        store.add_item("Milk", "two"),
        Err(ListError::InvalidQuantity {
            text: "two".to_string()
        })
    );
    assert_eq!(store.add_item("Milk", "0"), Err(ListError::ZeroQuantity));
    assert!(store.snapshot().is_empty());
}

#[test]
fn default_policy_adds_with_quantity_one() {
    let mut store = ShoppingListStore::new(AddQuantityPolicy::UseDefault);
    assert_eq!(store.add_item("Milk", "two"), Ok(Some(ItemId(1))));
    assert_eq!(store.snapshot().items()[0].quantity, 1);
}

// -- Publishing ---------------------------------------------------------------

#[test]
fn subscribers_see_each_change() {
    let mut store = ShoppingListStore::default();
    let mut rx = store.subscribe();

    store.add_item("Milk", "2").unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 1);

    store.begin_edit(ItemId(1));
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().items()[0].is_editing());

    // Same intent again changes nothing, so nothing is published
    store.begin_edit(ItemId(1));
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn old_snapshots_are_immutable() {
    let mut store = store_with(&[("Milk", "2")]);
    let before = store.snapshot();
    store.commit_edit(ItemId(1), "Bread", 5);
    assert_eq!(before.items()[0].name, "Milk");
    assert_eq!(store.snapshot().items()[0].name, "Bread");
}

#[test]
fn typed_zero_quantity_is_stored_as_one() {
    let mut store = store_with(&[("Milk", "2")]);
    store.commit_edit(ItemId(1), "Milk", 0);
    store.dispatch(ListIntent::Add {
        name: "Eggs".to_string(),
        quantity: 0,
    });
    assert!(store.snapshot().items().iter().all(|item| item.quantity >= 1));
    assert_eq!(store.snapshot().items()[1].quantity, 1);
}
