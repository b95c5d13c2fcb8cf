use crate::config::{AddQuantityPolicy, Config};
use crate::list::{Item, ListError, ListSnapshot, ShoppingListStore};
use crate::mvi::Reducer;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use tokio::sync::watch;

/// What the keyboard currently drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Browse,
    Adding,
    Editing,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    title: String,
    /// Authoritative list state. The view below is the only way rendering sees it.
    store: ShoppingListStore,
    view: watch::Receiver<ListSnapshot>,
    snapshot: ListSnapshot,
    selected: usize,
    /// Transient input text (MVI pattern).
    form: FormState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_store(
            config.ui.title.clone(),
            ShoppingListStore::new(config.list.add_quantity_policy),
        )
    }

    pub fn with_store(title: String, store: ShoppingListStore) -> Self {
        let view = store.subscribe();
        let snapshot = store.snapshot();
        Self {
            should_quit: false,
            title,
            store,
            view,
            snapshot,
            selected: 0,
            form: FormState::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn add_policy(&self) -> AddQuantityPolicy {
        self.store.add_policy()
    }

    /// Latest snapshot received from the store.
    pub fn snapshot(&self) -> &ListSnapshot {
        &self.snapshot
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        if !self.form.is_visible() {
            Mode::Browse
        } else if self.form.editing_id().is_some() {
            Mode::Editing
        } else {
            Mode::Adding
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.snapshot.items().get(self.selected)
    }

    pub fn on_tick(&mut self) {
        self.sync_snapshot();
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.snapshot.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_add_form(&mut self) {
        self.dispatch_form(FormIntent::OpenAdd);
    }

    pub fn cancel_add_form(&mut self) {
        if self.mode() == Mode::Adding {
            self.dispatch_form(FormIntent::Close);
        }
    }

    /// Submit the add dialog.
    ///
    /// The dialog closes only when an item was created; a blank name or a
    /// rejected quantity leaves it open with the typed text intact.
    pub fn submit_add_form(&mut self) -> Result<(), ListError> {
        let FormState::Adding { fields } = &self.form else {
            return Ok(());
        };
        let (name, quantity) = (fields.name.clone(), fields.quantity.clone());
        if self.store.add_item(&name, &quantity)?.is_some() {
            self.dispatch_form(FormIntent::Close);
            self.sync_snapshot();
            self.selected = self.snapshot.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Put the selected item into edit mode, displacing any edit in progress.
    pub fn begin_edit_selected(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        self.store.begin_edit(item.id);
        self.dispatch_form(FormIntent::OpenEdit {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        });
        self.sync_snapshot();
    }

    pub fn commit_edit(&mut self) {
        let FormState::Editing { id, fields } = &self.form else {
            return;
        };
        let (id, name, quantity) = (*id, fields.name.clone(), fields.quantity.clone());
        self.store.commit_edit_text(id, &name, &quantity);
        self.dispatch_form(FormIntent::Close);
        self.sync_snapshot();
    }

    pub fn delete_selected(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        if self.form.editing_id() == Some(item.id) {
            self.dispatch_form(FormIntent::Close);
        }
        self.store.delete_item(&item);
        self.sync_snapshot();
    }

    /// Pull the latest snapshot if the store published one.
    fn sync_snapshot(&mut self) {
        if self.view.has_changed().unwrap_or(false) {
            self.snapshot = self.view.borrow_and_update().clone();
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
