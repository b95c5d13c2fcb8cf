use crate::list::ItemId;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Show the add dialog with empty name and a quantity of 1.
    OpenAdd,
    /// Start an inline edit prefilled from the item. Replaces any open form.
    OpenEdit {
        id: ItemId,
        name: String,
        quantity: u32,
    },
    /// Typed character for the focused field. Quantity accepts digits only.
    Input(char),
    Backspace,
    NextField,
    Close,
}

impl Intent for FormIntent {}
