use crate::list::ItemId;
use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }
}

/// Text typed so far. Never authoritative; the store owns the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub quantity: String,
    pub focused: FormField,
}

impl FormFields {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            focused: FormField::Name,
        }
    }

    /// Whether the add dialog should let the user confirm.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.quantity.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Adding {
        fields: FormFields,
    },
    Editing {
        id: ItemId,
        fields: FormFields,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            Self::Hidden => None,
            Self::Adding { fields } | Self::Editing { fields, .. } => Some(fields),
        }
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }
}
