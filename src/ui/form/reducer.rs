use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormFields, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenAdd => FormState::Adding {
                fields: FormFields::new("", "1"),
            },
            FormIntent::OpenEdit { id, name, quantity } => FormState::Editing {
                id,
                fields: FormFields::new(name, quantity.to_string()),
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::Input(ch) => map_fields(state, |fields| match fields.focused {
                FormField::Name if !ch.is_control() => fields.name.push(ch),
                FormField::Quantity if ch.is_ascii_digit() => fields.quantity.push(ch),
                _ => {}
            }),
            FormIntent::Backspace => map_fields(state, |fields| {
                match fields.focused {
                    FormField::Name => fields.name.pop(),
                    FormField::Quantity => fields.quantity.pop(),
                };
            }),
            FormIntent::NextField => map_fields(state, |fields| {
                fields.focused = fields.focused.next();
            }),
        }
    }
}

fn map_fields(state: FormState, f: impl FnOnce(&mut FormFields)) -> FormState {
    match state {
        FormState::Hidden => FormState::Hidden,
        FormState::Adding { mut fields } => {
            f(&mut fields);
            FormState::Adding { fields }
        }
        FormState::Editing { id, mut fields } => {
            f(&mut fields);
            FormState::Editing { id, fields }
        }
    }
}
