//! Transient input state for the add dialog and the inline editor.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_add_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormFields, FormState};
