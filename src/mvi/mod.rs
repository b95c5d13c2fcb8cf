//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable state in the application follows the same
//! unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable value describing everything a view needs
//! - **Intent**: user action or system event
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
