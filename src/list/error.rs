use thiserror::Error;

/// Errors surfaced by list operations.
///
/// Only `add_item` under the `reject` policy produces these; every other
/// failure is absorbed as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Quantity '{text}' is not a whole number")]
    InvalidQuantity { text: String },

    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}
