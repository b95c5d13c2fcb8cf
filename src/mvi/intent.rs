//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, confirmations)
/// - System events (ticks, resizes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
