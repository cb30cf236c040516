//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Key presses mapped by the input dispatcher
/// - Pointer gestures (drag start, drop, cancel)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
