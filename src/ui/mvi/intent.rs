//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents are either user actions (submit, page change, selection) or
/// system events (a search response arriving). Reducers consume them.
pub trait Intent: Send + 'static {}
