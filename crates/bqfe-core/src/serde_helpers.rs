//! Shared serde helper functions used across the model records.

/// Serde default function that returns `true`.
///
/// Used for `is_activated`, which defaults to live rendering.
pub fn default_true() -> bool {
    true
}
