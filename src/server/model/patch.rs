//! Presence-tracked merging for partial updates.
//!
//! Patch structs hold `Option<T>` per field: `None` means the field was absent or null in
//! the request and the stored value is kept. A supplied value always wins, including
//! `0` for numbers, except for text fields that can never legitimately be blank, where a
//! blank string counts as absent.

/// Keeps `current` unless a value was supplied.
pub fn merge<T>(current: T, supplied: Option<T>) -> T {
    supplied.unwrap_or(current)
}

/// Keeps `current` unless a non-blank string was supplied, storing it trimmed.
pub fn merge_required_text(current: String, supplied: Option<String>) -> String {
    match supplied.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current,
    }
}

/// Keeps `current` for an optional column unless a value was supplied.
pub fn merge_optional<T>(current: Option<T>, supplied: Option<T>) -> Option<T> {
    supplied.or(current)
}

/// Treats a blank string the same as an absent one.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
