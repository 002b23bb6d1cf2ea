// src/utils/validation.rs
use validator::ValidationErrors;

/// Trims a submitted display name. Returns `None` when nothing is left.
pub fn trim_display_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Comma-separated, sorted list of the fields that failed validation.
pub fn invalid_fields(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    fields.join(", ")
}
