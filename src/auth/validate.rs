//! Field-level validators. The forms check presence only; shape and
//! strength rules belong to whatever real account system replaces the stub
//! login. Returned reasons double as the toast text.

/// Validate a required text field. Returns the rejection reason, or `None`
/// when the field passes. Whitespace-only counts as empty.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Validate a password on registration. Not trimmed: leading/trailing
/// spaces are part of the password.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    None
}

/// Validate that the confirmation field repeats the password exactly.
pub fn validate_password_match(password: &str, confirm: &str) -> Option<String> {
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Validate the participation-terms checkbox.
pub fn validate_terms(agreed: bool) -> Option<String> {
    if !agreed {
        return Some("You must agree to the participation terms".to_string());
    }
    None
}

/// Validate a text field against a maximum length (empty is OK).
pub fn validate_max_len(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}
