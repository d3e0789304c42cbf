//! Request payload validation helpers

use crate::utils::AppError;

/// Minimum password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reject empty or whitespace-only strings
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Reject non-positive quantities
pub fn require_positive(field: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!("{} must be positive", field)));
    }
    Ok(())
}

/// Validate registration credentials
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    require_non_empty("username", username)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
