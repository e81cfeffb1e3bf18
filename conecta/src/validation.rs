//! Client-side form validation
//!
//! Mirrors what the sign-up and profile screens enforce before any network
//! call. The backend still has the final word; these checks exist so the UI
//! can flag fields immediately.

use crate::interface::{ConectaError, RegistrationForm};
use validator::Validate;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field order used to report the first failing field deterministically
const FIELD_ORDER: &[&str] = &["name", "email", "password", "password_confirmation"];

#[derive(Debug, Validate)]
struct RegistrationCheck {
    #[validate(length(min = 1, message = "Name is required"))]
    name: String,
    #[validate(email(message = "Invalid e-mail address"))]
    email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    password_confirmation: String,
}

/// Validate a registration form, reporting the first failing field
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ConectaError> {
    let check = RegistrationCheck {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
    };
    into_field_error(check.validate())
}

/// Validate a bare e-mail address (login and password recovery)
pub fn validate_email(email: &str) -> Result<(), ConectaError> {
    if validator::validate_email(email.trim()) {
        Ok(())
    } else {
        Err(ConectaError::Validation {
            field: "email".to_string(),
            message: "Invalid e-mail address".to_string(),
        })
    }
}

/// Validate a password against the minimum length rule
pub fn validate_password(password: &str) -> Result<(), ConectaError> {
    if password.len() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ConectaError::Validation {
            field: "password".to_string(),
            message: format!("Password must have at least {MIN_PASSWORD_LEN} characters"),
        })
    }
}

/// Validate a display name (profile edits)
pub fn validate_name(name: &str) -> Result<(), ConectaError> {
    if name.trim().is_empty() {
        Err(ConectaError::Validation {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Map validator's error set to the first failing field, in `FIELD_ORDER`
fn into_field_error(result: Result<(), validator::ValidationErrors>) -> Result<(), ConectaError> {
    let errors = match result {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let by_field = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(field_errors) = by_field.get(field) {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                return Err(ConectaError::Validation {
                    field: field.to_string(),
                    message,
                });
            }
        }
    }
    // Shouldn't happen: a non-empty error set always names a field
    Err(ConectaError::InvalidInput("validation failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        }
    }

    fn failing_field(form: &RegistrationForm) -> String {
        match validate_registration(form) {
            Err(ConectaError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_registration(&form()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = form();
        form.name = "   ".to_string();
        assert_eq!(failing_field(&form), "name");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = form();
        form.email = "not-an-email".to_string();
        assert_eq!(failing_field(&form), "email");
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = form();
        form.password = "12345".to_string();
        form.password_confirmation = "12345".to_string();
        assert_eq!(failing_field(&form), "password");
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let mut form = form();
        form.password_confirmation = "different".to_string();
        assert_eq!(failing_field(&form), "password_confirmation");
    }

    #[test]
    fn test_first_failing_field_is_deterministic() {
        // Several fields wrong at once: name is reported first
        let form = RegistrationForm {
            name: String::new(),
            email: "nope".to_string(),
            password: "x".to_string(),
            password_confirmation: "y".to_string(),
        };
        assert_eq!(failing_field(&form), "name");
    }

    #[test]
    fn test_bare_email_validation() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("  ana@example.com  ").is_ok());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_password_rule() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("12345").is_err());
    }
}
