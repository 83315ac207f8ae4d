//! Validation of the login form fields
//!
//! The rules are purely syntactic: no credential is ever checked against
//! anything. Checks run in a fixed order and stop at the first failure so the
//! user sees one message at a time.

use thiserror::Error;

/// Reasons a login attempt is rejected before anything is stored.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Validate raw form input and return the trimmed email.
///
/// The email is trimmed before any check; the password is taken verbatim and
/// its length is counted in UTF-16 code units, as a browser input reports it.
pub fn validate_credentials(
    email: &str,
    password: &str,
    min_password_length: usize,
) -> Result<String, ValidationError> {
    let email = email.trim_matches(is_js_whitespace);

    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if password.encode_utf16().count() < min_password_length {
        return Err(ValidationError::PasswordTooShort {
            min: min_password_length,
        });
    }

    Ok(email.to_string())
}

/// Check an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// That is: exactly one `@`, no whitespace anywhere, a non-empty local part,
/// and a domain with a dot that has at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// Whitespace as matched by a regex `\s` and stripped by `String.prototype.trim`.
///
/// Differs from `char::is_whitespace`: U+FEFF is included, U+0085 is not.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: usize = 6;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("user+tag@mail.co.uk"));
        assert!(is_valid_email("x@a..b"));
    }

    #[test]
    fn test_email_without_at() {
        assert!(!is_valid_email("jane.example.com"));
    }

    #[test]
    fn test_email_with_two_ats() {
        assert!(!is_valid_email("jane@doe@example.com"));
    }

    #[test]
    fn test_email_without_domain_dot() {
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane@."));
    }

    #[test]
    fn test_email_with_whitespace() {
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa mple.com"));
        assert!(!is_valid_email("jane@example.com\t"));
    }

    #[test]
    fn test_email_with_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_credentials("", "secret1", MIN),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_credentials("jane@example.com", "", MIN),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_credentials("   ", "secret1", MIN),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_fields_checked_before_email_format() {
        assert_eq!(
            validate_credentials("not-an-email", "", MIN),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_invalid_email_checked_before_password_length() {
        assert_eq!(
            validate_credentials("not-an-email", "123", MIN),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_short_password() {
        for password in ["1", "12345", "abcde"] {
            assert_eq!(
                validate_credentials("jane@example.com", password, MIN),
                Err(ValidationError::PasswordTooShort { min: 6 })
            );
        }
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(validate_credentials("jane@example.com", "ääääää", MIN).is_ok());
        assert!(validate_credentials("jane@example.com", "äääää", MIN).is_err());
        // Each emoji is a surrogate pair
        assert!(validate_credentials("jane@example.com", "😀😀😀", MIN).is_ok());
        assert_eq!(
            validate_credentials("jane@example.com", "😀😀", MIN),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_email_is_trimmed() {
        assert_eq!(
            validate_credentials("  jane@example.com \n", "secret1", MIN).as_deref(),
            Ok("jane@example.com")
        );
    }

    #[test]
    fn test_password_is_not_trimmed() {
        // Six characters only when the surrounding spaces count
        assert!(validate_credentials("jane@example.com", " abcd ", MIN).is_ok());
        assert!(validate_credentials("jane@example.com", " abc ", MIN).is_err());
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(!is_valid_email("ja\u{FEFF}ne@example.com"));
        assert_eq!(
            validate_credentials("\u{FEFF}jane@example.com\u{3000}", "secret1", MIN).as_deref(),
            Ok("jane@example.com")
        );
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(is_valid_email("ja\u{85}ne@example.com"));
        assert_eq!(
            validate_credentials("\u{85}jane@example.com", "secret1", MIN).as_deref(),
            Ok("\u{85}jane@example.com")
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
