//! Credential format policy for the session gate.
//!
//! The policy only checks the shape of a user id / password pair; nothing is
//! compared against stored credentials.
//!
//! - User id: at least 8 UTF-16 code units
//! - Password: at least 10 characters, drawn only from `A-Z a-z 0-9 !@#$%^&*`,
//!   with at least one uppercase letter, one digit and one special character

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum user id length, in UTF-16 code units.
pub const MIN_USER_ID_LEN: usize = 8;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 10;

/// The first policy rule a credential pair violates.
///
/// Variants never carry the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("user id shorter than {MIN_USER_ID_LEN} code units")]
    UserIdTooShort,

    #[error("password shorter than {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("password contains a character outside A-Z, a-z, 0-9, !@#$%^&*")]
    PasswordCharset,

    #[error("password has no uppercase letter")]
    MissingUppercase,

    #[error("password has no digit")]
    MissingDigit,

    #[error("password has no special character")]
    MissingSpecial,
}

struct PasswordPatterns {
    charset: Regex,
    uppercase: Regex,
    digit: Regex,
    special: Regex,
}

static PASSWORD_PATTERNS: OnceLock<PasswordPatterns> = OnceLock::new();

fn patterns() -> &'static PasswordPatterns {
    PASSWORD_PATTERNS.get_or_init(|| PasswordPatterns {
        charset: Regex::new(r"^[A-Za-z0-9!@#$%^&*]*$").expect("Valid regex"),
        uppercase: Regex::new(r"[A-Z]").expect("Valid regex"),
        digit: Regex::new(r"[0-9]").expect("Valid regex"),
        special: Regex::new(r"[!@#$%^&*]").expect("Valid regex"),
    })
}

/// Check the user id length rule.
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
///
/// # Errors
/// Returns `CredentialError::UserIdTooShort` for ids under 8 code units.
pub fn validate_user_id(user_id: &str) -> Result<(), CredentialError> {
    if user_id.encode_utf16().count() < MIN_USER_ID_LEN {
        return Err(CredentialError::UserIdTooShort);
    }
    Ok(())
}

/// Check every password rule, reporting the first one violated.
///
/// # Errors
/// Returns the violated rule.
pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    let patterns = patterns();

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    if !patterns.charset.is_match(password) {
        return Err(CredentialError::PasswordCharset);
    }
    if !patterns.uppercase.is_match(password) {
        return Err(CredentialError::MissingUppercase);
    }
    if !patterns.digit.is_match(password) {
        return Err(CredentialError::MissingDigit);
    }
    if !patterns.special.is_match(password) {
        return Err(CredentialError::MissingSpecial);
    }
    Ok(())
}

/// Check a full credential pair.
///
/// # Errors
/// Returns the first violated rule, user id first.
pub fn validate(user_id: &str, password: &str) -> Result<(), CredentialError> {
    validate_user_id(user_id)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_pair() {
        assert!(validate("nurse001", "Secure#123").is_ok());
        assert!(validate("reception-desk", "ABCDEFGHI1!").is_ok());
    }

    #[test]
    fn test_user_id_boundary() {
        assert_eq!(validate_user_id("abcdefg"), Err(CredentialError::UserIdTooShort));
        assert!(validate_user_id("abcdefgh").is_ok());
        assert_eq!(validate_user_id(""), Err(CredentialError::UserIdTooShort));
    }

    #[test]
    fn test_user_id_counts_utf16_units_not_bytes() {
        // 7 code units, 14 bytes
        assert_eq!(validate_user_id("ééééééé"), Err(CredentialError::UserIdTooShort));
    }

    #[test]
    fn test_user_id_astral_characters_count_twice() {
        // 4 characters, 8 UTF-16 code units
        assert!(validate_user_id("😀😀😀😀").is_ok());
        assert_eq!(validate_user_id("😀😀😀"), Err(CredentialError::UserIdTooShort));
        assert!(validate("😀😀😀😀", "Secure#123").is_ok());
    }

    #[test]
    fn test_password_length_boundary() {
        assert_eq!(validate_password("Abcdef1!x"), Err(CredentialError::PasswordTooShort));
        assert!(validate_password("Abcdef1!xy").is_ok());
    }

    #[test]
    fn test_password_missing_classes() {
        assert_eq!(validate_password("abcdefgh1!"), Err(CredentialError::MissingUppercase));
        assert_eq!(validate_password("Abcdefghi!"), Err(CredentialError::MissingDigit));
        assert_eq!(validate_password("Abcdefghi1"), Err(CredentialError::MissingSpecial));
    }

    #[test]
    fn test_password_rejects_foreign_characters() {
        assert_eq!(validate_password("Abcdef 1!xy"), Err(CredentialError::PasswordCharset));
        assert_eq!(validate_password("Abcdef1!xy-"), Err(CredentialError::PasswordCharset));
        assert_eq!(validate_password("Abcdef1!xyé"), Err(CredentialError::PasswordCharset));
        assert_eq!(validate_password("Abcdef1!xy("), Err(CredentialError::PasswordCharset));
    }

    #[test]
    fn test_every_special_character_counts() {
        for special in ['!', '@', '#', '$', '%', '^', '&', '*'] {
            let password = format!("Abcdefgh1{special}");
            assert!(validate_password(&password).is_ok(), "{password} should pass");
        }
    }

    #[test]
    fn test_user_id_checked_first() {
        assert_eq!(validate("short", "weak"), Err(CredentialError::UserIdTooShort));
    }
}
