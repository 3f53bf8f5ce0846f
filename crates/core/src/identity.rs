//! Field rules for user registration.

use std::sync::LazyLock;

use regex::Regex;

/// Characters counted as "special" for password strength.
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum password length.
const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Check that a string looks like an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check password strength: at least 8 characters drawn from letters, digits
/// and `@$!%*?&`, with at least one uppercase letter, one lowercase letter,
/// one digit, and one special character.
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(c);
    if !password.chars().all(allowed) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
