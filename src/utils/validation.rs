use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._]*[a-zA-Z0-9]+\.[a-zA-Z0-9]+@[a-zA-Z0-9._]+\.[a-zA-Z]{2,}$").unwrap()
});

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z]{4,}[0-9]{3,}$").unwrap());

/// Login emails must look like `first.last@...` and belong to the university
/// domain. Callers check this before `register`; the store itself does not.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email) && email.ends_with("@university.com")
}

/// Passwords start with a capital letter, carry at least five letters, and
/// end with three or more digits.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}
