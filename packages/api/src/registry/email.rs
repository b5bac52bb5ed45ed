//! Email normalization and validation.

/// Trim and lowercase. The result is the uniqueness key for the user table.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Accept only a `local@domain.tld`-shaped address whose domain is exactly
/// `gmail.com`. Returns `false` on any malformed input; never panics.
pub fn validate_email(email: &str) -> bool {
    let email = normalize_email(email);
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => domain == "gmail.com",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_gmail_addresses() {
        assert!(validate_email("user@gmail.com"));
        assert!(validate_email("  User@GMAIL.com  "));
    }

    #[test]
    fn rejects_other_domains() {
        assert!(!validate_email("user@yahoo.com"));
        assert!(!validate_email("user@gmail.org"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("@gmail.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@gmail"));
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@Gmail.COM "), "a@gmail.com");
    }
}
