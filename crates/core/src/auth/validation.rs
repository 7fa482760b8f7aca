use super::error::IdentityError;
use super::types::Identity;

/// Validates an identity before the host records it.
pub fn validate_identity(identity: &Identity) -> Result<(), IdentityError> {
    if identity.user_name.trim().is_empty() {
        return Err(IdentityError::EmptyUserName);
    }
    if !is_valid_email(&identity.email) {
        return Err(IdentityError::InvalidEmail(identity.email.clone()));
    }
    Ok(())
}

/// Checks the basic shape of an email address.
///
/// Deliberately shallow: one `@`, a non-empty local part, and a domain with
/// a dot. Real address verification belongs to the authentication layer.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("grace.hopper@navy.mil"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example.com."));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_validate_identity() {
        let valid = Identity::new("Ada", "ada@example.com");
        assert_eq!(validate_identity(&valid), Ok(()));

        let unnamed = Identity::new("  ", "ada@example.com");
        assert_eq!(validate_identity(&unnamed), Err(IdentityError::EmptyUserName));

        let bad_email = Identity::new("Ada", "nope");
        assert_eq!(
            validate_identity(&bad_email),
            Err(IdentityError::InvalidEmail("nope".to_string()))
        );
    }
}
