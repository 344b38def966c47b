// file: src/utils/validation.rs
// description: input validation for configuration values
// reference: input validation patterns

use crate::error::{ProfileError, Result};

pub struct Validator;

impl Validator {
    /// GitHub logins: 1-39 ASCII alphanumerics or single hyphens, no leading
    /// or trailing hyphen.
    pub fn validate_org_name(org: &str) -> Result<()> {
        if org.is_empty() || org.len() > 39 {
            return Err(ProfileError::Validation(format!(
                "Organization name must be 1-39 characters: '{}'",
                org
            )));
        }

        if org.starts_with('-') || org.ends_with('-') || org.contains("--") {
            return Err(ProfileError::Validation(format!(
                "Organization name has misplaced hyphens: '{}'",
                org
            )));
        }

        if !org.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ProfileError::Validation(format!(
                "Organization name contains invalid characters: '{}'",
                org
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ProfileError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_prefix(prefix: &str) -> Result<()> {
        if prefix.trim().is_empty() {
            return Err(ProfileError::Validation(
                "Name prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_org_name() {
        assert!(Validator::validate_org_name("acme").is_ok());
        assert!(Validator::validate_org_name("acme-labs-2").is_ok());
        assert!(Validator::validate_org_name("").is_err());
        assert!(Validator::validate_org_name("-acme").is_err());
        assert!(Validator::validate_org_name("acme-").is_err());
        assert!(Validator::validate_org_name("ac--me").is_err());
        assert!(Validator::validate_org_name("acme/labs").is_err());
        assert!(Validator::validate_org_name(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://api.github.com").is_ok());
        assert!(Validator::validate_url("http://localhost:8080").is_ok());
        assert!(Validator::validate_url("api.github.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_prefix() {
        assert!(Validator::validate_prefix("awesome-").is_ok());
        assert!(Validator::validate_prefix("").is_err());
        assert!(Validator::validate_prefix("   ").is_err());
    }
}
