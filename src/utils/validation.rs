use crate::utils::error::{Result, SantaError};
use lettre::Address;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_mail_address(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Mail address cannot be empty".to_string(),
        });
    }

    value
        .parse::<Address>()
        .map(|_| ())
        .map_err(|e| SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid mail address: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Like [`validate_non_empty_string`] but never echoes the value back.
pub fn validate_secret(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_count(field_name: &str, count: usize, min_count: usize) -> Result<()> {
    if count < min_count {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: count.to_string(),
            reason: format!("At least {} entries are required", min_count),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(SantaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mail_address() {
        assert!(validate_mail_address("config.mail", "santa@example.com").is_ok());
        assert!(validate_mail_address("config.mail", "").is_err());
        assert!(validate_mail_address("config.mail", "not-an-address").is_err());
    }

    #[test]
    fn test_validate_min_count() {
        assert!(validate_min_count("participants", 2, 2).is_ok());
        assert!(validate_min_count("participants", 1, 2).is_err());
        assert!(validate_min_count("participants", 0, 2).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("participants.name", ["alice", "bob"]).is_ok());

        let err = validate_unique("participants.name", ["alice", "bob", "alice"]).unwrap_err();
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn test_validate_secret_does_not_leak_value() {
        let err = validate_secret("config.password", "   ").unwrap_err();
        assert!(matches!(err, SantaError::MissingConfigError { .. }));
        assert!(validate_secret("config.password", "hunter2").is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("config.smtp_port", 587u16, 1, u16::MAX).is_ok());
        assert!(validate_range("config.smtp_port", 0u16, 1, u16::MAX).is_err());
    }
}
