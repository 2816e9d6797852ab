use crate::error::{Result, SupplierError};

/// Validation warnings returned for informational purposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Phone number is unusually short and may be a typo
    PhoneTooShort { phone: String, length: usize },
    /// Email domain has no dot; legal on intranets but usually a typo
    EmailDomainWithoutDot { email: String },
}

/// Result of field validation including the normalized value and any warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub normalized: String,
    pub warnings: Vec<ValidationWarning>,
}

impl FieldValidationResult {
    fn clean(normalized: String) -> Self {
        Self {
            normalized,
            warnings: Vec::new(),
        }
    }
}

/// Validates and normalizes a supplier name:
/// - Trims surrounding whitespace
/// - Must be non-empty
/// - Alphanumerics and spaces only
pub fn validate_name(name: &str) -> Result<FieldValidationResult> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SupplierError::InvalidArgument(
            "name must not be blank".to_string(),
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(SupplierError::InvalidArgument(
            "name may only contain alphanumeric characters and spaces".to_string(),
        ));
    }
    Ok(FieldValidationResult::clean(trimmed.to_string()))
}

/// Validates a phone number:
/// - Digits only
/// - At least 3 digits (hard requirement)
/// - Warns if fewer than 7 digits
pub fn validate_phone(phone: &str) -> Result<FieldValidationResult> {
    const MIN_DIGITS: usize = 3;
    const WARN_DIGITS: usize = 7;

    let trimmed = phone.trim();
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(SupplierError::InvalidArgument(
            "phone must contain only digits".to_string(),
        ));
    }
    if trimmed.len() < MIN_DIGITS {
        return Err(SupplierError::InvalidArgument(format!(
            "phone must be at least {} digits, got {}",
            MIN_DIGITS,
            trimmed.len()
        )));
    }

    let mut warnings = Vec::new();
    if trimmed.len() < WARN_DIGITS {
        warnings.push(ValidationWarning::PhoneTooShort {
            phone: trimmed.to_string(),
            length: trimmed.len(),
        });
    }

    Ok(FieldValidationResult {
        normalized: trimmed.to_string(),
        warnings,
    })
}

/// Validates an email address:
/// - Exactly one '@', with non-empty local part and domain
/// - No whitespace
/// - Warns when the domain has no dot
pub fn validate_email(email: &str) -> Result<FieldValidationResult> {
    let trimmed = email.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(SupplierError::InvalidArgument(
            "email must not contain whitespace".to_string(),
        ));
    }

    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next();
    let domain = match domain {
        Some(d) => d,
        None => {
            return Err(SupplierError::InvalidArgument(
                "email must contain '@'".to_string(),
            ));
        }
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(SupplierError::InvalidArgument(
            "email must be of the form local@domain".to_string(),
        ));
    }

    let mut warnings = Vec::new();
    if !domain.contains('.') {
        warnings.push(ValidationWarning::EmailDomainWithoutDot {
            email: trimmed.to_string(),
        });
    }

    Ok(FieldValidationResult {
        normalized: trimmed.to_string(),
        warnings,
    })
}

/// Validates a free-form field (company, product): trimmed and non-empty.
pub fn validate_free_form(label: &str, value: &str) -> Result<FieldValidationResult> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SupplierError::InvalidArgument(format!(
            "{} must not be blank",
            label
        )));
    }
    Ok(FieldValidationResult::clean(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        let result = validate_name("Alice Pauline").unwrap();
        assert_eq!(result.normalized, "Alice Pauline");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_name_trims() {
        let result = validate_name("  Alice  ").unwrap();
        assert_eq!(result.normalized, "Alice");
    }

    #[test]
    fn test_validate_name_blank() {
        let err = validate_name("   ").unwrap_err();
        match err {
            SupplierError::InvalidArgument(msg) => assert!(msg.contains("blank")),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_validate_name_rejects_punctuation() {
        let err = validate_name("Alice & Co").unwrap_err();
        match err {
            SupplierError::InvalidArgument(msg) => assert!(msg.contains("alphanumeric")),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_validate_phone_valid() {
        let result = validate_phone("5551234567").unwrap();
        assert_eq!(result.normalized, "5551234567");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_phone_short_warning() {
        let result = validate_phone("111").unwrap();
        assert_eq!(result.warnings.len(), 1);
        match &result.warnings[0] {
            ValidationWarning::PhoneTooShort { phone, length } => {
                assert_eq!(phone, "111");
                assert_eq!(*length, 3);
            }
            _ => panic!("Expected PhoneTooShort warning"),
        }
    }

    #[test]
    fn test_validate_phone_below_minimum() {
        let err = validate_phone("12").unwrap_err();
        match err {
            SupplierError::InvalidArgument(msg) => assert!(msg.contains("at least 3")),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_validate_phone_non_digits() {
        assert!(validate_phone("555-1234").is_err());
        assert!(validate_phone("+65123").is_err());
    }

    #[test]
    fn test_validate_email_valid() {
        let result = validate_email("alice@example.com").unwrap();
        assert_eq!(result.normalized, "alice@example.com");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_email_missing_at() {
        let err = validate_email("alice.example.com").unwrap_err();
        match err {
            SupplierError::InvalidArgument(msg) => assert!(msg.contains('@')),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_validate_email_empty_parts() {
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_email_dotless_domain_warns() {
        let result = validate_email("a@x").unwrap();
        assert_eq!(result.warnings.len(), 1);
        match &result.warnings[0] {
            ValidationWarning::EmailDomainWithoutDot { email } => assert_eq!(email, "a@x"),
            _ => panic!("Expected EmailDomainWithoutDot warning"),
        }
    }

    #[test]
    fn test_validate_free_form() {
        let result = validate_free_form("company", " ACo ").unwrap();
        assert_eq!(result.normalized, "ACo");
        assert!(validate_free_form("product", "").is_err());
    }
}
