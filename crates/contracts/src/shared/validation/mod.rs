//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self { required: false }
    }

    pub const fn required() -> Self {
        Self { required: true }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Whitespace-only counts as blank.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Owner Name"),
            Err("Owner Name is required".to_string())
        );
        assert!(rules.validate_string("Asha", "Owner Name").is_ok());
    }

    #[test]
    fn test_optional_accepts_blank() {
        assert!(ValidationRules::none().validate_string("", "Email").is_ok());
    }
}
