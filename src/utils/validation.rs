use crate::utils::error::{RegisterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegisterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegisterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value.trim())) {
        return Ok(());
    }

    Err(RegisterError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RegisterError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegisterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("register.input_path", "register.txt").is_ok());
        assert!(validate_path("register.input_path", "").is_err());
        assert!(validate_path("register.input_path", "   ").is_err());
        assert!(validate_path("register.input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let formats = ["text", "json", "csv"];
        assert!(validate_one_of("report.format", "JSON", &formats).is_ok());
        assert!(validate_one_of("report.format", "xml", &formats).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("register", &missing),
            Err(RegisterError::MissingConfigError { .. })
        ));
        assert_eq!(validate_required_field("register", &Some(3)).unwrap(), &3);
    }
}
