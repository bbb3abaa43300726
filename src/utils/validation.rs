use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.currency_symbol", "€").is_ok());
        assert!(validate_non_empty_string("display.currency_symbol", "").is_err());
        assert!(validate_non_empty_string("display.currency_symbol", "   ").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["debug", "info"];
        assert!(validate_one_of("logging.level", "info", &levels).is_ok());

        match validate_one_of("logging.level", "loud", &levels) {
            Err(CalcError::InvalidConfigValueError { field, value, reason }) => {
                assert_eq!(field, "logging.level");
                assert_eq!(value, "loud");
                assert!(reason.contains("debug, info"));
            }
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }
}
