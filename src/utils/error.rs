use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl CalcError {
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(_) => "Could not talk to the terminal.".to_string(),
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("The configuration could not be used: {}", self)
            }
            Self::SerializationError(_) => "Could not format the result.".to_string(),
            Self::ProcessingError { message } => format!("Something went wrong: {}", message),
        }
    }

    /// 非正常執行流程錯誤的退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => 1,
            Self::IoError(_) => 2,
            Self::SerializationError(_) | Self::ProcessingError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let config = CalcError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let io = CalcError::IoError(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(io.exit_code(), 2);

        assert_eq!(CalcError::processing("missing field").exit_code(), 3);
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = CalcError::InvalidConfigValueError {
            field: "logging.level".to_string(),
            value: "loud".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'loud' for logging.level: unknown level"
        );
        assert!(err.user_friendly_message().contains("logging.level"));
    }
}
