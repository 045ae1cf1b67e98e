use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkonError {
    #[error("Invalid {field} '{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error during short ID lookup: {0}")]
    LookupError(#[source] reqwest::Error),

    #[error("Error decoding the JSON response of the short ID lookup: {0}")]
    LookupDecodeError(#[source] serde_json::Error),

    #[error("Error during parking spot request: {0}")]
    ReservationError(#[source] reqwest::Error),

    #[error("Error decoding the JSON response of the parking spot request: {0}")]
    ReservationDecodeError(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Decoding,
    Configuration,
}

impl ParkonError {
    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        ParkonError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ParkonError::ValidationError { .. } => ErrorCategory::Validation,
            ParkonError::LookupError(_) | ParkonError::ReservationError(_) => {
                ErrorCategory::Network
            }
            ParkonError::LookupDecodeError(_)
            | ParkonError::ReservationDecodeError(_)
            | ParkonError::SerializationError(_) => ErrorCategory::Decoding,
            ParkonError::ConfigError { .. } | ParkonError::TomlError(_) | ParkonError::IoError(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Validation => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Decoding => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_name_the_failing_call() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ParkonError::LookupDecodeError(parse_err);
        assert!(err
            .to_string()
            .starts_with("Error decoding the JSON response of the short ID lookup: "));
        assert_eq!(err.category(), ErrorCategory::Decoding);
        assert_eq!(err.exit_code(), 4);

        let parse_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let err = ParkonError::ReservationDecodeError(parse_err);
        assert!(err
            .to_string()
            .starts_with("Error decoding the JSON response of the parking spot request: "));
    }

    #[test]
    fn test_validation_error_message() {
        let err = ParkonError::validation("hours", "5", "must be one of 2, 4, 8, 12, 24, 72");
        assert_eq!(
            err.to_string(),
            "Invalid hours '5': must be one of 2, 4, 8, 12, 24, 72"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = ParkonError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
    }
}
