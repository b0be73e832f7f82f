use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Material #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: String },

    #[error("Invalid CAS identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Material catalog error: {message}")]
    CatalogError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MissingField { .. }
            | EtlError::InvalidIdentifier { .. }
            | EtlError::SerializationError(_)
            | EtlError::CatalogError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) | EtlError::CsvError(_) => ErrorCategory::Io,
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingField { index, field } => {
                format!("Material #{} has no `{}`; nothing was exported", index, field)
            }
            EtlError::InvalidIdentifier { value, .. } => {
                format!("'{}' is not a usable CAS identifier; nothing was exported", value)
            }
            EtlError::ApiError(_) => "Could not reach the material catalog".to_string(),
            EtlError::CatalogError { message } => {
                format!("The material catalog could not be used: {}", message)
            }
            EtlError::SerializationError(_) => {
                "The material catalog is not valid JSON".to_string()
            }
            EtlError::IoError(e) => format!("Could not write the export file: {}", e),
            EtlError::CsvError(e) => format!("Could not encode the export file: {}", e),
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingField { .. } => {
                "Check that every catalog entry has both `cas_id` and `name`"
            }
            EtlError::InvalidIdentifier { .. } => {
                "Fix the identifier in the catalog, or pass --short-id-policy truncate to keep legacy formatting"
            }
            EtlError::ApiError(_) => "Check the catalog URL and network connectivity, then retry",
            EtlError::CatalogError { .. } | EtlError::SerializationError(_) => {
                "Check that the catalog source exists and holds a JSON array of objects with `cas_id` and `name`"
            }
            EtlError::IoError(_) | EtlError::CsvError(_) => {
                "Make sure the output directory exists and is writable"
            }
            _ => "Review the command-line flags and the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors_are_high_severity() {
        let err = EtlError::MissingField {
            index: 3,
            field: "name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity().exit_code(), 1);
        assert_eq!(err.to_string(), "Material #3 is missing required field `name`");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = EtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
        assert!(err.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_config_errors_fall_back_to_generic_message() {
        let err = EtlError::MissingConfigError {
            field: "catalog.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("catalog.path"));
    }
}
