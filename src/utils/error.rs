use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{enum_name}: value cannot be null or empty")]
    EmptyEnumValue { enum_name: &'static str },

    #[error("{enum_name}: cannot create enum from '{value}' value")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown enum: {name}")]
    UnknownEnum { name: String },

    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A caller passed a value the model does not accept.
    InvalidArgument,
    /// Input text or a catalog name could not be resolved.
    Input,
    System,
}

impl ModelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyEnumValue { .. }
            | Self::UnknownEnumValue { .. }
            | Self::InvalidArgument { .. } => ErrorCategory::InvalidArgument,
            Self::UnknownEnum { .. }
            | Self::UnknownShape { .. }
            | Self::SerializationError(_)
            | Self::TomlError(_) => ErrorCategory::Input,
            Self::CsvError(_) | Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.category() == ErrorCategory::InvalidArgument
    }

    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_errors_are_invalid_argument() {
        let err = ModelError::EmptyEnumValue {
            enum_name: "VolumeType",
        };
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "VolumeType: value cannot be null or empty");

        let err = ModelError::UnknownEnumValue {
            enum_name: "VolumeType",
            value: "gp9".to_string(),
        };
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("'gp9'"));
    }

    #[test]
    fn test_categories() {
        let err = ModelError::UnknownShape {
            name: "Nope".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);

        let err = ModelError::IoError(std::io::Error::other("disk"));
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
