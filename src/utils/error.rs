use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntispamError {
    #[error("Missing attribute on host object: {field}")]
    MissingAttribute { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AntispamError {
    pub fn missing(field: &str) -> Self {
        Self::MissingAttribute {
            field: field.to_string(),
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingAttribute { field } => {
                format!("The incoming request did not carry {}", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            Self::ConfigValidationError { message, .. } => message.clone(),
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not encode parameters: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AntispamError>;
