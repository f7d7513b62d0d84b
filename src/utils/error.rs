use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {}", .errors.join(" "))]
    Validation { errors: Vec<String> },
}

impl FormatError {
    pub fn config(message: impl Into<String>) -> Self {
        FormatError::Config {
            message: message.into(),
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::Parse(e) => format!("Input is not valid JSON: {}", e),
            FormatError::Io(e) => format!("Could not read or write a file: {}", e),
            FormatError::NotAnObject { found } => {
                format!("Input must be a JSON object or an array of objects, got {}", found)
            }
            FormatError::Config { message } => format!("Configuration problem: {}", message),
            FormatError::Validation { errors } => {
                format!("Record failed validation ({} problem(s))", errors.len())
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::Parse(_) => "Check the input for trailing commas or unquoted keys",
            FormatError::Io(_) => "Make sure the file exists and is readable",
            FormatError::NotAnObject { .. } => {
                "Wrap the record in {...} or provide an array like [{...}, {...}]"
            }
            FormatError::Config { .. } => "Review the TOML configuration file and CLI flags",
            FormatError::Validation { .. } => {
                "Fill in Station, Network, Latitude, Longitude and Elevation with in-range values"
            }
        }
    }
}

/// 以 JSON 值的種類描述型別，用於錯誤訊息
pub fn describe_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(_) => "a boolean".to_string(),
        serde_json::Value::Number(_) => "a number".to_string(),
        serde_json::Value::String(_) => "a string".to_string(),
        serde_json::Value::Array(_) => "an array".to_string(),
        serde_json::Value::Object(_) => "an object".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
