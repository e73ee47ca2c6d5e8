//! Error types for the toaster

/// Errors raised while configuring the toaster or creating toasts.
#[derive(Debug, thiserror::Error)]
pub enum ToasterError {
    #[error("The style name '{0}' does not exist")]
    UnknownStyle(String),

    #[error("A toaster is already active in this process")]
    AlreadyActive,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ToasterError>;
