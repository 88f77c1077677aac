use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("SMTP delivery failed: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Could not build message: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("Invalid mail address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("No valid pairing for {participants} participants after {attempts} attempts")]
    DerangementError { participants: usize, attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Pairing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn config(message: impl Into<String>) -> Self {
        SantaError::ConfigError {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        SantaError::TransportError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::ConfigError { .. }
            | SantaError::MissingConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::ConfigValidationError { .. }
            | SantaError::AddressError(_) => ErrorCategory::Configuration,
            SantaError::SmtpError(_)
            | SantaError::MessageError(_)
            | SantaError::TransportError { .. } => ErrorCategory::Transport,
            SantaError::DerangementError { .. } => ErrorCategory::Pairing,
            SantaError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Pairing => ErrorSeverity::High,
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::MissingConfigError { .. } => {
                "Add the missing field to the [config] section of the TOML file"
            }
            SantaError::ConfigValidationError { .. } => {
                "Check that the config file is valid TOML with [config] and [[participants]] sections"
            }
            SantaError::ConfigError { .. } | SantaError::InvalidConfigValueError { .. } => {
                "Fix the reported value and run again; pass exactly one of --test or --send"
            }
            SantaError::AddressError(_) => "Check the mail addresses in the config file",
            SantaError::SmtpError(_) | SantaError::TransportError { .. } => {
                "Run with --test first to verify the sender address, password and relay"
            }
            SantaError::MessageError(_) => "Check the subject and body for invalid content",
            SantaError::DerangementError { .. } => {
                "Make sure participant names are distinct, or raise max_attempts"
            }
            SantaError::IoError(_) => "Check that the config path exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Transport => format!("Mail delivery stopped: {}", self),
            ErrorCategory::Pairing => format!("Could not draw a pairing: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
