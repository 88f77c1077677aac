use crate::core::derangement::{DEFAULT_MAX_ATTEMPTS, MIN_PARTICIPANTS};
use crate::core::{Participant, RunMode, SettingsProvider};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{
    validate_mail_address, validate_min_count, validate_non_empty_string, validate_range,
    validate_secret, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SEND_INTERVAL_MS: u64 = 2500;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SantaConfig {
    pub config: MailSettings,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct MailSettings {
    pub password: String,
    pub mail: String,
    pub subject: String,
    pub body: String,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub send_interval_ms: Option<u64>,
    pub max_attempts: Option<usize>,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("password", &"<redacted>")
            .field("mail", &self.mail)
            .field("subject", &self.subject)
            .field("body", &self.body)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("send_interval_ms", &self.send_interval_ms)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl SantaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: SantaConfig =
            toml::from_str(content).map_err(|e| SantaError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // Only the credential is expanded; the body uses the same `${...}` syntax.
        config.config.password = substitute_env_vars(&config.config.password);
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_mail_settings()?;
        self.validate_participants()
    }

    /// The healthcheck never looks at participants, so only the mail
    /// settings have to be valid for it.
    pub fn validate_for(&self, mode: RunMode) -> Result<()> {
        match mode {
            RunMode::Test => self.validate_mail_settings(),
            RunMode::Send => self.validate_config(),
        }
    }

    pub fn validate_mail_settings(&self) -> Result<()> {
        let settings = &self.config;

        validate_secret("config.password", &settings.password)?;
        validate_mail_address("config.mail", &settings.mail)?;
        validate_non_empty_string("config.subject", &settings.subject)?;
        validate_non_empty_string("config.body", &settings.body)?;

        if let Some(host) = &settings.smtp_host {
            validate_non_empty_string("config.smtp_host", host)?;
        }
        if let Some(port) = settings.smtp_port {
            validate_range("config.smtp_port", port, 1, u16::MAX)?;
        }
        if let Some(interval) = settings.send_interval_ms {
            validate_range("config.send_interval_ms", interval, 0, 60_000)?;
        }
        if let Some(attempts) = settings.max_attempts {
            validate_range("config.max_attempts", attempts, 1, 1_000_000)?;
        }

        Ok(())
    }

    pub fn validate_participants(&self) -> Result<()> {
        validate_min_count("participants", self.participants.len(), MIN_PARTICIPANTS)?;
        for (index, participant) in self.participants.iter().enumerate() {
            validate_non_empty_string(&format!("participants[{}].name", index), &participant.name)?;
            validate_mail_address(&format!("participants[{}].mail", index), &participant.mail)?;
        }
        validate_unique(
            "participants.name",
            self.participants.iter().map(|p| p.name.as_str()),
        )?;

        Ok(())
    }

    pub fn password(&self) -> &str {
        &self.config.password
    }

    pub fn smtp_host(&self) -> &str {
        self.config.smtp_host.as_deref().unwrap_or(DEFAULT_SMTP_HOST)
    }

    pub fn smtp_port(&self) -> u16 {
        self.config.smtp_port.unwrap_or(DEFAULT_SMTP_PORT)
    }
}

/// Replaces `${VAR}` with the environment value; unset variables stay as written.
fn substitute_env_vars(value: &str) -> String {
    ENV_VAR
        .replace_all(value, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl SettingsProvider for SantaConfig {
    fn sender(&self) -> &str {
        &self.config.mail
    }

    fn subject(&self) -> &str {
        &self.config.subject
    }

    fn body_template(&self) -> &str {
        &self.config.body
    }

    fn participants(&self) -> &[Participant] {
        &self.participants
    }

    fn send_interval(&self) -> Duration {
        Duration::from_millis(self.config.send_interval_ms.unwrap_or(DEFAULT_SEND_INTERVAL_MS))
    }

    fn max_attempts(&self) -> usize {
        self.config.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Validate for SantaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
