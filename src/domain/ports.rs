use crate::domain::model::{OutgoingMail, Participant};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Delivers a single message. Implementations must either deliver or fail;
/// the engine treats every error as fatal for the run.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<()>;
}

pub trait SettingsProvider: Send + Sync {
    fn sender(&self) -> &str;
    fn subject(&self) -> &str;
    fn body_template(&self) -> &str;
    fn participants(&self) -> &[Participant];
    fn send_interval(&self) -> Duration;
    fn max_attempts(&self) -> usize;
}
